use crate::scene::Scene;
use crate::types::CameraUniform;

/// Drawing surface the animation driver presents frames to
///
/// The host owns the surface; the driver calls `draw` once per tick and
/// then `end_frame` exactly once so the host can present and recycle
/// its frame resources.
pub trait FrameSink {
    /// Submit the scene as seen from the camera
    fn draw(&mut self, scene: &Scene, camera: &CameraUniform);

    /// Signal that all draw calls for the frame were submitted
    fn end_frame(&mut self);
}

impl<T: FrameSink + ?Sized> FrameSink for &mut T {
    fn draw(&mut self, scene: &Scene, camera: &CameraUniform) {
        (**self).draw(scene, camera)
    }

    fn end_frame(&mut self) {
        (**self).end_frame()
    }
}

impl<T: FrameSink + ?Sized> FrameSink for Box<T> {
    fn draw(&mut self, scene: &Scene, camera: &CameraUniform) {
        (**self).draw(scene, camera)
    }

    fn end_frame(&mut self) {
        (**self).end_frame()
    }
}
