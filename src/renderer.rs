use crate::scene::Scene;
use crate::traits::FrameSink;
use crate::types::{CameraUniform, InstanceData};

/// Sink that records what it was asked to present
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub draws: u64,
    pub frames_ended: u64,
    pub last_camera: Option<CameraUniform>,
    pub last_object_count: usize,
    /// Draws not closed by `end_frame`, or frames ended without a draw
    out_of_order: u64,
    drawing: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every draw was followed by exactly one `end_frame`
    pub fn events_balanced(&self) -> bool {
        self.out_of_order == 0 && !self.drawing && self.draws == self.frames_ended
    }
}

impl FrameSink for RecordingSink {
    fn draw(&mut self, scene: &Scene, camera: &CameraUniform) {
        if self.drawing {
            self.out_of_order += 1;
        }
        self.drawing = true;
        self.draws += 1;
        self.last_camera = Some(*camera);
        self.last_object_count = scene.len();
    }

    fn end_frame(&mut self) {
        if !self.drawing {
            self.out_of_order += 1;
        }
        self.drawing = false;
        self.frames_ended += 1;
    }
}

/// Headless sink: flattens the scene like a GPU upload would and logs
/// frame statistics every `interval` frames
pub struct LogSink {
    interval: u64,
    frames: u64,
    instances: Vec<InstanceData>,
    uploaded_bytes: usize,
}

impl LogSink {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            instances: Vec::new(),
            uploaded_bytes: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn uploaded_bytes(&self) -> usize {
        self.uploaded_bytes
    }
}

impl FrameSink for LogSink {
    fn draw(&mut self, scene: &Scene, camera: &CameraUniform) {
        self.instances = scene.instances();
        let instance_bytes: &[u8] = bytemuck::cast_slice(&self.instances);
        let camera_bytes = bytemuck::bytes_of(camera);
        self.uploaded_bytes = instance_bytes.len() + camera_bytes.len();

        if self.frames % self.interval == 0 {
            log::info!(
                "frame {} t={:.2}s camera=({:.2}, {:.2}, {:.2}) objects={} meshes={} upload={}B",
                self.frames,
                camera.time,
                camera.position[0],
                camera.position[1],
                camera.position[2],
                scene.len(),
                self.instances.len(),
                self.uploaded_bytes,
            );
        }
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        log::trace!("frame {} presented", self.frames);
    }
}
