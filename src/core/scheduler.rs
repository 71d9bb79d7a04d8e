use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::traits::FrameSink;

use super::animation_loop::{AnimationLoop, CancellationToken, LoopState};

/// Time between frames at `fps`, rejecting rates a `Duration` cannot hold
pub fn frame_interval(fps: f32) -> Result<Duration> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(anyhow!("frame rate must be positive, got {}", fps));
    }
    Duration::try_from_secs_f32(1.0 / fps).with_context(|| format!("frame rate {} is too low", fps))
}

/// Animation loop driven by a dedicated thread at a fixed frame interval
///
/// Dropping the scheduler cancels the loop and joins the thread.
pub struct ThreadScheduler<S> {
    token: Option<CancellationToken>,
    handle: Option<JoinHandle<(AnimationLoop, S)>>,
}

impl<S: FrameSink + Send + 'static> ThreadScheduler<S> {
    pub fn spawn(animation: AnimationLoop, token: CancellationToken, sink: S, fps: f32) -> Result<Self> {
        Self::spawn_for(animation, token, sink, fps, None)
    }

    /// Like [`ThreadScheduler::spawn`], but the thread exits on its own
    /// after `limit` frames have been presented
    pub fn spawn_for(
        mut animation: AnimationLoop,
        token: CancellationToken,
        mut sink: S,
        fps: f32,
        limit: Option<u64>,
    ) -> Result<Self> {
        let interval = frame_interval(fps)?;

        let handle = thread::Builder::new()
            .name("backdrop-animation".into())
            .spawn(move || {
                let mut presented = 0;
                while limit.map_or(true, |limit| presented < limit)
                    && animation.step(&mut sink) == LoopState::Running
                {
                    presented += 1;
                    thread::sleep(interval);
                }
                (animation, sink)
            })?;

        Ok(Self {
            token: Some(token),
            handle: Some(handle),
        })
    }

    /// Cancel the loop and wait for the thread to hand back its state
    pub fn stop(mut self) -> Result<(AnimationLoop, S)> {
        self.shutdown()
            .ok_or_else(|| anyhow!("animation thread already joined"))?
            .map_err(|_| anyhow!("animation thread panicked"))
    }

    /// Wait for a frame-limited loop to finish without cancelling it
    pub fn join(mut self) -> Result<(AnimationLoop, S)> {
        self.handle
            .take()
            .ok_or_else(|| anyhow!("animation thread already joined"))?
            .join()
            .map_err(|_| anyhow!("animation thread panicked"))
    }
}

impl<S> ThreadScheduler<S> {
    /// Whether the animation thread is still running
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn shutdown(&mut self) -> Option<thread::Result<(AnimationLoop, S)>> {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        self.handle.take().map(JoinHandle::join)
    }
}

impl<S> Drop for ThreadScheduler<S> {
    fn drop(&mut self) {
        if let Some(Err(_)) = self.shutdown() {
            log::warn!("animation thread panicked before teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, CameraRig, Sway};
    use crate::core::clock::SceneClock;
    use crate::core::driver::SceneState;
    use crate::math::Color;
    use crate::renderer::RecordingSink;
    use crate::scene::Scene;
    use crate::types::CameraUniform;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn state() -> SceneState {
        let rig = CameraRig {
            x: Sway::fixed(0.0),
            y: Sway::fixed(0.0),
            z: Sway::fixed(5.0),
            target: None,
        };
        SceneState::new(Scene::new(Color::BLACK), Camera::new(rig, 60.0, 1.0), SceneClock::new(0.01))
    }

    /// Counts presented frames through a handle shared with the test
    struct CountingSink(Arc<AtomicU64>);

    impl FrameSink for CountingSink {
        fn draw(&mut self, _scene: &Scene, _camera: &CameraUniform) {}

        fn end_frame(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_thread_scheduler_stops_and_returns_state() {
        let (animation, token) = AnimationLoop::start(state());

        let scheduler = ThreadScheduler::spawn(animation, token, RecordingSink::new(), 500.0).unwrap();
        thread::sleep(Duration::from_millis(30));
        let (animation, sink) = scheduler.stop().unwrap();

        assert_eq!(animation.status(), LoopState::Stopped);
        assert_eq!(sink.draws, animation.state().clock.ticks());
        assert!(sink.events_balanced());
    }

    #[test]
    fn test_rejects_zero_fps() {
        let (animation, token) = AnimationLoop::start(state());
        assert!(ThreadScheduler::spawn(animation, token, RecordingSink::new(), 0.0).is_err());
    }

    #[test]
    fn test_rejects_fps_too_low_for_interval() {
        assert!(frame_interval(1e-30).is_err());
        assert!(frame_interval(f32::NAN).is_err());
        assert_eq!(frame_interval(50.0).unwrap(), Duration::from_millis(20));

        let (animation, token) = AnimationLoop::start(state());
        assert!(ThreadScheduler::spawn(animation, token, RecordingSink::new(), 1e-30).is_err());
    }

    #[test]
    fn test_frame_limit_presents_exact_count() {
        let (animation, token) = AnimationLoop::start(state());
        let scheduler = ThreadScheduler::spawn_for(animation, token, RecordingSink::new(), 1000.0, Some(25)).unwrap();
        let (animation, sink) = scheduler.join().unwrap();

        assert_eq!(sink.frames_ended, 25);
        assert_eq!(animation.state().clock.ticks(), 25);
        assert_eq!(animation.status(), LoopState::Running);
    }

    #[test]
    fn test_drop_cancels_and_joins_thread() {
        let frames = Arc::new(AtomicU64::new(0));
        let (animation, token) = AnimationLoop::start(state());
        let scheduler = ThreadScheduler::spawn(animation, token, CountingSink(frames.clone()), 500.0).unwrap();

        thread::sleep(Duration::from_millis(20));
        assert!(scheduler.is_running());
        drop(scheduler);

        let at_drop = frames.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(frames.load(Ordering::SeqCst), at_drop);
    }
}
