use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::traits::FrameSink;

use super::driver::{tick, SceneState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Single-shot stop signal handed to the host at loop start
///
/// Cancelling consumes the token, so teardown can only be signalled once.
#[derive(Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn cancel(self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// Running/stopped wrapper around a scene's per-frame tick
///
/// Scheduling is left to the caller: a frame callback, a timer or a
/// dedicated thread calls [`AnimationLoop::step`] once per refresh.
pub struct AnimationLoop {
    state: SceneState,
    status: LoopState,
    cancelled: Arc<AtomicBool>,
}

impl AnimationLoop {
    pub fn start(state: SceneState) -> (Self, CancellationToken) {
        let cancelled = Arc::new(AtomicBool::new(false));
        let token = CancellationToken {
            cancelled: Arc::clone(&cancelled),
        };
        log::debug!("animation loop started with {} animated objects", state.animatables.len());
        (
            Self {
                state,
                status: LoopState::Running,
                cancelled,
            },
            token,
        )
    }

    /// Run one frame unless the loop has been cancelled
    ///
    /// A step after cancellation touches neither the scene nor the sink.
    pub fn step(&mut self, sink: &mut dyn FrameSink) -> LoopState {
        if self.status == LoopState::Running && self.cancelled.load(Ordering::Acquire) {
            self.status = LoopState::Stopped;
            log::debug!(
                "animation loop stopped after {} frames at t={:.3}",
                self.state.clock.ticks(),
                self.state.time()
            );
        }

        if self.status == LoopState::Running {
            tick(&mut self.state, sink);
        }
        self.status
    }

    /// Step up to `frames` times; returns how many frames actually ran
    pub fn run_for(&mut self, sink: &mut dyn FrameSink, frames: u64) -> u64 {
        let before = self.state.clock.ticks();
        for _ in 0..frames {
            if self.step(sink) == LoopState::Stopped {
                break;
            }
        }
        self.state.clock.ticks() - before
    }

    pub fn status(&self) -> LoopState {
        self.status
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn into_state(self) -> SceneState {
        self.state
    }
}
