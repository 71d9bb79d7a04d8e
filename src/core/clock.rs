/// Fixed-step scene clock - advances by the same step every tick
/// No wall-clock coupling, so animation is reproducible frame for frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneClock {
    time: f32,
    step: f32,
    ticks: u64,
}

impl SceneClock {
    /// Create clock at time zero with given step
    ///
    /// # Panics
    ///
    /// If `step` is not a finite positive number; such a clock would never advance.
    pub fn new(step: f32) -> Self {
        assert!(step.is_finite() && step > 0.0, "clock step must be positive, got {}", step);
        Self {
            time: 0.0,
            step,
            ticks: 0,
        }
    }

    /// Advance by one step, returns the new time
    ///
    /// Time is derived from the tick count rather than summed, so it
    /// does not accumulate rounding drift over long runs.
    pub fn advance(&mut self) -> f32 {
        self.ticks += 1;
        self.time = (self.ticks as f64 * self.step as f64) as f32;
        self.time
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
