/// Variable-timestep frame clock.
///
/// The simulation integrates with the raw elapsed time of each frame. The clock
/// only guards the driver boundary: negative or non-finite deltas become zero,
/// and an optional ceiling bounds long stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Upper bound on a single frame delta. `None` passes stalls through unchanged.
    max_dt: Option<f32>,
    /// Total simulated seconds.
    elapsed: f32,
    /// Frames advanced so far.
    frames: u64,
}

impl FrameClock {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self {
            max_dt,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Sanitize a raw frame delta and record it. Returns the delta to simulate with.
    pub fn advance(&mut self, raw_dt: f32) -> f32 {
        let mut dt = if raw_dt.is_finite() && raw_dt > 0.0 { raw_dt } else { 0.0 };
        if let Some(max) = self.max_dt {
            dt = dt.min(max);
        }
        self.elapsed += dt;
        self.frames += 1;
        dt
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(None)
    }
}
