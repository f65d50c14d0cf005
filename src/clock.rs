//! Frame time to fixed ticks
//!
//! The host measures real frame time; the simulation only understands whole
//! ticks. `FixedStep` keeps the remainder between frames and caps how many
//! ticks one frame may run so a stall does not snowball.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Shortest tick the clock accepts (seconds)
pub const MIN_STEP: f32 = 1.0e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    /// `step` is clamped to at least [`MIN_STEP`] seconds
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step: step.max(MIN_STEP),
            max_substeps,
        }
    }

    /// Add a frame's worth of seconds; returns how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == self.max_substeps && self.accumulator >= self.step {
            self.accumulator %= self.step;
        }
        substeps
    }

    /// Fraction of a tick carried into the next frame (0.0 - 1.0)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
