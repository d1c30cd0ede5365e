//! Frame time to fixed steps
//!
//! Hosts call [`FixedStep::advance`] from their frame callback with the
//! elapsed wall time and run the returned number of steps.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, STEPS_PER_SECOND};

/// Longest frame delta honoured (seconds); longer gaps are dropped
const MAX_FRAME_DT: f32 = 0.1;

/// Fixed timestep accumulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedStep {
    step_dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(STEPS_PER_SECOND, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(steps_per_second: u32, max_substeps: u32) -> Self {
        Self {
            step_dt: 1.0 / steps_per_second.max(1) as f32,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add `frame_dt` seconds and return how many steps to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.step_dt && steps < self.max_substeps {
            self.accumulator -= self.step_dt;
            steps += 1;
        }
        // Hit the substep cap: drop the backlog instead of spiralling
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step_dt);
        }
        steps
    }
}
