//! Fixed-timestep scheduling
//!
//! Frame time from any driver (fixed-rate timer or display-refresh
//! callback) is folded into an accumulator and paid out in fixed
//! simulation steps, with a substep cap so a long stall cannot
//! snowball. The driver owns the clock; the simulation only ever sees
//! the explicit `dt` it is handed.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame the accumulator will absorb (a stalled tab can report
/// seconds of "elapsed" time; replaying it all is never useful)
const MAX_FRAME_SECS: f32 = 0.1;

/// Accumulator-based fixed-timestep driver
#[derive(Debug)]
pub struct FixedTimestep {
    accumulator: f32,
    dt: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            accumulator: 0.0,
            dt,
        }
    }

    /// Fold one frame's elapsed seconds in and return how many fixed
    /// steps to run now (at most `MAX_SUBSTEPS`).
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_SECS);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    /// The fixed step handed to each simulation tick
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_frames_accumulate() {
        let mut stepper = FixedTimestep::new(SIM_DT);
        // Half a step: nothing to run yet
        assert_eq!(stepper.advance(SIM_DT / 2.0), 0);
        // The second half completes one step
        assert_eq!(stepper.advance(SIM_DT / 2.0), 1);
    }

    #[test]
    fn test_long_frame_pays_out_multiple_steps() {
        // Power-of-two step keeps the accumulator arithmetic exact
        let dt = 1.0 / 64.0;
        let mut stepper = FixedTimestep::new(dt);
        assert_eq!(stepper.advance(dt * 3.5), 3);
        // The remainder carries into the next frame
        assert_eq!(stepper.advance(dt * 0.5), 1);
    }

    #[test]
    fn test_stall_capped_at_max_substeps() {
        let mut stepper = FixedTimestep::new(SIM_DT);
        assert!(stepper.advance(10.0) <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_negative_frame_is_ignored() {
        let mut stepper = FixedTimestep::new(SIM_DT);
        assert_eq!(stepper.advance(-1.0), 0);
        assert_eq!(stepper.advance(SIM_DT), 1);
    }
}
