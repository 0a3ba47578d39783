//! Reel motor counters

use rand::Rng;

use crate::reels::REEL_COUNT;

/// Steps the first reel always runs before its random extra.
pub const MIN_STEPS: u32 = 15;
/// Random extra steps per reel, drawn from `0..STEP_SPREAD`.
pub const STEP_SPREAD: u32 = 10;

/// Remaining spin steps per reel.
///
/// Each reel's count is the previous reel's count plus a random extra, so
/// counts are non-decreasing left to right and reels lock in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReelMotors {
    steps: [u32; REEL_COUNT],
}

impl ReelMotors {
    /// Wind the motors for a new trial.
    pub fn rewind<R: Rng>(&mut self, rng: &mut R) {
        self.steps[0] = MIN_STEPS + rng.random_range(0..STEP_SPREAD);
        for reel in 1..REEL_COUNT {
            self.steps[reel] = self.steps[reel - 1] + rng.random_range(0..STEP_SPREAD);
        }
    }

    /// Current counts, left to right.
    pub fn steps(&self) -> [u32; REEL_COUNT] {
        self.steps
    }

    pub fn is_running(&self, reel: usize) -> bool {
        self.steps[reel] > 0
    }

    pub fn any_running(&self) -> bool {
        self.steps.iter().any(|&steps| steps > 0)
    }

    /// Consume one step on a reel.
    pub fn tick(&mut self, reel: usize) {
        self.steps[reel] = self.steps[reel].saturating_sub(1);
    }
}
