//! Progressive difficulty
//!
//! Every pipe pass narrows the gap and speeds up the scroll, within fixed
//! bounds. Both values are monotonic for the life of a run.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Vertical gap between top and bottom pipe
    pub gap: f32,
    /// Horizontal scroll speed (pixels per tick)
    pub speed: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            gap: PIPE_GAP_START,
            speed: PIPE_SPEED_START,
        }
    }
}

impl Difficulty {
    /// Apply one pass event
    pub fn on_pass(&mut self) {
        self.gap = (self.gap - PIPE_GAP_STEP).max(PIPE_GAP_MIN);
        self.speed = (self.speed + PIPE_SPEED_STEP).min(PIPE_SPEED_MAX);
    }

    /// Lowest allowed gap top for the current gap
    pub fn min_top(&self) -> f32 {
        PIPE_CLAMP_MARGIN
    }

    /// Highest allowed gap top for the current gap
    pub fn max_top(&self) -> f32 {
        SCREEN_HEIGHT - self.gap - PIPE_CLAMP_MARGIN
    }

    /// Clamp a gap top into `[min_top, max_top]`
    ///
    /// The lower bound wins if the range is ever inverted.
    pub fn clamp_top(&self, top: f32) -> f32 {
        top.min(self.max_top()).max(self.min_top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gap_reaches_floor() {
        let mut difficulty = Difficulty::default();
        for _ in 0..81 {
            difficulty.on_pass();
        }
        assert_eq!(difficulty.gap, PIPE_GAP_MIN);
    }

    #[test]
    fn test_speed_capped() {
        let mut difficulty = Difficulty::default();
        for _ in 0..200 {
            difficulty.on_pass();
        }
        assert_eq!(difficulty.speed, PIPE_SPEED_MAX);
    }

    #[test]
    fn test_single_pass_step() {
        let mut difficulty = Difficulty::default();
        difficulty.on_pass();
        assert_eq!(difficulty.gap, PIPE_GAP_START - 1.0);
        assert!((difficulty.speed - (PIPE_SPEED_START + 0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_top_bounds() {
        let difficulty = Difficulty::default();
        assert_eq!(difficulty.clamp_top(10.0), PIPE_CLAMP_MARGIN);
        assert_eq!(difficulty.clamp_top(500.0), SCREEN_HEIGHT - 200.0 - PIPE_CLAMP_MARGIN);
        assert_eq!(difficulty.clamp_top(200.0), 200.0);
    }

    #[test]
    fn test_clamp_top_follows_narrowing_gap() {
        let mut difficulty = Difficulty::default();
        for _ in 0..80 {
            difficulty.on_pass();
        }
        // Gap at its floor of 120 leaves room down to 440
        assert_eq!(difficulty.max_top(), 440.0);
        assert_eq!(difficulty.clamp_top(600.0), 440.0);
        assert_eq!(difficulty.clamp_top(0.0), difficulty.min_top());
    }

    proptest! {
        #[test]
        fn prop_monotonic_and_bounded(passes in 0usize..300) {
            let mut difficulty = Difficulty::default();
            let mut prev = difficulty;
            for _ in 0..passes {
                difficulty.on_pass();
                prop_assert!(difficulty.gap <= prev.gap);
                prop_assert!(difficulty.speed >= prev.speed);
                prev = difficulty;
            }
            prop_assert!(difficulty.gap >= PIPE_GAP_MIN);
            prop_assert!(difficulty.speed <= PIPE_SPEED_MAX);
            prop_assert!(difficulty.max_top() >= difficulty.min_top());
        }
    }
}
