//! Pipe stream: spawning, scrolling, oscillation, passing and retirement

use std::f32::consts::TAU;

use super::difficulty::Difficulty;
use super::rng::RandomSource;
use super::state::{Oscillation, Pipe};
use crate::consts::*;

impl Pipe {
    /// Create a pipe at `x`, drawing its layout from `rng`
    ///
    /// Draw order: tint, base top, oscillation gate, then amplitude,
    /// angular speed and phase for oscillating pipes.
    pub fn spawn<R: RandomSource + ?Sized>(x: f32, gap: f32, rng: &mut R) -> Self {
        let tint = rng.uniform_int(0, PIPE_TINT_COUNT as i32 - 1) as u8;
        let base_top = rng.uniform(PIPE_SPAWN_MARGIN, SCREEN_HEIGHT - gap - PIPE_SPAWN_MARGIN);
        let oscillation = if rng.chance(PIPE_OSCILLATION_CHANCE) {
            Some(Oscillation {
                amplitude: rng.uniform(PIPE_AMPLITUDE_RANGE.0, PIPE_AMPLITUDE_RANGE.1),
                angular_speed: rng.uniform(PIPE_ANGULAR_SPEED_RANGE.0, PIPE_ANGULAR_SPEED_RANGE.1),
                phase: rng.uniform(0.0, TAU),
            })
        } else {
            None
        };

        Self {
            x,
            width: PIPE_WIDTH,
            base_top,
            top: base_top,
            oscillation,
            passed: false,
            tint,
        }
    }

    /// Scroll left and recompute the clamped gap top
    pub fn update(&mut self, difficulty: &Difficulty, elapsed_ms: u64) {
        self.x -= difficulty.speed;
        let offset = self.oscillation.map(|o| o.offset(elapsed_ms)).unwrap_or(0.0);
        self.top = difficulty.clamp_top(self.base_top + offset);
    }

    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Whether a new pipe is due this tick
pub fn should_spawn(pipes: &[Pipe]) -> bool {
    pipes
        .last()
        .map(|newest| newest.x < SCREEN_WIDTH - PIPE_SPAWN_LOOKAHEAD)
        .unwrap_or(true)
}

/// Spawn, scroll and retire pipes for one tick
pub fn advance<R: RandomSource + ?Sized>(
    pipes: &mut Vec<Pipe>,
    difficulty: &Difficulty,
    elapsed_ms: u64,
    rng: &mut R,
) {
    if should_spawn(pipes) {
        let pipe = Pipe::spawn(SCREEN_WIDTH, difficulty.gap, rng);
        log::debug!(
            "Spawned pipe: top={:.0} gap={:.0} moving={}",
            pipe.base_top,
            difficulty.gap,
            pipe.oscillation.is_some()
        );
        pipes.push(pipe);
    }

    for pipe in pipes.iter_mut() {
        pipe.update(difficulty, elapsed_ms);
    }

    // retain keeps creation order
    pipes.retain(|p| !p.is_off_screen());
}

/// Latch pipes whose trailing edge crossed `bird_x`, returning how many
pub fn mark_passed(pipes: &mut [Pipe], bird_x: f32) -> u32 {
    let mut passed = 0;
    for pipe in pipes.iter_mut().filter(|p| !p.passed) {
        if pipe.right() < bird_x {
            pipe.passed = true;
            passed += 1;
        }
    }
    passed
}
