//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

use crate::consts::TICK_RATE;

/// Paces the loop at the simulation tick rate and reports elapsed time
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    frame: Duration,
    next: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Every per-tick constant assumes this rate, so it is not configurable
    pub fn new() -> Self {
        let start = Instant::now();
        let frame = Duration::from_secs(1) / TICK_RATE;
        Self {
            start,
            frame,
            next: start + frame,
        }
    }

    /// Block until the next frame boundary
    ///
    /// A loop that fell behind by more than a frame resynchronizes instead
    /// of sprinting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            self.next = now + self.frame;
        }
    }

    /// Milliseconds since the clock was created
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
