//! Platform layer
//!
//! Terminal specifics kept out of the simulation:
//! - Input events (keyboard and mouse via crossterm)
//! - Frame pacing and elapsed time

pub mod input;
pub mod time;

pub use input::{drain_events, translate};
pub use time::FrameClock;
