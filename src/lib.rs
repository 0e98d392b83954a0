//! Skyflap - a side-scrolling pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (kinematics, pipes, collectibles, collisions, phases)
//! - `renderer`: Draw-primitive canvas, scene drawing, software raster, terminal presenter
//! - `platform`: Terminal input translation and frame pacing
//! - `highscores`: Single-integer high score file
//! - `settings`: JSON configuration
//! - `scenery`: Decorative clouds and stars
//! - `app`: Session glue between the simulation and its collaborators

pub mod app;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod scenery;
pub mod settings;
pub mod sim;

pub use app::App;
pub use highscores::HighScoreFile;
pub use settings::{Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Logical canvas dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_RADIUS: f32 = 20.0;
    /// Velocity added every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set on flap (overrides, does not add)
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Ticks of pipe immunity after a respawn (0.75s at 60 Hz)
    pub const RESPAWN_GRACE_TICKS: u32 = 45;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 70.0;
    pub const PIPE_GAP_START: f32 = 200.0;
    pub const PIPE_GAP_MIN: f32 = 120.0;
    pub const PIPE_SPEED_START: f32 = 3.0;
    pub const PIPE_SPEED_MAX: f32 = 8.0;
    /// Per-pass difficulty steps
    pub const PIPE_GAP_STEP: f32 = 1.0;
    pub const PIPE_SPEED_STEP: f32 = 0.1;
    /// A new pipe spawns once the newest one is this far left of the right edge
    pub const PIPE_SPAWN_LOOKAHEAD: f32 = 200.0;
    /// Margin for the random base top height
    pub const PIPE_SPAWN_MARGIN: f32 = 50.0;
    /// Margin for the oscillating current top height
    pub const PIPE_CLAMP_MARGIN: f32 = 40.0;
    /// Cosmetic pipe colors to pick from
    pub const PIPE_TINT_COUNT: usize = 3;
    /// Chance that a new pipe oscillates
    pub const PIPE_OSCILLATION_CHANCE: f32 = 0.4;
    pub const PIPE_AMPLITUDE_RANGE: (f32, f32) = (10.0, 30.0);
    /// Angular speed in radians per elapsed millisecond
    pub const PIPE_ANGULAR_SPEED_RANGE: (f32, f32) = (0.01, 0.03);

    /// Lives
    pub const START_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 3;

    /// Collectibles
    pub const COLLECTIBLE_SPAWN_OFFSET: f32 = 20.0;
    pub const COIN_RADIUS: f32 = 10.0;
    pub const COIN_BONUS: u64 = 10;
    pub const COIN_SPAWN_THRESHOLD: f32 = SCREEN_WIDTH - 250.0;
    pub const COIN_SPAWN_CHANCE: f32 = 0.02;
    pub const HEART_RADIUS: f32 = 12.0;
    pub const HEART_SPAWN_THRESHOLD: f32 = SCREEN_WIDTH - 350.0;
    pub const HEART_SPAWN_CHANCE: f32 = 0.003;
}
