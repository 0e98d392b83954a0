//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`], which is passed
//! explicitly to each component every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with the start button
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting for restart input
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    PipePassed { score: u64 },
    CoinCollected { score: u64 },
    HeartCollected { lives: u8 },
    LifeLost { lives_left: u8 },
    GameOver { score: u64, new_high_score: bool },
    ThemeToggled { night: bool },
    ReturnedToMenu,
}

/// Axis-aligned rectangle in logical screen units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Menu start button, also used for pointer hit-testing
pub const START_BUTTON: Rect = Rect::new(
    SCREEN_WIDTH / 2.0 - 100.0,
    SCREEN_HEIGHT / 2.0,
    200.0,
    50.0,
);

/// The player-controlled bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub vel: f32,
    pub radius: f32,
    /// Ticks left during which pipe contact is ignored
    #[serde(default)]
    pub grace_ticks: u32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            x: BIRD_X,
            y: SCREEN_HEIGHT / 2.0,
            vel: 0.0,
            radius: BIRD_RADIUS,
            grace_ticks: 0,
        }
    }
}

impl Bird {
    /// Constant downward acceleration, once per tick
    pub fn apply_gravity(&mut self) {
        self.vel += GRAVITY;
    }

    /// Flap: overrides the current velocity
    pub fn apply_jump(&mut self) {
        self.vel = JUMP_IMPULSE;
    }

    pub fn integrate(&mut self) {
        self.y += self.vel;
    }

    /// Soft respawn in place after losing a life
    pub fn respawn(&mut self) {
        self.y = SCREEN_HEIGHT / 2.0;
        self.vel = 0.0;
        self.grace_ticks = RESPAWN_GRACE_TICKS;
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.grace_ticks > 0
    }
}

/// Vertical oscillation of a moving pipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    pub amplitude: f32,
    /// Radians per elapsed millisecond
    pub angular_speed: f32,
    pub phase: f32,
}

impl Oscillation {
    /// Vertical offset at `elapsed_ms`
    ///
    /// Evaluated in f64: milliseconds stop being exact in f32 after ~4.6 hours.
    pub fn offset(&self, elapsed_ms: u64) -> f32 {
        let angle = elapsed_ms as f64 * f64::from(self.angular_speed) + f64::from(self.phase);
        (f64::from(self.amplitude) * angle.sin()) as f32
    }
}

/// A pipe pair with a vertical gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub x: f32,
    pub width: f32,
    /// Gap top chosen at spawn
    pub base_top: f32,
    /// Gap top this tick (after oscillation and clamping)
    pub top: f32,
    pub oscillation: Option<Oscillation>,
    /// Set once when the bird clears the pipe
    pub passed: bool,
    /// Cosmetic colour index
    pub tint: u8,
}

impl Pipe {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Gap bottom for the given gap size
    pub fn bottom(&self, gap: f32) -> f32 {
        self.top + gap
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// Score bonus
    Coin,
    /// Extra life
    Heart,
}

/// A coin or heart travelling with the pipes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub pos: Vec2,
    pub radius: f32,
    /// One-way latch
    pub collected: bool,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub bird: Bird,
    /// Pipes in creation order (newest last)
    pub pipes: Vec<Pipe>,
    pub coins: Vec<Collectible>,
    pub hearts: Vec<Collectible>,
    pub difficulty: Difficulty,
    pub score: u64,
    pub lives: u8,
    /// Best score seen, loaded from disk at startup
    pub high_score: u64,
    /// Whether the last run ended with a new record
    pub new_record: bool,
    /// Cosmetic day/night theme
    pub night: bool,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh session sitting on the menu
    pub fn new(high_score: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            bird: Bird::default(),
            pipes: Vec::new(),
            coins: Vec::new(),
            hearts: Vec::new(),
            difficulty: Difficulty::default(),
            score: 0,
            lives: START_LIVES,
            high_score,
            new_record: false,
            night: false,
            time_ticks: 0,
        }
    }

    /// Reset everything a run owns and enter Playing
    pub fn start_run(&mut self) {
        self.bird = Bird::default();
        self.pipes.clear();
        self.coins.clear();
        self.hearts.clear();
        self.difficulty = Difficulty::default();
        self.score = 0;
        self.lives = START_LIVES;
        self.new_record = false;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }
}
