//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (one call to `tick` per frame)
//! - All randomness through an injected `RandomSource`
//! - Entity collections kept in creation order
//! - No rendering or platform dependencies

pub mod collectibles;
pub mod collision;
pub mod difficulty;
pub mod pipes;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{CollisionKind, check_bird, circle_hits_pipe, circle_out_of_bounds, circles_overlap};
pub use difficulty::Difficulty;
pub use rng::{PcgSource, RandomSource};
pub use state::{
    Bird, Collectible, CollectibleKind, GameEvent, GamePhase, GameState, Oscillation, Pipe, Rect,
    START_BUTTON,
};
pub use tick::{InputEvent, TickInput, tick};
