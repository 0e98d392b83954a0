//! Coin and heart streams
//!
//! Both streams share one placement policy: an item is dropped inside the
//! gap of the nearest pipe still reaching the right screen edge, so it is
//! always reachable through the gap the bird is about to fly through.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Collectible, CollectibleKind, Pipe};
use crate::consts::*;

/// When a stream may add a new item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRule {
    /// The newest item must have scrolled left of this x
    pub threshold_x: f32,
    /// Per-tick gate while the stream is empty
    pub chance_when_empty: f32,
    /// Per-tick gate once the newest item cleared the threshold
    pub chance: f32,
}

impl CollectibleKind {
    pub fn radius(&self) -> f32 {
        match self {
            CollectibleKind::Coin => COIN_RADIUS,
            CollectibleKind::Heart => HEART_RADIUS,
        }
    }

    pub fn spawn_rule(&self) -> SpawnRule {
        match self {
            CollectibleKind::Coin => SpawnRule {
                threshold_x: COIN_SPAWN_THRESHOLD,
                chance_when_empty: 1.0,
                chance: COIN_SPAWN_CHANCE,
            },
            CollectibleKind::Heart => SpawnRule {
                threshold_x: HEART_SPAWN_THRESHOLD,
                chance_when_empty: HEART_SPAWN_CHANCE,
                chance: HEART_SPAWN_CHANCE,
            },
        }
    }
}

impl Collectible {
    /// New item just off the right edge, placed through the upcoming gap
    pub fn spawn<R: RandomSource + ?Sized>(
        kind: CollectibleKind,
        pipes: &[Pipe],
        gap: f32,
        rng: &mut R,
    ) -> Self {
        let radius = kind.radius();
        let y = place_in_gap(pipes, gap, radius, rng);
        Self {
            kind,
            pos: Vec2::new(SCREEN_WIDTH + COLLECTIBLE_SPAWN_OFFSET, y),
            radius,
            collected: false,
        }
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x < -self.radius * 2.0
    }
}

/// Pick a y inside the gap of the nearest pipe reaching the right edge
///
/// Falls back to the vertical screen centre when no such pipe exists or
/// the gap is too narrow for the item.
pub fn place_in_gap<R: RandomSource + ?Sized>(
    pipes: &[Pipe],
    gap: f32,
    radius: f32,
    rng: &mut R,
) -> f32 {
    let upcoming = pipes
        .iter()
        .filter(|p| p.right() >= SCREEN_WIDTH)
        .min_by(|a, b| a.x.total_cmp(&b.x));

    match upcoming {
        Some(pipe) => {
            let lo = pipe.top + radius;
            let hi = pipe.bottom(gap) - radius;
            if hi > lo {
                rng.uniform(lo, hi)
            } else {
                SCREEN_HEIGHT / 2.0
            }
        }
        None => SCREEN_HEIGHT / 2.0,
    }
}

/// Whether a stream should add an item this tick
pub fn should_spawn<R: RandomSource + ?Sized>(
    items: &[Collectible],
    rule: &SpawnRule,
    rng: &mut R,
) -> bool {
    match items.last() {
        None => rule.chance_when_empty >= 1.0 || rng.chance(rule.chance_when_empty),
        Some(newest) => newest.pos.x < rule.threshold_x && rng.chance(rule.chance),
    }
}

/// Spawn and scroll one stream
pub fn advance<R: RandomSource + ?Sized>(
    items: &mut Vec<Collectible>,
    kind: CollectibleKind,
    pipes: &[Pipe],
    gap: f32,
    speed: f32,
    rng: &mut R,
) {
    if should_spawn(items, &kind.spawn_rule(), rng) {
        let item = Collectible::spawn(kind, pipes, gap, rng);
        log::debug!("Spawned {:?} at y={:.0}", kind, item.pos.y);
        items.push(item);
    }
    for item in items.iter_mut() {
        item.pos.x -= speed;
    }
}

/// Drop collected and off-screen items, keeping order
pub fn retire(items: &mut Vec<Collectible>) {
    items.retain(|item| !item.collected && !item.is_off_screen());
}
