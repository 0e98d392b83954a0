//! Fixed timestep simulation tick
//!
//! Dispatches input to the active phase, then advances a Playing run in a
//! fixed order: kinematics, pipes, collectibles, pickups, collision, passes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collectibles;
use super::collision::{self, CollisionKind};
use super::pipes;
use super::rng::RandomSource;
use super::state::{CollectibleKind, GameEvent, GamePhase, GameState, START_BUTTON};
use crate::consts::*;

/// Discrete input events, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window close / quit key (handled by the session owner)
    Quit,
    /// Space: flap while playing, confirm on menus
    Flap,
    /// Day/night theme toggle
    ToggleTheme,
    /// Pointer press in logical screen coordinates
    PointerDown { x: f32, y: f32 },
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events drained this tick
    pub events: Vec<InputEvent>,
    /// Monotonic milliseconds since startup (drives pipe oscillation)
    pub elapsed_ms: u64,
}

/// Advance the game state by one fixed timestep
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut flap = false;

    for event in &input.events {
        match (*event, state.phase) {
            (InputEvent::ToggleTheme, _) => {
                state.night = !state.night;
                events.push(GameEvent::ThemeToggled { night: state.night });
            }
            (InputEvent::Quit, _) => {}
            (InputEvent::Flap, GamePhase::Menu) => start_run(state, &mut events),
            (InputEvent::PointerDown { x, y }, GamePhase::Menu) => {
                if START_BUTTON.contains(Vec2::new(x, y)) {
                    start_run(state, &mut events);
                }
            }
            (InputEvent::Flap, GamePhase::Playing) => flap = true,
            (InputEvent::Flap, GamePhase::GameOver) => {
                state.phase = GamePhase::Menu;
                events.push(GameEvent::ReturnedToMenu);
            }
            (InputEvent::PointerDown { .. }, _) => {}
        }
    }

    if state.phase == GamePhase::Playing {
        step_run(state, flap, input.elapsed_ms, rng, &mut events);
    }

    events
}

fn start_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.start_run();
    log::info!("Run started (high score {})", state.high_score);
    events.push(GameEvent::RunStarted);
}

/// One Playing tick
fn step_run<R: RandomSource + ?Sized>(
    state: &mut GameState,
    flap: bool,
    elapsed_ms: u64,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    state.time_ticks += 1;

    // Kinematics
    let bird = &mut state.bird;
    bird.grace_ticks = bird.grace_ticks.saturating_sub(1);
    bird.apply_gravity();
    if flap {
        bird.apply_jump();
    }
    bird.integrate();

    // Obstacles
    pipes::advance(&mut state.pipes, &state.difficulty, elapsed_ms, rng);

    // Collectibles
    let gap = state.difficulty.gap;
    let speed = state.difficulty.speed;
    collectibles::advance(&mut state.coins, CollectibleKind::Coin, &state.pipes, gap, speed, rng);
    collectibles::advance(&mut state.hearts, CollectibleKind::Heart, &state.pipes, gap, speed, rng);
    collect_pickups(state, events);
    collectibles::retire(&mut state.coins);
    collectibles::retire(&mut state.hearts);

    // Collisions
    if let Some(hit) = collision::check_bird(&state.bird, &state.pipes, gap) {
        lose_life(state, hit, events);
        if state.phase != GamePhase::Playing {
            return;
        }
    }

    // Passing and difficulty
    let passed = pipes::mark_passed(&mut state.pipes, state.bird.x);
    for _ in 0..passed {
        state.score += 1;
        state.difficulty.on_pass();
        events.push(GameEvent::PipePassed { score: state.score });
    }
}

fn collect_pickups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for coin in state.coins.iter_mut() {
        if collision::bird_touches(&state.bird, coin) {
            coin.collected = true;
            state.score += COIN_BONUS;
            log::debug!("Coin collected, score {}", state.score);
            events.push(GameEvent::CoinCollected { score: state.score });
        }
    }

    for heart in state.hearts.iter_mut() {
        if collision::bird_touches(&state.bird, heart) {
            heart.collected = true;
            if state.lives < MAX_LIVES {
                state.lives += 1;
            }
            log::debug!("Heart collected, lives {}", state.lives);
            events.push(GameEvent::HeartCollected { lives: state.lives });
        }
    }
}

fn lose_life(state: &mut GameState, hit: CollisionKind, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    log::debug!("Collision with {:?}, {} lives left", hit, state.lives);

    if state.lives > 0 {
        state.bird.respawn();
        events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
        return;
    }

    state.phase = GamePhase::GameOver;
    state.new_record = state.score > state.high_score;
    if state.new_record {
        state.high_score = state.score;
    }
    log::info!(
        "Game over: score {} (high score {}{})",
        state.score,
        state.high_score,
        if state.new_record { ", new record" } else { "" }
    );
    events.push(GameEvent::GameOver {
        score: state.score,
        new_high_score: state.new_record,
    });
}
