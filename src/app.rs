//! Session glue
//!
//! [`App`] owns the game state, the scenery and the random stream, feeds
//! each frame's input to the simulation, and persists a beaten high score
//! when a run ends.

use std::ops::ControlFlow;

use crate::highscores::HighScoreFile;
use crate::renderer::{Canvas, draw_frame};
use crate::scenery::Scenery;
use crate::settings::{Settings, Theme};
use crate::sim::{GameEvent, GameState, InputEvent, PcgSource, TickInput, tick};

/// One running game session
pub struct App {
    state: GameState,
    scenery: Scenery,
    rng: PcgSource,
    high_scores: HighScoreFile,
}

impl App {
    /// Load the high score and build a session sitting on the menu
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let high_scores = HighScoreFile::new(settings.high_score_path.clone());
        let mut state = GameState::new(high_scores.load());
        state.night = settings.theme.is_night();

        let mut rng = PcgSource::new(seed);
        let scenery = Scenery::new(&mut rng, settings.cloud_count, settings.star_count);

        Self {
            state,
            scenery,
            rng,
            high_scores,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Advance one frame. Breaks when the player asked to quit.
    pub fn step(&mut self, events: Vec<InputEvent>, elapsed_ms: u64) -> ControlFlow<()> {
        if events.contains(&InputEvent::Quit) {
            log::info!("Quit requested");
            return ControlFlow::Break(());
        }

        let input = TickInput { events, elapsed_ms };
        for event in tick(&mut self.state, &input, &mut self.rng) {
            self.handle_event(event);
        }
        self.scenery.update(self.state.night, &mut self.rng);

        ControlFlow::Continue(())
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameOver {
                score,
                new_high_score: true,
            } => {
                if let Err(e) = self.high_scores.save(score) {
                    log::warn!(
                        "Failed to save high score {} to {}: {}",
                        score,
                        self.high_scores.path().display(),
                        e
                    );
                }
            }
            GameEvent::ThemeToggled { night } => {
                log::debug!("Theme: {}", Theme::from_night(night).as_str());
            }
            _ => {}
        }
    }

    /// Draw the current frame
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        draw_frame(&self.state, &self.scenery, canvas);
    }
}
