//! Session lifecycle around the tick
//!
//! [`Session`] is the only thing a host talks to: it starts and resets runs,
//! advances time, and hands out snapshots and events.

use super::snapshot::RenderSnapshot;
use super::state::{Character, GameEvent, GameState, Playfield};
use super::tick::{TickInput, tick};
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Create an idle session. Invalid tuning is replaced by the defaults.
    pub fn new(tuning: Tuning, settings: Settings, playfield: Playfield, seed: u64) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning ({}), using defaults", e);
                Tuning::default()
            }
        };
        Self {
            state: GameState::new(tuning, settings, playfield, seed),
        }
    }

    /// Reset the run and start playing as `character`
    pub fn start_session(&mut self, character: Character) {
        self.state.begin_run(character);
        log::info!("Session started as {}", character.as_str());
    }

    /// Advance by `dt` seconds and return the frame to draw.
    ///
    /// Events from the previous call are discarded. Non-finite or negative
    /// steps are treated as zero.
    pub fn advance(&mut self, dt: f32, input: &TickInput) -> RenderSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.state.events.clear();
        tick(&mut self.state, input, dt);
        RenderSnapshot::capture(&self.state)
    }

    /// Return to the idle pre-start state; the high score survives
    pub fn reset(&mut self) {
        self.state.reset_run();
        log::info!("Session reset");
    }

    /// Take the events produced by the latest `advance`
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn resize(&mut self, playfield: Playfield) {
        self.state.resize(playfield);
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.state.settings = settings;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.state.high_scores
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for tools and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
