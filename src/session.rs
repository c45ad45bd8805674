//! Round orchestration: engine, countdown, statistics and persistence
//!
//! A `Session` is what the front-ends talk to. It forwards input to the
//! engine, drives the engine and the countdown from one virtual clock, and
//! writes the snapshot, statistics and preferences through a [`Store`].

use crate::config::{Preferences, Theme};
use crate::countdown::CountdownTimer;
use crate::core::{LetterStatus, Pattern};
use crate::engine::{EngineEvent, GameStatus, GuessEngine, MAX_ROWS, RejectReason, SavedGameState};
use crate::stats::{Outcome, Statistics};
use crate::storage::{StorageError, Store, keys, load_json, save_json};
use std::time::Duration;

/// Something the front-end should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Revealed {
        row: usize,
        column: usize,
        status: LetterStatus,
    },
    RowSettled {
        row: usize,
        pattern: Pattern,
    },
    ShakeCleared {
        row: usize,
    },
    Won {
        guesses: usize,
    },
    /// Six rows used without a match
    Lost,
    /// The countdown ran out while playing
    TimedOut,
}

pub struct Session<'a, S: Store> {
    engine: GuessEngine<'a>,
    timer: CountdownTimer,
    preferences: Preferences,
    stats: Statistics,
    store: S,
    timer_enabled: bool,
    time_limit: u32,
    /// Wall time spent in the current round while it was playing
    round_time: Duration,
    recorded: bool,
}

impl<'a, S: Store> Session<'a, S> {
    /// Wrap an engine; statistics are read from the store
    ///
    /// The timer follows the engine's round settings.
    pub fn new(engine: GuessEngine<'a>, preferences: Preferences, store: S) -> Self {
        let settings = *engine.settings();
        let stats = Statistics::load(&store);
        Self {
            engine,
            timer: CountdownTimer::new(settings.timer_duration),
            preferences,
            stats,
            store,
            timer_enabled: settings.timer_enabled,
            time_limit: settings.timer_duration,
            round_time: Duration::ZERO,
            recorded: false,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &GuessEngine<'a> {
        &self.engine
    }

    #[must_use]
    pub const fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// Start the countdown if timed play is on
    pub fn start(&mut self) {
        if self.timer_enabled && !self.engine.status().is_terminal() && !self.engine.is_animating()
        {
            self.timer.start();
        }
    }

    pub fn type_letter(&mut self, letter: char) -> bool {
        self.engine.type_letter(letter)
    }

    pub fn backspace(&mut self) -> bool {
        self.engine.backspace()
    }

    /// Submit the working guess; the countdown holds while the row reveals
    ///
    /// # Errors
    /// Returns the engine's `RejectReason`; nothing changes on rejection.
    pub fn submit(&mut self) -> Result<(), RejectReason> {
        self.engine.submit_current()?;
        self.timer.pause();
        Ok(())
    }

    /// Submit a whole word at once, as the line front-end does
    ///
    /// # Errors
    /// Returns the engine's `RejectReason`; nothing changes on rejection.
    pub fn submit_word(&mut self, word: &str) -> Result<(), RejectReason> {
        self.engine.submit_guess(word)?;
        self.timer.pause();
        Ok(())
    }

    /// Time until something is due (a reveal step or a countdown tick)
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        match (self.engine.next_due(), self.timer.next_tick()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Move both clocks forward by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !self.engine.status().is_terminal() {
            self.round_time += elapsed;
        }

        if self.timer.advance(elapsed) && self.engine.force_timeout() {
            self.finish(Outcome::Lost, self.engine.current_row() + 1);
            events.push(SessionEvent::TimedOut);
        }

        for event in self.engine.advance(elapsed) {
            match event {
                EngineEvent::CellRevealed {
                    row,
                    column,
                    status,
                } => events.push(SessionEvent::Revealed {
                    row,
                    column,
                    status,
                }),
                EngineEvent::RowSettled { row, pattern } => {
                    if self.engine.status() == GameStatus::Playing {
                        self.timer.reset_for_new_guess(self.time_limit);
                        self.start();
                        self.persist_snapshot();
                    }
                    events.push(SessionEvent::RowSettled { row, pattern });
                }
                EngineEvent::Won { guesses } => {
                    self.timer.stop_on_win();
                    self.finish(Outcome::Won, guesses);
                    events.push(SessionEvent::Won { guesses });
                }
                EngineEvent::Lost => {
                    self.timer.pause();
                    self.finish(Outcome::Lost, MAX_ROWS);
                    events.push(SessionEvent::Lost);
                }
                EngineEvent::ShakeCleared { row } => {
                    events.push(SessionEvent::ShakeCleared { row });
                }
            }
        }
        events
    }

    /// Seconds to charge for the round just finished
    fn seconds_used(&self) -> u64 {
        if self.timer_enabled {
            u64::from(self.timer.used())
        } else {
            self.round_time.as_secs()
        }
    }

    fn finish(&mut self, outcome: Outcome, guesses: usize) {
        if self.recorded {
            return;
        }
        self.recorded = true;

        self.stats.record(outcome, self.seconds_used(), guesses);
        if let Err(err) = self.stats.save(&mut self.store) {
            tracing::warn!(%err, "could not save statistics");
        }
        if let Err(err) = self.clear_saved_game() {
            tracing::warn!(%err, "could not clear saved game");
        }
    }

    fn persist_snapshot(&mut self) {
        let mut state = self.engine.save_state();
        state.settings.timer_enabled = self.timer_enabled;
        state.settings.timer_duration = self.time_limit;

        let result = save_json(&mut self.store, keys::GAME_STATE, &state)
            .and_then(|()| save_json(&mut self.store, keys::GAME_IN_PROGRESS, &true));
        if let Err(err) = result {
            tracing::warn!(%err, "could not save game");
        }
    }

    /// Whether a resumable game is stored
    #[must_use]
    pub fn has_saved_game(&self) -> bool {
        load_json::<bool>(&self.store, keys::GAME_IN_PROGRESS).unwrap_or(false)
            && self.store.get(keys::GAME_STATE).is_some()
    }

    /// # Errors
    /// Returns `StorageError` if the store cannot be updated.
    pub fn clear_saved_game(&mut self) -> Result<(), StorageError> {
        self.store.remove(keys::GAME_STATE)?;
        save_json(&mut self.store, keys::GAME_IN_PROGRESS, &false)
    }

    /// Continue the stored game, if there is a usable one
    ///
    /// A corrupt or incompatible snapshot is logged and left alone.
    pub fn resume(&mut self) -> bool {
        let Some(raw) = self.store.get(keys::GAME_STATE) else {
            return false;
        };

        let state = match SavedGameState::decode(&raw) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(%err, "ignoring saved game");
                return false;
            }
        };

        if !self.engine.restore(state) {
            return false;
        }

        self.timer.reset_for_new_round(self.time_limit);
        self.round_time = Duration::ZERO;
        self.recorded = false;
        self.start();
        tracing::info!(row = self.engine.current_row(), "resumed saved game");
        true
    }

    /// Abandon the current round and start another with a fresh word
    ///
    /// # Errors
    /// Returns `StorageError` if the saved game cannot be cleared.
    pub fn new_round(&mut self) -> Result<(), StorageError> {
        self.engine.reset_round(true);
        self.timer.reset_for_new_round(self.time_limit);
        self.round_time = Duration::ZERO;
        self.recorded = false;
        self.clear_saved_game()?;
        self.start();
        Ok(())
    }

    /// # Errors
    /// Returns `StorageError` if the preference cannot be saved.
    pub fn set_timer_enabled(&mut self, enabled: bool) -> Result<(), StorageError> {
        self.timer_enabled = enabled;
        self.preferences.chrono_enabled = enabled;
        if enabled {
            self.start();
        } else {
            self.timer.pause();
        }
        self.preferences.save(&mut self.store)
    }

    /// Change the per-guess limit; the countdown restarts from the new value
    ///
    /// # Errors
    /// Returns `StorageError` if the preference cannot be saved.
    pub fn set_time_limit(&mut self, limit: u32) -> Result<(), StorageError> {
        self.time_limit = limit;
        self.preferences.time_limit = limit;
        if !self.engine.status().is_terminal() {
            self.timer.reset_for_new_round(limit);
            self.start();
        }
        self.preferences.save(&mut self.store)
    }

    /// # Errors
    /// Returns `StorageError` if the preference cannot be saved.
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        self.preferences.theme = self.preferences.theme.toggled();
        self.preferences.save(&mut self.store)?;
        Ok(self.preferences.theme)
    }

    /// # Errors
    /// Returns `StorageError` if the cleared statistics cannot be saved.
    pub fn clear_statistics(&mut self) -> Result<(), StorageError> {
        self.stats.clear();
        self.stats.save(&mut self.store)
    }
}
