//! Resumable snapshot of a round in progress

use super::board::{Board, MAX_ROWS};
use super::keyboard::KeyboardState;
use crate::config::RoundSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle of a round; never moves back to `Playing` without a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error("Saved game is corrupt: {0}")]
    Corrupt(String),
}

/// Everything needed to rebuild a round after a restart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGameState {
    pub board: Board,
    pub keyboard: KeyboardState,
    pub current_row: usize,
    pub current_guess: String,
    pub status: GameStatus,
    pub solution: String,
    pub settings: RoundSettings,
}

impl SavedGameState {
    /// # Errors
    /// Returns `PersistError::Corrupt` if the snapshot cannot be serialized.
    pub fn encode(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(|err| PersistError::Corrupt(err.to_string()))
    }

    /// Parse and sanity-check a stored snapshot
    ///
    /// # Errors
    /// Returns `PersistError::Corrupt` when the text is not a snapshot or the
    /// snapshot contradicts itself (row cursor, board shape, solution length).
    pub fn decode(raw: &str) -> Result<Self, PersistError> {
        let state: Self =
            serde_json::from_str(raw).map_err(|err| PersistError::Corrupt(err.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    pub(crate) fn validate(&self) -> Result<(), PersistError> {
        let length = self.settings.letter_length;
        let corrupt = |reason: &str| Err(PersistError::Corrupt(reason.to_string()));

        if self.current_row >= MAX_ROWS {
            return corrupt("row cursor out of range");
        }
        if self.solution.chars().count() != length {
            return corrupt("solution length does not match settings");
        }
        if self.current_guess.chars().count() > length {
            return corrupt("working guess is longer than the word");
        }
        if !self.board.is_consistent(self.current_row, length) {
            return corrupt("board does not match row cursor");
        }
        if self.status == GameStatus::Playing && !self.board.is_unscored(self.current_row) {
            return corrupt("current row is already scored");
        }
        Ok(())
    }
}
