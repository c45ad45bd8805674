//! Best-known status per letter across all settled rows

use crate::core::{LetterStatus, Pattern};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyboardState {
    keys: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    /// Merge one settled row
    ///
    /// A letter only ever moves up the `Absent < Present < Correct` order.
    pub fn merge(&mut self, letters: &[char], pattern: &Pattern) {
        for (&letter, &status) in letters.iter().zip(pattern.statuses()) {
            let entry = self.keys.entry(letter).or_insert(LetterStatus::Unset);
            if status > *entry {
                *entry = status;
            }
        }
    }

    /// Status of a letter, `Unset` if never guessed
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        self.keys.get(&letter).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
