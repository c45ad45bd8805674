//! Round settings and persisted user preferences

use crate::core::Language;
use crate::storage::{StorageError, Store, keys, load_json, save_json};
use crate::wordlists::WordLists;
use serde::{Deserialize, Serialize};

/// Default countdown per guess, in seconds
pub const DEFAULT_TIME_LIMIT: u32 = 120;

/// Default letter length
pub const DEFAULT_LENGTH: usize = 5;

/// Settings fixed for the lifetime of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSettings {
    pub language: Language,
    pub letter_length: usize,
    pub timer_enabled: bool,
    /// Seconds allowed per guess when the timer is enabled
    pub timer_duration: u32,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            letter_length: DEFAULT_LENGTH,
            timer_enabled: false,
            timer_duration: DEFAULT_TIME_LIMIT,
        }
    }
}

impl RoundSettings {
    /// Align language and length with the lists actually resolved for the round
    #[must_use]
    pub fn matching(mut self, lists: &WordLists) -> Self {
        self.language = lists.language();
        self.letter_length = lists.length();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// User preferences persisted between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub chrono_enabled: bool,
    pub time_limit: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            chrono_enabled: false,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl Preferences {
    /// Load preferences, using defaults for anything missing or corrupt
    #[must_use]
    pub fn load(store: &(impl Store + ?Sized)) -> Self {
        let defaults = Self::default();
        Self {
            theme: load_json(store, keys::THEME).unwrap_or(defaults.theme),
            chrono_enabled: load_json(store, keys::CHRONO_ENABLED)
                .unwrap_or(defaults.chrono_enabled),
            time_limit: load_json(store, keys::TIME_LIMIT).unwrap_or(defaults.time_limit),
        }
    }

    /// # Errors
    /// Returns `StorageError` if any preference cannot be persisted.
    pub fn save(&self, store: &mut (impl Store + ?Sized)) -> Result<(), StorageError> {
        save_json(store, keys::THEME, &self.theme)?;
        save_json(store, keys::CHRONO_ENABLED, &self.chrono_enabled)?;
        save_json(store, keys::TIME_LIMIT, &self.time_limit)
    }

    /// Round settings for a solo round played with these preferences
    #[must_use]
    pub const fn round_settings(&self, language: Language, letter_length: usize) -> RoundSettings {
        RoundSettings {
            language,
            letter_length,
            timer_enabled: self.chrono_enabled,
            timer_duration: self.time_limit,
        }
    }
}
