//! Lifetime statistics across finished rounds

use crate::engine::MAX_ROWS;
use crate::storage::{StorageError, Store, keys, load_json, save_json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    /// Rounded percentage of games won
    pub win_percentage: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Rounded seconds per game
    pub average_time: u64,
    pub total_time: u64,
    /// Wins by number of guesses, index 0 for a first-guess win
    pub guess_distribution: [u32; MAX_ROWS],
}

impl Statistics {
    /// Stored statistics, or empty ones if missing or unreadable
    #[must_use]
    pub fn load(store: &(impl Store + ?Sized)) -> Self {
        load_json(store, keys::STATS).unwrap_or_default()
    }

    /// # Errors
    /// Returns `StorageError` if the statistics cannot be persisted.
    pub fn save(&self, store: &mut (impl Store + ?Sized)) -> Result<(), StorageError> {
        save_json(store, keys::STATS, self)
    }

    /// Fold one finished round into the totals
    pub fn record(&mut self, outcome: Outcome, seconds_used: u64, guesses: usize) {
        let won = outcome == Outcome::Won;

        self.games_played += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            if let Some(slot) = guesses
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
        self.best_streak = self.best_streak.max(self.current_streak);

        self.win_percentage = rounded_ratio(
            u64::from(self.games_won) * 100,
            u64::from(self.games_played),
        )
        .try_into()
        .unwrap_or(100);

        self.total_time += seconds_used;
        self.average_time = rounded_ratio(self.total_time, u64::from(self.games_played));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// `numerator / denominator` rounded half up
const fn rounded_ratio(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator * 2 + denominator) / (denominator * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn first_win() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 42, 3);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.win_percentage, 100);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.average_time, 42);
        assert_eq!(stats.guess_distribution, [0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn loss_breaks_streak_but_keeps_best() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 10, 1);
        stats.record(Outcome::Won, 20, 2);
        stats.record(Outcome::Lost, 120, 6);

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.win_percentage, 67);
        assert_eq!(stats.total_time, 150);
        assert_eq!(stats.average_time, 50);
        assert_eq!(stats.guess_distribution, [1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn percentages_round_half_up() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 1, 1);
        stats.record(Outcome::Lost, 2, 6);
        assert_eq!(stats.win_percentage, 50);
        assert_eq!(stats.average_time, 2);

        stats.record(Outcome::Lost, 0, 6);
        assert_eq!(stats.win_percentage, 33);
        assert_eq!(stats.average_time, 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 30, 4);
        stats.clear();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn stored_as_camel_case() {
        let mut store = MemoryStore::default();
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 5, 2);
        stats.save(&mut store).unwrap();

        let raw = store.get(keys::STATS).unwrap();
        assert!(raw.contains("\"gamesPlayed\":1"));
        assert!(raw.contains("\"guessDistribution\":[0,1,0,0,0,0]"));
        assert_eq!(Statistics::load(&store), stats);
    }

    #[test]
    fn older_records_without_distribution_load() {
        let mut store = MemoryStore::default();
        store
            .set(
                keys::STATS,
                r#"{"gamesPlayed":4,"gamesWon":3,"winPercentage":75,"currentStreak":1,"bestStreak":2,"averageTime":60,"totalTime":240}"#,
            )
            .unwrap();

        let stats = Statistics::load(&store);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution, [0; MAX_ROWS]);
    }
}
