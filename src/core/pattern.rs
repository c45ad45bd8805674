//! Guess feedback calculation and representation
//!
//! A pattern holds one `LetterStatus` per letter of the guess:
//! - Absent (letter not in the remaining solution letters)
//! - Present (letter in the word, wrong position)
//! - Correct (letter in the correct position)

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single cell or keyboard key
///
/// Variants are declared in increasing order of information, so `Ord`
/// gives the keyboard dominance rule: `Correct > Present > Absent > Unset`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    #[default]
    Unset,
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used in text output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern(Vec<LetterStatus>);

impl Pattern {
    /// Calculate the pattern when `guess` is played against `solution`
    ///
    /// Both words must have the same length.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from the solution
    /// 2. Second pass: for every other letter, consume the leftmost
    ///    remaining occurrence in the solution and mark it present
    ///
    /// A repeated guess letter is therefore marked at most as many times as
    /// it remains unconsumed in the solution.
    ///
    /// # Examples
    /// ```
    /// use kelmat::core::{Language, LetterStatus, Pattern, Word};
    ///
    /// let guess = Word::new("trace", Language::English).unwrap();
    /// let solution = Word::new("crane", Language::English).unwrap();
    /// let pattern = Pattern::calculate(&guess, &solution);
    ///
    /// assert_eq!(
    ///     pattern.statuses(),
    ///     &[
    ///         LetterStatus::Absent,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(guess.len(), solution.len(), "words must have equal length");

        let mut status = vec![LetterStatus::Absent; guess.len()];
        let mut remaining: Vec<Option<char>> = solution.letters().iter().copied().map(Some).collect();

        // First pass: exact position matches
        for (i, &letter) in guess.letters().iter().enumerate() {
            if remaining.get(i).copied().flatten() == Some(letter) {
                status[i] = LetterStatus::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: wrong position, leftmost unconsumed occurrence
        for (i, &letter) in guess.letters().iter().enumerate() {
            if status[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                *slot = None;
                status[i] = LetterStatus::Present;
            }
        }

        Self(status)
    }

    /// Build a pattern from explicit statuses
    #[must_use]
    pub const fn from_statuses(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use super::LetterStatus::{Absent, Correct, Present};

    fn score(guess: &str, solution: &str) -> Vec<LetterStatus> {
        let guess = Word::new(guess, Language::English).unwrap();
        let solution = Word::new(solution, Language::English).unwrap();
        Pattern::calculate(&guess, &solution).statuses().to_vec()
    }

    /// No letter may be marked correct/present more often than it occurs in the solution
    fn assert_multiset_bound(guess: &str, solution: &str) {
        let statuses = score(guess, solution);
        for letter in guess.chars() {
            let marked = guess
                .chars()
                .zip(&statuses)
                .filter(|&(c, s)| c == letter && *s != Absent)
                .count();
            let available = solution.chars().filter(|&c| c == letter).count();
            assert!(
                marked <= available,
                "{guess} vs {solution}: '{letter}' marked {marked} times, solution has {available}"
            );
        }
    }

    #[test]
    fn trace_against_crane() {
        // the shared A sits at index 2 in both words
        assert_eq!(
            score("trace", "crane"),
            vec![Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn crane_against_trace() {
        assert_eq!(
            score("crane", "trace"),
            vec![Present, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn pattern_all_absent() {
        let statuses = score("abcde", "fghij");
        assert!(statuses.iter().all(|&s| s == Absent));
    }

    #[test]
    fn pattern_all_correct() {
        let pattern = Pattern::calculate(
            &Word::new("crane", Language::English).unwrap(),
            &Word::new("CRANE", Language::English).unwrap(),
        );
        assert!(pattern.is_perfect());
    }

    #[test]
    fn repeated_letters_aabbb_vs_ababa() {
        // Pass 1: positions 0 (A) and 3 (B) correct.
        // Pass 2: A at 1 takes the A at 2, B at 2 takes the B at 1, B at 4 finds none left.
        assert_eq!(
            score("aabbb", "ababa"),
            vec![Correct, Present, Present, Correct, Absent]
        );
        assert_multiset_bound("aabbb", "ababa");
    }

    #[test]
    fn repeated_letters_length_three() {
        assert_eq!(score("eel", "lee"), vec![Present, Correct, Present]);
        assert_eq!(score("ooh", "cob"), vec![Absent, Correct, Absent]);
        assert_multiset_bound("ooh", "cob");
    }

    #[test]
    fn repeated_letters_length_four() {
        assert_eq!(score("noon", "onto"), vec![Present, Present, Present, Absent]);
        assert_multiset_bound("noon", "onto");
    }

    #[test]
    fn repeated_letters_length_five() {
        // SPEED vs ERASE: S present, both E present, P and D absent
        assert_eq!(
            score("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
        // ROBOT vs FLOOR: green O takes priority over the earlier yellow O
        assert_eq!(
            score("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
        assert_multiset_bound("speed", "abide");
    }

    #[test]
    fn repeated_letters_length_six() {
        assert_eq!(
            score("settee", "tester"),
            vec![Present, Correct, Present, Correct, Correct, Absent]
        );
        assert_multiset_bound("settee", "tester");
        assert_multiset_bound("eeeeee", "belief");
    }

    #[test]
    fn scoring_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(score("slate", "least"), score("slate", "least"));
        }
    }

    #[test]
    fn arabic_scoring() {
        let guess = Word::new("كتب", Language::Arabic).unwrap();
        let solution = Word::new("بكت", Language::Arabic).unwrap();
        let pattern = Pattern::calculate(&guess, &solution);
        assert_eq!(pattern.statuses(), &[Present, Present, Present]);
    }

    #[test]
    fn pattern_to_emoji() {
        let pattern = Pattern::from_statuses(vec![Correct, Present, Absent]);
        assert_eq!(pattern.to_emoji(), "🟩🟨⬛");
    }

    #[test]
    fn dominance_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Absent > LetterStatus::Unset);
    }
}
