//! Word lists per (language, letter length)
//!
//! Every supported pair has a broad `allowed` list used for guess validation
//! and a narrower `answers` list the solution is drawn from. Both are
//! embedded at build time.

mod embedded;
pub mod loader;

pub use embedded::{
    AR3_ALLOWED, AR3_ANSWERS, AR4_ALLOWED, AR4_ANSWERS, AR5_ALLOWED, AR5_ANSWERS, EN3_ALLOWED,
    EN3_ANSWERS, EN4_ALLOWED, EN4_ANSWERS, EN5_ALLOWED, EN5_ANSWERS, EN6_ALLOWED, EN6_ANSWERS,
    TABLE,
};

use crate::core::{Language, Word};
use loader::words_from_slice;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Language used when a requested pair has no embedded lists
pub const FALLBACK_LANGUAGE: Language = Language::English;

/// Length used when a requested pair has no embedded lists
pub const FALLBACK_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("No {length}-letter {language} answers available")]
    NoAnswers { language: Language, length: usize },
}

/// Resolved word lists for one round configuration
#[derive(Debug, Clone)]
pub struct WordLists {
    language: Language,
    length: usize,
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl WordLists {
    /// Build lists from answer and allowed words
    ///
    /// Words of the wrong length or language are dropped. The accept set is
    /// `allowed ∪ answers`.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::NoAnswers` if no answer survives filtering.
    pub fn new(
        language: Language,
        length: usize,
        answers: Vec<Word>,
        allowed: Vec<Word>,
    ) -> Result<Self, WordListError> {
        let fits = |w: &Word| w.len() == length && w.language() == language;

        let answers: Vec<Word> = answers.into_iter().filter(|w| fits(w)).collect();
        if answers.is_empty() {
            return Err(WordListError::NoAnswers { language, length });
        }

        let accepted = allowed
            .iter()
            .filter(|w| fits(*w))
            .chain(answers.iter())
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self {
            language,
            length,
            answers,
            accepted,
        })
    }

    /// Embedded lists for an exact (language, length) pair
    #[must_use]
    pub fn embedded(language: Language, length: usize) -> Option<Self> {
        TABLE
            .iter()
            .find(|(name, len, _, _)| *name == language.name() && *len == length)
            .and_then(|&(_, _, answers, allowed)| {
                Self::new(
                    language,
                    length,
                    words_from_slice(answers, language),
                    words_from_slice(allowed, language),
                )
                .ok()
            })
    }

    /// Embedded lists for a pair, falling back to english/5 when the pair is missing
    ///
    /// Callers must take the round's language and length from the returned
    /// lists, since they may differ from the request.
    ///
    /// # Panics
    ///
    /// Panics if the fallback lists are missing from the build, which the
    /// word-list tests rule out.
    #[must_use]
    pub fn resolve(language: Language, length: usize) -> Self {
        if let Some(lists) = Self::embedded(language, length) {
            return lists;
        }

        tracing::warn!(
            %language,
            length,
            "no word list for this combination, falling back to {FALLBACK_LANGUAGE}/{FALLBACK_LENGTH}"
        );
        Self::embedded(FALLBACK_LANGUAGE, FALLBACK_LENGTH)
            .expect("fallback word list is embedded")
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Letter length every word in these lists has
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of distinct words accepted as guesses
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Check whether a guess is in `allowed ∪ answers`
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word.text())
    }

    /// Check whether a word can be a solution
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answers.contains(word)
    }

    /// Draw a solution uniformly at random from the answers
    ///
    /// # Panics
    /// Will not panic - `new` rejects empty answer lists.
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.answers.choose(rng).expect("answers is never empty")
    }
}
