//! Word representation
//!
//! A `Word` stores a normalized 3-6 letter word for a given language.

use super::Language;
use std::fmt;
use thiserror::Error;

/// Shortest playable word
pub const MIN_LENGTH: usize = 3;

/// Longest playable word
pub const MAX_LENGTH: usize = 6;

/// A playable word with per-letter access
///
/// Letters are stored as `char`s so Arabic words index by letter, not by byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    language: Language,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be 3-6 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains a letter outside the {language} alphabet: '{letter}'")]
    InvalidCharacter { letter: char, language: Language },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is trimmed and normalized (English is lowercased).
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 3-6 letters
    /// - A letter is outside the language's alphabet
    ///
    /// # Examples
    /// ```
    /// use kelmat::core::{Language, Word};
    ///
    /// let word = Word::new("Crane", Language::English).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("toolong", Language::English).is_err());
    /// assert!(Word::new("cr4ne", Language::English).is_err());
    /// ```
    pub fn new(text: &str, language: Language) -> Result<Self, WordError> {
        let letters: Vec<char> = text.trim().chars().map(|c| language.normalize(c)).collect();

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&letters.len()) {
            return Err(WordError::InvalidLength(letters.len()));
        }

        if let Some(&letter) = letters.iter().find(|&&c| !language.accepts(c)) {
            return Err(WordError::InvalidCharacter { letter, language });
        }

        Ok(Self {
            text: letters.iter().collect(),
            letters,
            language,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Display form: English upper-cased, Arabic unchanged
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.language {
            Language::English => self.text.to_uppercase(),
            Language::Arabic => self.text.clone(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
