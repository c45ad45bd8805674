//! Word list loading utilities

use crate::core::{Language, Word};

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use kelmat::core::Language;
/// use kelmat::wordlists::loader::words_from_slice;
/// use kelmat::wordlists::EN5_ANSWERS;
///
/// let words = words_from_slice(EN5_ANSWERS, Language::English);
/// assert_eq!(words.len(), EN5_ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], language: Language) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s, language).ok())
        .collect()
}
