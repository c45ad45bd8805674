//! Core domain types
//!
//! Pure word, language and scoring types shared by the engine and the front-ends.

mod language;
mod pattern;
mod word;

pub use language::Language;
pub use pattern::{LetterStatus, Pattern};
pub use word::{MAX_LENGTH, MIN_LENGTH, Word, WordError};
