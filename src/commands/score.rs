//! Score a single guess against a solution

use crate::core::{Language, Pattern, Word, WordError};

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub solution: Word,
    pub pattern: Pattern,
}

/// Score `guess` against `solution` without any word-list check
///
/// # Errors
///
/// Returns `WordError` if either word is not a 3-6 letter word of the
/// language, or `InvalidLength` if the two lengths differ.
pub fn score_words(
    guess: &str,
    solution: &str,
    language: Language,
) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess, language)?;
    let solution = Word::new(solution, language)?;
    if guess.len() != solution.len() {
        return Err(WordError::InvalidLength(guess.len()));
    }

    let pattern = Pattern::calculate(&guess, &solution);
    Ok(ScoreResult {
        guess,
        solution,
        pattern,
    })
}
