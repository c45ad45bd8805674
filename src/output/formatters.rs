//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use colored::{ColoredString, Colorize};

/// A letter as a coloured tile, e.g. ` C ` on green
#[must_use]
pub fn letter_tile(letter: Option<char>, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_uppercase().next().unwrap_or(c)));
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Unset => text.normal(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one row of a guess distribution
///
/// A non-zero count always shows at least one block.
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    let bar = create_progress_bar(count as f64, max as f64, width);
    if count > 0 && !bar.starts_with('█') {
        return format!("█{}", "░".repeat(width.saturating_sub(1)));
    }
    bar
}

/// `"1 guess"` / `"3 guesses"`
#[must_use]
pub fn plural_guesses(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
