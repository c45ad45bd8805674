//! Guess board: six rows of letter cells

use crate::core::{LetterStatus, Pattern};
use serde::{Deserialize, Serialize};

/// Number of guesses in a round
pub const MAX_ROWS: usize = 6;

/// One letter slot on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub letter: Option<char>,
    /// Committed status, set when the row settles
    pub status: LetterStatus,
    /// Set while the reveal sequence has uncovered this cell
    pub revealed: bool,
    /// Status computed at submission, shown once the cell is revealed
    pub pending: Option<LetterStatus>,
}

impl Cell {
    /// Status to show right now: committed, or pending once revealed
    #[must_use]
    pub fn visible_status(&self) -> LetterStatus {
        match self.pending {
            Some(pending) if self.revealed && self.status == LetterStatus::Unset => pending,
            _ => self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Empty board for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            rows: vec![vec![Cell::default(); length]; MAX_ROWS],
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> &[Cell] {
        &self.rows[index]
    }

    /// Letters per row
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Show the working guess in a row (letters only)
    pub(crate) fn write_letters(&mut self, index: usize, letters: &[char]) {
        for (i, cell) in self.rows[index].iter_mut().enumerate() {
            cell.letter = letters.get(i).copied();
        }
    }

    /// Attach the computed statuses to a row; nothing is visible yet
    pub(crate) fn stage(&mut self, index: usize, pattern: &Pattern) {
        for (cell, &status) in self.rows[index].iter_mut().zip(pattern.statuses()) {
            cell.pending = Some(status);
            cell.revealed = false;
        }
    }

    pub(crate) fn reveal(&mut self, index: usize, column: usize) {
        if let Some(cell) = self.rows[index].get_mut(column) {
            cell.revealed = true;
        }
    }

    /// Make the staged statuses permanent
    pub(crate) fn commit(&mut self, index: usize) {
        for cell in &mut self.rows[index] {
            if let Some(pending) = cell.pending.take() {
                cell.status = pending;
            }
            cell.revealed = true;
        }
    }

    /// Drop reveal state left on a row by an interrupted sequence
    pub(crate) fn clear_transient(&mut self, index: usize) {
        for cell in &mut self.rows[index] {
            cell.pending = None;
            cell.revealed = false;
        }
    }

    /// Whether no cell of a row carries a committed status
    #[must_use]
    pub fn is_unscored(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| row.iter().all(|cell| cell.status == LetterStatus::Unset))
    }

    /// Check the board layout invariants against a cursor position
    ///
    /// Rows after `current_row` must be untouched and committed rows must
    /// have a letter and a status in every cell.
    #[must_use]
    pub fn is_consistent(&self, current_row: usize, length: usize) -> bool {
        if self.rows.len() != MAX_ROWS || self.rows.iter().any(|row| row.len() != length) {
            return false;
        }

        self.rows.iter().enumerate().all(|(index, row)| {
            if index < current_row {
                row.iter()
                    .all(|cell| cell.letter.is_some() && cell.status != LetterStatus::Unset)
            } else if index > current_row {
                row.iter().all(|cell| *cell == Cell::default())
            } else {
                true
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present, Unset};

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.rows().len(), MAX_ROWS);
        assert_eq!(board.width(), 4);
        assert!(board.is_consistent(0, 4));
    }

    #[test]
    fn staged_status_shows_only_after_reveal() {
        let mut board = Board::new(3);
        board.write_letters(0, &['c', 'a', 't']);
        board.stage(0, &Pattern::from_statuses(vec![Correct, Present, Absent]));

        assert_eq!(board.row(0)[0].visible_status(), Unset);
        board.reveal(0, 0);
        assert_eq!(board.row(0)[0].visible_status(), Correct);
        assert_eq!(board.row(0)[1].visible_status(), Unset);

        board.commit(0);
        assert_eq!(board.row(0)[1].status, Present);
        assert_eq!(board.row(0)[2].visible_status(), Absent);
        assert!(board.row(0).iter().all(|c| c.pending.is_none() && c.revealed));
        assert!(board.is_consistent(1, 3));
    }

    #[test]
    fn partial_working_guess() {
        let mut board = Board::new(5);
        board.write_letters(2, &['a', 'b']);
        assert_eq!(board.row(2)[1].letter, Some('b'));
        assert_eq!(board.row(2)[2].letter, None);
    }

    #[test]
    fn letters_beyond_cursor_are_inconsistent() {
        let mut board = Board::new(3);
        board.write_letters(3, &['c']);
        assert!(!board.is_consistent(1, 3));
        assert!(!board.is_consistent(3, 4));
    }
}
