//! Board of colored guess rows
//!
//! Stored as a JSON array of rows, each an array of
//! `{"type": "correct" | "present" | "absent", "char": "X"}` cells.

use super::{CellType, Pattern, Word, WORD_LENGTH};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of guess rows on a standard board
pub const BOARD_ROWS: usize = 6;

/// Character of a cell that has not been guessed or revealed
pub const PLACEHOLDER: char = ' ';

/// Character written into every cell of a row no dictionary word explains
pub const UNKNOWN: char = '?';

/// A single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "type")]
    pub kind: CellType,
    #[serde(rename = "char")]
    pub ch: char,
}

impl Cell {
    #[must_use]
    pub const fn new(kind: CellType, ch: char) -> Self {
        Self { kind, ch }
    }

    /// Unguessed cell: absent with a blank character
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::new(CellType::Absent, PLACEHOLDER)
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.kind == CellType::Absent && self.ch == PLACEHOLDER
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Grid of guess rows for one puzzle date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Board of `rows` placeholder rows, each `width` cells wide
    #[must_use]
    pub fn blank(rows: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![Cell::placeholder(); width]; rows],
        }
    }

    /// Standard 6×5 blank board
    #[must_use]
    pub fn standard() -> Self {
        Self::blank(BOARD_ROWS, WORD_LENGTH)
    }

    /// Wrap rows as-is; use [`Board::validate`] to check the shape
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build a board from row patterns with placeholder characters
    #[must_use]
    pub fn from_patterns(patterns: &[Pattern]) -> Self {
        let rows = patterns
            .iter()
            .map(|p| {
                p.cells()
                    .iter()
                    .map(|&kind| Cell::new(kind, PLACEHOLDER))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row, 0 for a board with no rows
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Check the board has exactly `rows` rows of `width` cells
    ///
    /// # Errors
    /// Returns `Error::MalformedBoard` describing the first mismatch.
    pub fn validate(&self, rows: usize, width: usize) -> Result<()> {
        if self.rows.len() != rows {
            return Err(Error::MalformedBoard(format!(
                "expected {rows} rows, found {}",
                self.rows.len()
            )));
        }
        if let Some((i, row)) = self.rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::MalformedBoard(format!(
                "row {i} has {} cells, expected {width}",
                row.len()
            )));
        }
        Ok(())
    }

    /// Colors of row `index`, the key the solver matches against
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn pattern(&self, index: usize) -> Pattern {
        Pattern::new(self.rows[index].iter().map(|c| c.kind).collect())
    }

    /// A row that was never guessed: every cell is a placeholder
    #[must_use]
    pub fn is_empty_row(&self, index: usize) -> bool {
        self.rows[index].iter().all(Cell::is_placeholder)
    }

    /// Letters of row `index` as a string
    #[must_use]
    pub fn row_text(&self, index: usize) -> String {
        self.rows[index].iter().map(|c| c.ch).collect()
    }

    /// Replace the colors of a row, clearing its letters
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` if the row does not exist or the
    /// pattern length differs from the row width.
    pub fn set_pattern(&mut self, index: usize, pattern: &Pattern) -> Result<()> {
        let row_count = self.rows.len();
        let row = self.rows.get_mut(index).ok_or_else(|| {
            Error::InvalidPattern(format!("row {index} out of range (board has {row_count})"))
        })?;
        if row.len() != pattern.len() {
            return Err(Error::InvalidPattern(format!(
                "pattern has {} cells, row {index} has {}",
                pattern.len(),
                row.len()
            )));
        }
        for (cell, &kind) in row.iter_mut().zip(pattern.cells()) {
            *cell = Cell::new(kind, PLACEHOLDER);
        }
        Ok(())
    }

    /// Write a word's letters, uppercased, into row `index`
    pub(crate) fn reveal(&mut self, index: usize, word: &Word) {
        for (cell, &letter) in self.rows[index].iter_mut().zip(word.chars()) {
            cell.ch = char::from(letter).to_ascii_uppercase();
        }
    }

    /// Fill every cell of row `index` with [`UNKNOWN`]
    pub(crate) fn mark_unresolved(&mut self, index: usize) {
        for cell in &mut self.rows[index] {
            cell.ch = UNKNOWN;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_is_blank() {
        let board = Board::standard();
        assert_eq!(board.row_count(), 6);
        assert_eq!(board.width(), 5);
        assert!((0..6).all(|i| board.is_empty_row(i)));
        assert!(board.validate(BOARD_ROWS, WORD_LENGTH).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_row_count() {
        let board = Board::blank(5, 5);
        assert!(matches!(
            board.validate(6, 5),
            Err(Error::MalformedBoard(_))
        ));
    }

    #[test]
    fn validate_rejects_ragged_rows() {
        let mut rows = Board::standard().rows().to_vec();
        rows[3].pop();
        let board = Board::from_rows(rows);
        let err = board.validate(6, 5).unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn set_pattern_clears_letters() {
        let mut board = Board::standard();
        board.reveal(0, &Word::new("crane").unwrap());
        board.set_pattern(0, &Pattern::parse("GY---").unwrap()).unwrap();

        assert_eq!(board.row_text(0), "     ");
        assert_eq!(board.pattern(0), Pattern::parse("GY---").unwrap());
        assert!(!board.is_empty_row(0));
    }

    #[test]
    fn set_pattern_rejects_bad_input() {
        let mut board = Board::standard();
        assert!(board.set_pattern(6, &Pattern::perfect(5)).is_err());
        assert!(board.set_pattern(0, &Pattern::perfect(4)).is_err());
    }

    #[test]
    fn reveal_uppercases() {
        let mut board = Board::standard();
        board.reveal(2, &Word::new("slate").unwrap());
        assert_eq!(board.row_text(2), "SLATE");
    }

    #[test]
    fn mark_unresolved_fills_unknown() {
        let mut board = Board::standard();
        board.mark_unresolved(1);
        assert_eq!(board.row_text(1), "?????");
    }

    #[test]
    fn json_shape_matches_stored_format() {
        let board = Board::from_rows(vec![vec![
            Cell::new(CellType::Correct, 'C'),
            Cell::placeholder(),
        ]]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"[[{"type":"correct","char":"C"},{"type":"absent","char":" "}]]"#
        );

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
