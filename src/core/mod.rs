//! Core domain types for Wordle
//!
//! Words, feedback patterns and boards. Everything here is pure and has no
//! I/O; the solver and the storage layer build on these types.

mod board;
mod pattern;
mod word;

pub use board::{BOARD_ROWS, Board, Cell, PLACEHOLDER, UNKNOWN};
pub use pattern::{CellType, Pattern};
pub use word::{WORD_LENGTH, Word, WordError};

/// Score `guess` against `answer`; shorthand for [`Pattern::calculate`]
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Pattern {
    Pattern::calculate(guess, answer)
}
