//! Stored board editing: set row colors, clear, show

use crate::core::{Board, CellType, Pattern};
use crate::error::{Error, Result};
use crate::storage::{BoardShape, BoardStore, load_or_blank};
use tracing::{info, warn};

/// Set the colors of row `row` (0-based) on the board stored under `key`
///
/// Letters of that row are reset to placeholders so the next solve fills
/// them in again. A missing or malformed board starts blank. An all-gray
/// row is indistinguishable from an unguessed one and will be skipped by
/// the solver; a warning is logged.
///
/// # Errors
///
/// Returns an error if:
/// - `pattern` is not valid feedback notation
/// - `row` is out of range or the pattern length differs from the row width
/// - The store cannot be read or written
pub fn mark_row<S: BoardStore + ?Sized>(
    store: &mut S,
    key: &str,
    shape: BoardShape,
    row: usize,
    pattern: &str,
) -> Result<Board> {
    let pattern = pattern
        .parse::<Pattern>()
        .map_err(Error::InvalidPattern)?;

    let mut board = load_or_blank(store, key, shape)?;
    board.set_pattern(row, &pattern)?;
    store.set(key, &board)?;

    if pattern.cells().iter().all(|&c| c == CellType::Absent) {
        warn!(key, row, "All-gray row is stored as unguessed and will be skipped when solving");
    }

    info!(key, row, pattern = %pattern, "Marked row");
    Ok(board)
}

/// Replace the board stored under `key` with a blank one
///
/// # Errors
/// Returns an error if the store cannot be written.
pub fn clear_board<S: BoardStore + ?Sized>(store: &mut S, key: &str, shape: BoardShape) -> Result<Board> {
    let board = shape.blank();
    store.set(key, &board)?;
    info!(key, "Cleared board");
    Ok(board)
}

/// Board stored under `key`, or a blank one
///
/// # Errors
/// Returns an error if the store cannot be read.
pub fn show_board<S: BoardStore + ?Sized>(store: &S, key: &str, shape: BoardShape) -> Result<Board> {
    load_or_blank(store, key, shape)
}
