//! Board persistence
//!
//! Boards are stored as JSON keyed by puzzle date. A stored value that does
//! not decode, or decodes to the wrong shape, reads back as absent so the
//! caller starts from a blank board instead.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::{BOARD_ROWS, Board, WORD_LENGTH};
use crate::error::Result;
use chrono::NaiveDate;
use tracing::warn;

/// Key-value storage of boards
pub trait BoardStore {
    /// Board stored under `key`, or `None` if missing or malformed
    ///
    /// # Errors
    /// Returns an error only when the backing storage itself fails.
    fn get(&self, key: &str) -> Result<Option<Board>>;

    /// Store `board` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the board cannot be encoded or written.
    fn set(&mut self, key: &str, board: &Board) -> Result<()>;
}

/// Expected dimensions of stored boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardShape {
    pub rows: usize,
    pub width: usize,
}

impl Default for BoardShape {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            width: WORD_LENGTH,
        }
    }
}

impl BoardShape {
    /// Blank board of this shape
    #[must_use]
    pub fn blank(self) -> Board {
        Board::blank(self.rows, self.width)
    }
}

/// Storage key for a puzzle date, `YYYY-MM-DD`
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Decode a stored value, discarding anything that is not a board of `shape`
pub(crate) fn decode_board(key: &str, raw: &str, shape: BoardShape) -> Option<Board> {
    let board: Board = match serde_json::from_str(raw) {
        Ok(board) => board,
        Err(e) => {
            warn!(key, error = %e, "Discarding undecodable stored board");
            return None;
        }
    };

    if let Err(e) = board.validate(shape.rows, shape.width) {
        warn!(key, error = %e, "Discarding stored board with wrong shape");
        return None;
    }

    Some(board)
}

/// Load the board for `key`, or a blank one when nothing usable is stored
///
/// # Errors
/// Propagates storage failures from [`BoardStore::get`].
pub fn load_or_blank<S: BoardStore + ?Sized>(store: &S, key: &str, shape: BoardShape) -> Result<Board> {
    Ok(store.get(key)?.unwrap_or_else(|| shape.blank()))
}
