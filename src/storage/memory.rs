//! In-memory board store

use super::{BoardShape, BoardStore, decode_board};
use crate::core::Board;
use crate::error::Result;
use rustc_hash::FxHashMap;

/// Board store holding raw JSON strings in memory
///
/// Values go through the same encode/decode path as the file store, so a
/// malformed value inserted with [`MemoryStore::insert_raw`] reads back as
/// absent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    shape: BoardShape,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_shape(shape: BoardShape) -> Self {
        Self {
            entries: FxHashMap::default(),
            shape,
        }
    }

    /// Store an arbitrary string under `key`, bypassing encoding
    pub fn insert_raw(&mut self, key: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(key.into(), raw.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BoardStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Board>> {
        Ok(self
            .entries
            .get(key)
            .and_then(|raw| decode_board(key, raw, self.shape)))
    }

    fn set(&mut self, key: &str, board: &Board) -> Result<()> {
        let raw = serde_json::to_string(board)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    #[test]
    fn missing_key_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("2024-01-01").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        let mut board = Board::standard();
        board.set_pattern(0, &Pattern::parse("GY---").unwrap()).unwrap();

        store.set("2024-01-01", &board).unwrap();

        assert_eq!(store.get("2024-01-01").unwrap(), Some(board));
        assert_eq!(store.get("2024-01-02").unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn five_row_board_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set("2024-01-01", &Board::blank(5, 5)).unwrap();
        assert_eq!(store.get("2024-01-01").unwrap(), None);
    }

    #[test]
    fn raw_garbage_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.insert_raw("2024-01-01", "{\"rows\": 6}");
        assert_eq!(store.get("2024-01-01").unwrap(), None);
        assert!(!store.is_empty());
    }

    #[test]
    fn shape_is_configurable() {
        let shape = BoardShape { rows: 2, width: 3 };
        let mut store = MemoryStore::with_shape(shape);
        store.set("k", &shape.blank()).unwrap();
        assert!(store.get("k").unwrap().is_some());

        store.set("k", &Board::standard()).unwrap();
        assert!(store.get("k").unwrap().is_none());
    }
}
