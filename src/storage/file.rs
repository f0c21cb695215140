//! Directory-backed board store, one `<key>.json` file per board

use super::{BoardShape, BoardStore, decode_board};
use crate::core::Board;
use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Board store writing JSON files into a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    shape: BoardShape,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_shape(dir, BoardShape::default())
    }

    #[must_use]
    pub fn with_shape(dir: impl Into<PathBuf>, shape: BoardShape) -> Self {
        Self {
            dir: dir.into(),
            shape,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid board key: {key:?}"),
            )
            .into());
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BoardStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Board>> {
        let path = self.path_for(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored board");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(decode_board(key, &raw, self.shape))
    }

    fn set(&mut self, key: &str, board: &Board) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, serde_json::to_string_pretty(board)?)?;
        debug!(path = %path.display(), "Stored board");
        Ok(())
    }
}
