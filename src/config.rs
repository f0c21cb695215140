//! Runtime configuration
//!
//! Collected from command-line flags (with environment fallbacks) in
//! `main` and handed to the command layer.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::answer::{AnswerSource, DEFAULT_ANSWER_URL, FixedAnswer, HttpAnswerSource};
use crate::core::Word;
use crate::error::Result;
use crate::storage::{BoardShape, FileStore};
use crate::wordlists::Dictionary;

/// Default directory for stored boards
pub const DEFAULT_STORE_DIR: &str = "boards";

/// Default HTTP timeout for answer requests, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// List compiled into the binary
    Embedded,
    /// One word per line, in priority order
    File(PathBuf),
}

impl WordlistSource {
    /// `"embedded"` selects the built-in list; anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the dictionary
    ///
    /// # Errors
    /// Returns an I/O error if a wordlist file cannot be read.
    pub fn load(&self) -> Result<Dictionary> {
        let dictionary = match self {
            Self::Embedded => Dictionary::embedded(),
            Self::File(path) => Dictionary::from_file(path)?,
        };
        debug!(source = ?self, words = dictionary.len(), "Loaded dictionary");
        Ok(dictionary)
    }
}

/// Settings shared by all commands
#[derive(Debug, Clone)]
pub struct Config {
    pub store_dir: PathBuf,
    pub answer_url: String,
    pub timeout: Duration,
    pub wordlist: WordlistSource,
    pub shape: BoardShape,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            answer_url: DEFAULT_ANSWER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            wordlist: WordlistSource::Embedded,
            shape: BoardShape::default(),
        }
    }
}

impl Config {
    /// Board store rooted at the configured directory
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::with_shape(&self.store_dir, self.shape)
    }

    /// Dictionary from the configured wordlist
    ///
    /// # Errors
    /// Returns an I/O error if a wordlist file cannot be read.
    pub fn dictionary(&self) -> Result<Dictionary> {
        self.wordlist.load()
    }

    /// Answer source: `fixed` if given, otherwise the configured URL
    ///
    /// # Errors
    /// Returns `Error::AnswerUnavailable` if the HTTP client cannot be built.
    pub fn answer_source(&self, fixed: Option<Word>) -> Result<Box<dyn AnswerSource>> {
        let source: Box<dyn AnswerSource> = match fixed {
            Some(word) => Box::new(FixedAnswer::new(word)),
            None => Box::new(HttpAnswerSource::new(&self.answer_url, self.timeout)?),
        };
        Ok(source)
    }
}
