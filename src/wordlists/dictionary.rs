//! Ordered candidate dictionary
//!
//! Order is significant: when several words explain the same row, the one
//! listed first wins.

use super::loader::{load_from_file, words_from_slice};
use super::WORDS;
use crate::core::Word;
use std::io;
use std::path::Path;

/// Ordered list of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// Build from string slices, skipping invalid entries
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(words_from_slice(slice))
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// Words of exactly `len` letters, order preserved
    ///
    /// Filter once and reuse the result when solving several rows.
    #[must_use]
    pub fn with_length(&self, len: usize) -> Self {
        Self::new(
            self.words
                .iter()
                .filter(|w| w.len() == len)
                .cloned()
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
