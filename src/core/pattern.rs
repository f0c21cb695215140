//! Wordle feedback pattern calculation and representation
//!
//! A pattern is the per-position feedback for a guess:
//! - Absent (gray): letter not in the answer, or all copies already used
//! - Present (yellow): letter in the answer, wrong position
//! - Correct (green): letter in the correct position

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Correct,
    Present,
    #[default]
    Absent,
}

impl CellType {
    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<CellType>);

impl Pattern {
    /// Wrap an explicit sequence of cell types
    #[must_use]
    pub const fn new(cells: Vec<CellType>) -> Self {
        Self(cells)
    }

    /// All-correct pattern of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![CellType::Correct; len])
    }

    #[must_use]
    pub fn cells(&self) -> &[CellType] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == CellType::Correct)
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// # Panics
    /// Panics if `guess` and `answer` differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_unveil::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        assert_eq!(
            guess.len(),
            answer.len(),
            "guess '{guess}' and answer '{answer}' differ in length"
        );

        let guess = guess.chars();
        let target = answer.chars();
        let mut result = vec![CellType::Absent; target.len()];
        let mut answer_available = answer.char_counts();

        // First pass: greens
        for (i, (g, a)) in guess.iter().zip(target).enumerate() {
            if g == a {
                result[i] = CellType::Correct;
                if let Some(count) = answer_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from what is left
        for (cell, letter) in result.iter_mut().zip(guess) {
            if *cell == CellType::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                *cell = CellType::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&c| c == CellType::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&c| c == CellType::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Whitespace is ignored. Any length is accepted; callers check it
    /// against the board.
    ///
    /// # Examples
    /// ```
    /// use wordle_unveil::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(CellType::from_char)
            .collect::<Option<Vec<_>>>()?;

        if cells.is_empty() {
            return None;
        }

        Some(Self(cells))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.to_emoji()).collect()
    }
}

impl From<Vec<CellType>> for Pattern {
    fn from(cells: Vec<CellType>) -> Self {
        Self(cells)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
