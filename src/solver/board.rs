//! Whole-board solving

use super::row::solve_row;
use crate::core::{Board, Pattern, Word};
use crate::error::Result;
use crate::wordlists::Dictionary;
use tracing::debug;

/// What happened to one row of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row was never guessed and was left untouched
    Skipped,
    /// Row letters were filled with this word
    Revealed(Word),
    /// No dictionary word explains the row; letters set to the unknown marker
    Unresolved,
}

/// A solved copy of a board together with the per-row outcomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSolution {
    pub board: Board,
    pub outcomes: Vec<RowOutcome>,
}

impl BoardSolution {
    /// Number of rows that were filled with a word
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Revealed(_)))
            .count()
    }

    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Unresolved))
            .count()
    }
}

/// Replays a known answer against colored boards
///
/// The dictionary is filtered to the answer length once, on construction,
/// and reused for every row.
pub struct Solver {
    answer: Word,
    candidates: Dictionary,
}

impl Solver {
    #[must_use]
    pub fn new(answer: Word, dictionary: &Dictionary) -> Self {
        let candidates = dictionary.with_length(answer.len());
        debug!(
            answer_len = answer.len(),
            candidates = candidates.len(),
            "Filtered dictionary"
        );
        Self { answer, candidates }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Candidate words of the answer's length, in dictionary order
    #[must_use]
    pub const fn candidates(&self) -> &Dictionary {
        &self.candidates
    }

    /// First candidate that reproduces `pattern`, or `None` if unresolved
    #[must_use]
    pub fn solve_row(&self, pattern: &Pattern) -> Option<&Word> {
        solve_row(pattern, &self.answer, &self.candidates)
    }

    /// Solve every row of `board`, returning a fresh board
    ///
    /// Rows are independent. Unguessed rows (all placeholders) are skipped;
    /// every other row is either revealed or filled with the unknown marker.
    /// The input board is not modified, so solving is safe to repeat.
    ///
    /// # Errors
    /// Returns `Error::MalformedBoard` if any row width differs from the
    /// answer length.
    pub fn solve_board(&self, board: &Board) -> Result<BoardSolution> {
        board.validate(board.row_count(), self.answer.len())?;

        let mut solved = board.clone();
        let mut outcomes = Vec::with_capacity(board.row_count());

        for index in 0..board.row_count() {
            if board.is_empty_row(index) {
                outcomes.push(RowOutcome::Skipped);
                continue;
            }

            let pattern = board.pattern(index);
            let outcome = match self.solve_row(&pattern) {
                Some(word) => {
                    solved.reveal(index, word);
                    RowOutcome::Revealed(word.clone())
                }
                None => {
                    solved.mark_unresolved(index);
                    RowOutcome::Unresolved
                }
            };
            debug!(row = index, pattern = %pattern, ?outcome, "Solved row");
            outcomes.push(outcome);
        }

        Ok(BoardSolution {
            board: solved,
            outcomes,
        })
    }
}

/// Solve `board` against `answer` using `dictionary`
///
/// Convenience wrapper around [`Solver`] for one-off calls.
///
/// # Errors
/// Returns `Error::MalformedBoard` if any row width differs from the
/// answer length.
pub fn solve_board(board: &Board, answer: &Word, dictionary: &Dictionary) -> Result<BoardSolution> {
    Solver::new(answer.clone(), dictionary).solve_board(board)
}
