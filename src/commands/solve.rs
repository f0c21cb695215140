//! Board solving command
//!
//! Fetches the answer for a date, loads the stored board, reveals its rows
//! and stores the result.

use crate::answer::{AnswerSource, Puzzle};
use crate::error::Result;
use crate::solver::{BoardSolution, Solver};
use crate::storage::{BoardShape, BoardStore, date_key, load_or_blank};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use tracing::info;

/// Configuration for solving a date's board
pub struct SolveConfig {
    pub date: NaiveDate,
    pub shape: BoardShape,
    /// Write the solved board back to the store
    pub persist: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            shape: BoardShape::default(),
            persist: true,
        }
    }
}

/// Result of solving a date's board
pub struct SolveResult {
    pub key: String,
    pub puzzle: Puzzle,
    pub solution: BoardSolution,
}

/// Solve the board stored for `config.date`
///
/// The answer is fetched before the store is touched; if it is unavailable
/// nothing is read or written. A missing or malformed stored board is
/// replaced by a blank one.
///
/// # Errors
///
/// Returns an error if:
/// - The answer source fails (`Error::AnswerUnavailable`)
/// - The answer length differs from the board width (`Error::MalformedBoard`)
/// - The store cannot be read or written
pub fn solve_date<S: BoardStore + ?Sized>(
    config: &SolveConfig,
    store: &mut S,
    source: &dyn AnswerSource,
    dictionary: &Dictionary,
) -> Result<SolveResult> {
    let key = date_key(config.date);
    let puzzle = source.puzzle(config.date)?;

    let board = load_or_blank(store, &key, config.shape)?;
    let solver = Solver::new(puzzle.solution.clone(), dictionary);
    let solution = solver.solve_board(&board)?;

    info!(
        %key,
        revealed = solution.revealed_count(),
        unresolved = solution.unresolved_count(),
        "Solved board"
    );

    if config.persist {
        store.set(&key, &solution.board)?;
    }

    Ok(SolveResult {
        key,
        puzzle,
        solution,
    })
}
