//! Board solving
//!
//! Recovers the letters of each colored row by searching the dictionary for
//! the first word that reproduces the row's colors against the answer.

mod board;
mod row;

pub use board::{BoardSolution, RowOutcome, Solver, solve_board};
pub use row::solve_row;
