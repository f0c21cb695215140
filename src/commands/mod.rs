//! Command implementations

pub mod board;
pub mod score;
pub mod solve;

pub use board::{clear_board, mark_row, show_board};
pub use score::{ScoreResult, score_words};
pub use solve::{SolveConfig, SolveResult, solve_date};
