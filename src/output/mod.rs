//! Terminal output formatting
//!
//! Display utilities for CLI results and colored board tiles.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_puzzle, print_score_result, print_solve_result, print_stored_board,
};
