//! Wordle Unveil
//!
//! Recovers the hidden letters of a colored Wordle board. Given the day's
//! answer, each row's colors are replayed against a dictionary and the first
//! word that reproduces them is revealed.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_unveil::core::{Board, Pattern, Word};
//! use wordle_unveil::solver::solve_board;
//! use wordle_unveil::wordlists::Dictionary;
//!
//! let answer = Word::new("crane").unwrap();
//! let dictionary = Dictionary::from_slice(&["crane", "cloud", "slate"]);
//!
//! let mut board = Board::standard();
//! board.set_pattern(0, &Pattern::parse("G----").unwrap()).unwrap();
//!
//! let solution = solve_board(&board, &answer, &dictionary).unwrap();
//! assert_eq!(solution.board.row_text(0), "CLOUD");
//! ```

// Core domain types
pub mod core;

// Row and board solving
pub mod solver;

// Word lists
pub mod wordlists;

// Answer sources
pub mod answer;

// Board persistence
pub mod storage;

pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
