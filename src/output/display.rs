//! Display functions for command results

use super::formatters::render_row;
use crate::answer::Puzzle;
use crate::commands::{ScoreResult, SolveResult};
use crate::core::Board;
use crate::solver::RowOutcome;
use colored::Colorize;

/// Print a board as colored tiles, one row per line
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        println!("  {}", render_row(row));
    }
    println!();
}

/// Print a stored board with its date
pub fn print_stored_board(key: &str, board: &Board) {
    println!("{} {}", "Board:".bright_cyan().bold(), key.bright_yellow());
    print_board(board);
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} {}",
        "Solving:".bright_cyan().bold(),
        result.key.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    print_board(&result.solution.board);

    for (i, outcome) in result.solution.outcomes.iter().enumerate() {
        let row = i + 1;
        match outcome {
            RowOutcome::Skipped => {}
            RowOutcome::Revealed(word) => {
                println!("  Row {row}: {}", word.text().to_uppercase().green());
            }
            RowOutcome::Unresolved => {
                println!("  Row {row}: {}", "no dictionary word fits".red());
            }
        }
    }

    println!();
    let revealed = result.solution.revealed_count();
    let unresolved = result.solution.unresolved_count();
    if unresolved == 0 {
        println!(
            "{}",
            format!("✅ Revealed {revealed} row(s)").green().bold()
        );
    } else {
        println!(
            "{}",
            format!("⚠️  Revealed {revealed} row(s), {unresolved} unresolved")
                .yellow()
                .bold()
        );
    }
}

/// Print the pattern of a scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {}: {}",
        result.guess.text().to_uppercase().bright_yellow(),
        result.answer.text().to_uppercase().bright_yellow(),
        result.pattern.to_emoji()
    );
}

/// Print puzzle metadata
pub fn print_puzzle(puzzle: &Puzzle) {
    println!(
        "{} {}",
        "Answer:".bright_cyan().bold(),
        puzzle.solution.text().to_uppercase().green().bold()
    );
    if let Some(date) = &puzzle.print_date {
        println!("  Date:    {date}");
    }
    if let Some(id) = puzzle.id {
        println!("  Id:      {id}");
    }
    if let Some(days) = puzzle.days_since_launch {
        println!("  Day:     {days}");
    }
    if let Some(editor) = &puzzle.editor {
        println!("  Editor:  {editor}");
    }
}
