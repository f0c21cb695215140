//! Wordle Unveil - CLI
//!
//! Mark the colors of a day's board, then reveal which words produced them.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use wordle_unveil::{
    answer::AnswerSource,
    commands::{SolveConfig, clear_board, mark_row, score_words, show_board, solve_date},
    config::{Config, DEFAULT_STORE_DIR, DEFAULT_TIMEOUT_SECS, WordlistSource},
    core::Word,
    logging::init_logging,
    output::{print_puzzle, print_score_result, print_solve_result, print_stored_board},
    storage::{BoardShape, date_key},
};

#[derive(Parser)]
#[command(
    name = "wordle_unveil",
    about = "Reveal the words behind a colored Wordle board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding stored boards
    #[arg(long, global = true, env = "WORDLE_STORE_DIR", default_value = DEFAULT_STORE_DIR)]
    store_dir: PathBuf,

    /// Answer URL template; `{date}` is replaced with YYYY-MM-DD
    #[arg(long, global = true, env = "WORDLE_ANSWER_URL")]
    answer_url: Option<String>,

    /// Answer request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Wordlist: 'embedded' (default) or path to file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Reveal the letters of every colored row on a date's board
    Solve {
        /// Puzzle date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Use this answer instead of fetching it
        #[arg(short, long)]
        answer: Option<String>,

        /// Print the result without storing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Set the colors of one row (G = green, Y = yellow, - = gray)
    Mark {
        /// Row number, 1-6
        row: usize,

        /// Colors, e.g. "GY--G" or "🟩🟨⬜⬜🟩"
        pattern: String,

        /// Puzzle date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Reset a date's board to blank
    Clear {
        /// Puzzle date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Print a date's stored board
    Show {
        /// Puzzle date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Score a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer word
        answer: String,
    },

    /// Fetch and print a date's answer
    Answer {
        /// Puzzle date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

impl Cli {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            store_dir: self.store_dir.clone(),
            answer_url: self.answer_url.clone().unwrap_or(defaults.answer_url),
            timeout: Duration::from_secs(self.timeout_secs),
            wordlist: WordlistSource::from_arg(&self.wordlist),
            shape: BoardShape::default(),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose).context("failed to initialize logging")?;

    let config = cli.config();

    match cli.command {
        Commands::Solve {
            date,
            answer,
            dry_run,
        } => run_solve_command(&config, date.unwrap_or_else(today), answer.as_deref(), dry_run),
        Commands::Mark { row, pattern, date } => {
            run_mark_command(&config, date.unwrap_or_else(today), row, &pattern)
        }
        Commands::Clear { date } => {
            let key = date_key(date.unwrap_or_else(today));
            let board = clear_board(&mut config.store(), &key, config.shape)?;
            print_stored_board(&key, &board);
            Ok(())
        }
        Commands::Show { date } => {
            let key = date_key(date.unwrap_or_else(today));
            let board = show_board(&config.store(), &key, config.shape)?;
            print_stored_board(&key, &board);
            Ok(())
        }
        Commands::Score { guess, answer } => {
            let result = score_words(&guess, &answer)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Answer { date } => {
            let source = config.answer_source(None)?;
            let puzzle = source.puzzle(date.unwrap_or_else(today))?;
            print_puzzle(&puzzle);
            Ok(())
        }
    }
}

fn run_solve_command(
    config: &Config,
    date: NaiveDate,
    answer: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let fixed = answer
        .map(Word::new)
        .transpose()
        .context("invalid --answer")?;
    let source = config.answer_source(fixed)?;
    let dictionary = config
        .dictionary()
        .with_context(|| format!("failed to load wordlist {:?}", config.wordlist))?;

    let mut solve_config = SolveConfig::new(date);
    solve_config.shape = config.shape;
    solve_config.persist = !dry_run;

    let result = solve_date(&solve_config, &mut config.store(), source.as_ref(), &dictionary)?;
    print_solve_result(&result);
    Ok(())
}

fn run_mark_command(config: &Config, date: NaiveDate, row: usize, pattern: &str) -> Result<()> {
    let index = row
        .checked_sub(1)
        .context("rows are numbered from 1")?;
    let key = date_key(date);

    let board = mark_row(&mut config.store(), &key, config.shape, index, pattern)?;
    print_stored_board(&key, &board);
    Ok(())
}
