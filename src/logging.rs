//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so board output on stdout stays clean. `RUST_LOG`
//! overrides the level chosen from the `-v` count.

use std::io;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Map a `-v` count to a level: warn, info, debug, then trace.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Fails if a global subscriber is already set.
pub fn init_logging(verbosity: u8) -> Result<(), TryInitError> {
    let level = level_for_verbosity(verbosity);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Dependencies stay at warn
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,wordle_unveil={level}"))
    })
}
