//! Logger setup
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` here once at startup.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Level for a `-v` count: warn, info, debug, then trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// `RUST_LOG` overrides the verbosity-derived level. With `log_file` set,
/// records go to that file instead of stderr, which keeps them off the TUI.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is
/// already installed.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp_millis();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("failed to install logger")
}
