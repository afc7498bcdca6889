//! # runlog
//!
//! Starts the run log for the current directory and records that logging
//! has started. Prints the path of the log file on success.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use runlog::config::{self, LevelSource, LoggingConfig};

/// Command-line arguments for runlog.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML file overriding the log directory, file name pattern or level.
    /// Without it the built-in defaults are used and no file is read.
    #[clap(short, long, value_name = "FILE_PATH")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let logging_config = match args.config.as_deref() {
        Some(path) => LoggingConfig::load(path)
            .with_context(|| format!("Failed to load logging configuration from '{}'", path))?,
        None => LoggingConfig::default(),
    };

    // The logger is not running yet, so a bad level goes to stderr.
    if let (level, LevelSource::InvalidConfig) = config::resolve_level(Some(&logging_config.level)) {
        eprintln!("Warning: invalid log level '{}' in configuration. Using '{}'.", logging_config.level, level);
    }

    let session = runlog::initialize_logging_with(&logging_config)
        .context("Failed to initialize logging")?;
    info!("Logging has started");

    println!("{}", session.path().display());
    Ok(())
}
