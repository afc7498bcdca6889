use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bootstrapping the run log.
///
/// Filesystem failures are never retried; they abort initialization and are
/// handed back to the caller as-is.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to read the current working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("{}", already_initialized_message(.active.as_deref()))]
    AlreadyInitialized { active: Option<PathBuf> },
}

fn already_initialized_message(active: Option<&std::path::Path>) -> String {
    match active {
        Some(path) => format!("Logging is already initialized (writing to {})", path.display()),
        None => "A global logger is already installed".to_string(),
    }
}

pub type Result<T, E = LoggingError> = std::result::Result<T, E>;
