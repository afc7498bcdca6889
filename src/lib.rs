//! # runlog
//!
//! Per-run file logging for `tracing`. At startup the process calls
//! [`initialize_logging`], which creates `<cwd>/logs` if needed and routes
//! every record at `info` or above to `<cwd>/logs/<MM_DD_YYYY_HH_MM_SS>.log`,
//! one line per record:
//!
//! ```text
//! [2024-03-05 14:22:07,123] 42 my_app::worker - INFO - message text
//! ```
//!
//! ## Key Components
//! - **`session`**: names the run's log file and owns its directory.
//! - **`format`**: the record line format.
//! - **`logging`**: builds the file-backed dispatcher, scoped or global.
//! - **`config`**: optional overrides for directory, file name pattern and level.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;

pub use config::LoggingConfig;
pub use error::{LoggingError, Result};
pub use format::SessionFormat;
pub use logging::{active_log_path, initialize_logging, initialize_logging_with, LogContext};
pub use session::{session_file_name, LogSession};

#[cfg(test)]
mod tests;
