//! # Logging Configuration
//!
//! Settings that shape a run log: the directory it lives in, the timestamp
//! pattern used for the file name and the minimum severity. The defaults are
//! the fixed values the bootstrapper has always used (`logs/`,
//! `MM_DD_YYYY_HH_MM_SS.log`, `info`), so `LoggingConfig::default()` is all
//! most callers need.
//!
//! Configuration can also be kept in a TOML file managed by `confy`; the
//! library itself never reads one, only the binary does when asked to.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_FILE_NAME_FORMAT: &str = "%m_%d_%Y_%H_%M_%S";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Where and how a run log is written.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory name, relative to the working directory.
    #[serde(default = "default_dir_name")]
    pub dir_name: String,
    /// Minimum severity, parsed case-insensitively ("info", "WARN", ...).
    #[serde(default = "default_level")]
    pub level: String,
    /// `chrono` strftime pattern for the file stem; `.log` is appended.
    #[serde(default = "default_file_name_format")]
    pub file_name_format: String,
}

fn default_dir_name() -> String { DEFAULT_LOG_DIR.to_string() }

fn default_level() -> String { DEFAULT_LOG_LEVEL.to_string().to_lowercase() }

fn default_file_name_format() -> String { DEFAULT_FILE_NAME_FORMAT.to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            dir_name: default_dir_name(),
            level: default_level(),
            file_name_format: default_file_name_format(),
        }
    }
}

impl LoggingConfig {
    /// Loads a configuration file through `confy`.
    ///
    /// A missing file is created with default values, which is how `confy`
    /// behaves for `load_path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, confy::ConfyError> {
        confy::load_path(path)
    }

    /// The effective minimum severity, falling back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        resolve_level(Some(&self.level)).0
    }
}

/// Where an effective level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Config,
    Default,
    /// The configured value did not parse.
    InvalidConfig,
}

/// Parses a configured level and reports where the effective value came from.
///
/// Unparseable values fall back to [`DEFAULT_LOG_LEVEL`]; the logger is not
/// running yet at that point, so the caller is left to surface the warning.
pub fn resolve_level(configured: Option<&str>) -> (LevelFilter, LevelSource) {
    match configured {
        Some(raw) => match LevelFilter::from_str(normalize_level_name(raw.trim())) {
            Ok(level) => (level, LevelSource::Config),
            Err(_) => (DEFAULT_LOG_LEVEL, LevelSource::InvalidConfig),
        },
        None => (DEFAULT_LOG_LEVEL, LevelSource::Default),
    }
}

// The log file spells levels the long way; accept those spellings back.
fn normalize_level_name(raw: &str) -> &str {
    if raw.eq_ignore_ascii_case("warning") {
        "warn"
    } else if raw.eq_ignore_ascii_case("critical") {
        "error"
    } else {
        raw
    }
}
