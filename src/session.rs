//! The run log's identity: when it started, what its file is called and where
//! that file lives.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

use crate::config::{LoggingConfig, DEFAULT_FILE_NAME_FORMAT};
use crate::error::{LoggingError, Result};

pub const LOG_FILE_EXTENSION: &str = "log";

/// File name for a run started at `started_at`, e.g. `03_05_2024_14_22_07.log`.
pub fn session_file_name<Tz>(started_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_file_name(started_at, DEFAULT_FILE_NAME_FORMAT)
}

fn format_file_name<Tz>(started_at: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut stem = String::new();
    // chrono reports a bad pattern as a fmt error at render time. A stem that
    // renders a separator (`%D`, `%F/%T`) would point into directories that
    // are never created.
    let rendered = write!(stem, "{}", started_at.format(pattern)).is_ok();
    if !rendered || stem.is_empty() || stem.contains(['/', '\\']) {
        stem.clear();
        let _ = write!(stem, "{}", started_at.format(DEFAULT_FILE_NAME_FORMAT));
    }
    format!("{stem}.{LOG_FILE_EXTENSION}")
}

/// A single run's log destination. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSession {
    started_at: DateTime<Local>,
    file_name: String,
    dir: PathBuf,
    path: PathBuf,
    level: LevelFilter,
}

impl LogSession {
    /// Describes a session rooted at `base` without touching the filesystem.
    pub fn new(base: impl AsRef<Path>, started_at: DateTime<Local>, config: &LoggingConfig) -> Self {
        let file_name = format_file_name(&started_at, &config.file_name_format);
        let dir = base.as_ref().join(&config.dir_name);
        let path = dir.join(&file_name);
        LogSession {
            started_at,
            file_name,
            dir,
            path,
            level: config.level_filter(),
        }
    }

    /// A session in the current working directory, stamped with the current time.
    pub fn in_current_dir(config: &LoggingConfig) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(LoggingError::CurrentDir)?;
        Ok(Self::new(cwd, Local::now(), config))
    }

    /// Creates the log directory and any missing parents.
    ///
    /// An existing directory is fine; anything else that gets in the way
    /// (permissions, a regular file with the same name) is returned.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| LoggingError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }

    pub fn started_at(&self) -> &DateTime<Local> {
        &self.started_at
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}
