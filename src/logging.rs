//! Building and installing the run log.
//!
//! [`LogContext::open`] prepares a file-backed `tracing` dispatcher for a
//! [`LogSession`] without touching global state, so it can be scoped to a
//! thread with [`LogContext::in_scope`]. [`initialize_logging`] is the
//! one-shot startup path: it opens a session in the current directory and
//! installs it as the process-wide default.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing::{debug, Dispatch};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*};

use crate::config::LoggingConfig;
use crate::error::{LoggingError, Result};
use crate::format::SessionFormat;
use crate::session::LogSession;

// Path of the file installed by the first successful `install`.
static ACTIVE_LOG: OnceLock<PathBuf> = OnceLock::new();

/// An opened run log: the session it belongs to and the dispatcher writing to it.
pub struct LogContext {
    session: LogSession,
    dispatch: Dispatch,
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl LogContext {
    /// Creates the session's directory, opens its file for appending and
    /// builds the dispatcher. Nothing is installed globally.
    pub fn open(session: LogSession) -> Result<Self> {
        session.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(session.path())
            .map_err(|source| LoggingError::OpenFile {
                path: session.path().to_path_buf(),
                source,
            })?;

        let file_layer = fmt::layer()
            .event_format(SessionFormat)
            .with_ansi(false)
            .with_writer(Mutex::new(file));

        let subscriber = tracing_subscriber::registry()
            .with(session.level())
            .with(file_layer);

        let context = LogContext {
            session,
            dispatch: Dispatch::new(subscriber),
        };
        context.in_scope(|| {
            debug!(
                path = %context.session.path().display(),
                level = %context.session.level(),
                "Run log opened"
            )
        });
        Ok(context)
    }

    /// Runs `f` with this log as the current thread's default dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Makes this log the process-wide default and routes `log` crate records
    /// into it.
    ///
    /// Fails with [`LoggingError::AlreadyInitialized`] if a global dispatcher
    /// is already set; the existing one keeps receiving records. A `log`
    /// logger installed by someone else only means `log` records are not
    /// bridged; the run log itself is still installed.
    pub fn install(self) -> Result<LogSession> {
        let LogContext { session, dispatch } = self;
        tracing::dispatcher::set_global_default(dispatch).map_err(|_| already_initialized())?;
        let _ = ACTIVE_LOG.set(session.path().to_path_buf());

        if let Err(e) = LogTracer::init() {
            debug!("log crate records are not bridged: {}", e);
        }
        debug!(path = %session.path().display(), "Run log installed as global default");
        Ok(session)
    }

    pub fn session(&self) -> &LogSession {
        &self.session
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }
}

fn already_initialized() -> LoggingError {
    LoggingError::AlreadyInitialized {
        active: ACTIVE_LOG.get().cloned(),
    }
}

/// Path of the run log installed in this process, if any.
pub fn active_log_path() -> Option<PathBuf> {
    ACTIVE_LOG.get().cloned()
}

/// Starts the process-wide run log with the default configuration:
/// `<cwd>/logs/<MM_DD_YYYY_HH_MM_SS>.log` at `info` and above.
///
/// Call once, early in `main`. A second call returns
/// [`LoggingError::AlreadyInitialized`] carrying the active file's path and
/// leaves the filesystem alone.
pub fn initialize_logging() -> Result<LogSession> {
    initialize_logging_with(&LoggingConfig::default())
}

/// [`initialize_logging`] with an explicit configuration.
pub fn initialize_logging_with(config: &LoggingConfig) -> Result<LogSession> {
    if ACTIVE_LOG.get().is_some() || tracing::dispatcher::has_been_set() {
        return Err(already_initialized());
    }
    let session = LogSession::in_current_dir(config)?;
    LogContext::open(session)?.install()
}
