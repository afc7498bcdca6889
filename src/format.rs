//! Line format for run log records:
//!
//! ```text
//! [2024-03-05 14:22:07,123] 42 my_app::worker - INFO - message text
//! ```

use chrono::Local;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Name written for a level. `WARN` is spelled out as `WARNING`.
pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

/// Formats each event as `[<timestamp>] <line> <target> - <LEVEL> - <message>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFormat;

impl<S, N> FormatEvent<S, N> for SessionFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        // Records bridged from `log` carry their real target and line as fields.
        let normalized = event.normalized_metadata();
        let meta = normalized.as_ref().unwrap_or_else(|| event.metadata());
        write!(
            writer,
            "[{}] {} {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.line().unwrap_or(0),
            meta.target(),
            level_name(meta.level()),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
