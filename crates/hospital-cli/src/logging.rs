//! Log-file setup for the console application.
//!
//! Events go through `tracing`; the subscriber installed here appends
//! `<timestamp>:<LEVEL>:<message>` lines to the log file. The subscriber
//! is constructed and installed explicitly by `main` -- no component
//! configures logging as a side effect.

use std::fmt::{self, Write as _};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Formats events as `<timestamp>:<LEVEL>:<message>` lines.
struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
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
        write!(
            writer,
            "{}:{}:",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber, appending to the log file at `path`.
///
/// Fails if the file cannot be opened; the caller decides how to degrade.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .event_format(LogLineFormat)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

/// Fallback subscriber writing the same line format to stderr, for when
/// the log file cannot be opened.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .event_format(LogLineFormat)
        .with_writer(io::stderr)
        .init();
}
