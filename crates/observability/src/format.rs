//! Log line format: `<timestamp> [<LEVEL>]: <message>`.

use chrono::{DateTime, Local, TimeZone};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Event formatter producing one plain-text line per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

pub fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Everything before the message, e.g. `2024-03-01 12:30:00,042 [INFO]: `.
pub fn line_prefix<Tz>(at: &DateTime<Tz>, level: &Level) -> String
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    format!("{} [{}]: ", at.format("%Y-%m-%d %H:%M:%S,%3f"), level_label(level))
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> core::fmt::Result {
        write!(writer, "{}", line_prefix(&Local::now(), event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
