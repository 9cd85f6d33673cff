//! Pure log line rendering
//!
//! Split from emission so the format can be tested without stderr or
//! terminal detection. The escape sequences are part of the documented
//! line format: cyan for DEBUG, green for INFO, yellow for WARN, red for
//! ERROR.

use chrono::{DateTime, Local};

use super::{Level, LogRecord};
use crate::config::defaults::LOG_TIMESTAMP_FORMAT;

/// ANSI reset sequence
const RESET: &str = "\x1b[0m";

/// Render the uncolored line for a record
pub fn render(record: &LogRecord) -> String {
    format_line(record.timestamp, record.level, &record.message)
}

/// Render the line for a record, wrapped in its severity's color
pub fn render_colored(record: &LogRecord) -> String {
    colorize(record.level, &render(record))
}

/// Format `YYYY-MM-DD HH:MM:SS.mmm [LEVEL] message` from its parts
pub fn format_line(timestamp: DateTime<Local>, level: Level, message: &str) -> String {
    format!(
        "{} [{}] {}",
        timestamp.format(LOG_TIMESTAMP_FORMAT),
        level.label(),
        message
    )
}

/// Wrap an already formatted line in `level`'s ANSI color
pub fn colorize(level: Level, line: &str) -> String {
    format!("{}{line}{RESET}", color_code(level))
}

fn color_code(level: Level) -> &'static str {
    match level {
        Level::Debug => "\x1b[36m", // cyan
        Level::Info => "\x1b[32m",  // green
        Level::Warn => "\x1b[33m",  // yellow
        Level::Error => "\x1b[31m", // red
    }
}
