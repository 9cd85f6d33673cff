//! Diagnostic logging
//!
//! Emits one line per call, unbuffered, to standard error:
//!
//! ```text
//! 2026-08-06 12:34:56.789 [INFO] Computing 2 + 3
//! ```
//!
//! Lines are wrapped in ANSI color codes by severity when stderr is a
//! terminal. Emission is best-effort and never surfaces a failure to the
//! caller. Rendering lives in [`format`] as pure functions so the line
//! format can be tested without touching stderr.

pub mod format;

use std::io::{IsTerminal, Write};

use chrono::{DateTime, Local};

/// Log severity, ordered by increasing urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Low-detail diagnostics (computed results, state reads)
    Debug,
    /// Normal operation progress
    Info,
    /// Permitted but suspect input
    Warn,
    /// Operation failure
    Error,
}

impl Level {
    /// Bracketed label used in rendered log lines
    pub fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// A single diagnostic event: severity, message, and capture time
///
/// Records are rendered and emitted immediately; nothing retains them.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Severity level
    pub level: Level,
    /// Message text
    pub message: String,
    /// Local time at which the record was captured
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Capture a record at the current local time
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}

/// Stderr logger with per-severity colorization
///
/// Whether to color is decided once at construction; rendering itself is
/// pure. No filtering: every call produces a line.
#[derive(Debug, Clone)]
pub struct Logger {
    use_color: bool,
}

impl Logger {
    /// Logger for the current process's stderr, colorized when stderr is
    /// a terminal
    pub fn stderr() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal(),
        }
    }

    /// Logger with an explicit color decision
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Emit one formatted line for `message` at `level`
    ///
    /// Best-effort: write failures are swallowed.
    pub fn log(&self, level: Level, message: &str) {
        let record = LogRecord::new(level, message);
        let line = if self.use_color {
            format::render_colored(&record)
        } else {
            format::render(&record)
        };
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
        let _ = stderr.flush();
    }

    /// Emit at [`Level::Debug`]
    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Emit at [`Level::Info`]
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Emit at [`Level::Warn`]
    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    /// Emit at [`Level::Error`]
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(Level::Debug.label(), "DEBUG");
        assert_eq!(Level::Info.label(), "INFO");
        assert_eq!(Level::Warn.label(), "WARN");
        assert_eq!(Level::Error.label(), "ERROR");
    }

    #[test]
    fn test_record_captures_message() {
        let record = LogRecord::new(Level::Info, "hello");
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.message, "hello");
    }
}
