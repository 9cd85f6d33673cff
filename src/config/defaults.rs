//! Default configuration values

/// Denominators with an absolute value below this are treated as zero
pub const DIVISION_EPSILON: f64 = 1e-10;

/// Timestamp format for log lines (local time, millisecond precision)
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
