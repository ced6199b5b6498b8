use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// A single rendered log event.
///
/// This is the only value that crosses the delivery queue. It is built once at
/// the call site and moved, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// When the call was made. File rotation is driven by this, not by the
    /// time the record is written.
    pub timestamp: DateTime<Local>,
    /// The severity level of the record.
    pub level: LogLevel,
    /// Rendered text: level tag, caller location and message, without color.
    pub text: String,
}

impl LogRecord {
    /// Creates a new `LogRecord`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Local;
    /// use zlog::{LogLevel, LogRecord};
    ///
    /// let rec = LogRecord::new(LogLevel::Info, "[I] main.rs:3 ready", Local::now());
    /// assert_eq!(rec.level, LogLevel::Info);
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            level,
            text: text.into(),
        }
    }

    /// Calendar date used in rotated file names, `YYYYMMDD`.
    #[must_use]
    pub fn date_stamp(&self) -> String {
        self.timestamp.format("%Y%m%d").to_string()
    }
}
