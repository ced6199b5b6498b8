use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Defines the severity levels for log messages.
///
/// Lower discriminants are more severe, so `Emergency < Debug`. A record
/// passes a threshold when `record.level <= threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// The system is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error events that might still allow the application to continue running.
    Error = 3,
    /// Potentially harmful situations.
    Warning = 4,
    /// Normal but significant conditions.
    Notice = 5,
    /// Informational messages that highlight the progress of the application.
    Info = 6,
    /// Fine-grained events that are most useful to debug an application.
    Debug = 7,
}

impl LogLevel {
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// One-letter bracketed tag that prefixes every rendered line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Emergency => "[M]",
            LogLevel::Alert => "[A]",
            LogLevel::Critical => "[C]",
            LogLevel::Error => "[E]",
            LogLevel::Warning => "[W]",
            LogLevel::Notice => "[N]",
            LogLevel::Info => "[I]",
            LogLevel::Debug => "[D]",
        }
    }

    /// ANSI SGR sequence used when the line is colorized.
    #[must_use]
    pub const fn color_begin(self) -> &'static str {
        match self {
            LogLevel::Emergency | LogLevel::Alert => "\x1b[1;35m",
            LogLevel::Critical => "\x1b[1;31m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warning => "\x1b[33m",
            LogLevel::Notice => "\x1b[36m",
            LogLevel::Info => "\x1b[32m",
            LogLevel::Debug => "\x1b[34m",
        }
    }

    /// Whether records of this level also go to the `-error` file.
    #[inline]
    #[must_use]
    pub fn is_error_or_above(self) -> bool {
        self <= LogLevel::Error
    }

    /// Whether a record of this level passes the given file threshold.
    #[inline]
    #[must_use]
    pub fn passes(self, threshold: LogLevel) -> bool {
        self <= threshold
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::Emergency => "emergency",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct LevelParseError(pub String);

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergency" | "emerg" => Ok(LogLevel::Emergency),
            "alert" => Ok(LogLevel::Alert),
            "critical" | "crit" => Ok(LogLevel::Critical),
            "error" | "err" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "notice" => Ok(LogLevel::Notice),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

impl From<::log::Level> for LogLevel {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Error => LogLevel::Error,
            ::log::Level::Warn => LogLevel::Warning,
            ::log::Level::Info => LogLevel::Info,
            ::log::Level::Debug | ::log::Level::Trace => LogLevel::Debug,
        }
    }
}
