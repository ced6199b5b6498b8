//! zlog is a leveled logger for a single process.
//!
//! Every call is rendered with its level tag, caller location and timestamp,
//! printed to the console (optionally colored) and persisted to date-rotated
//! files, either inline or through a bounded queue drained by one background
//! thread. Error-and-above records can additionally be copied to a dedicated
//! `-error` file.
//!
//! ```no_run
//! use zlog::{LogLevel, Logger, LoggerConfig, logger_error, logger_info};
//!
//! let logger = Logger::new(
//!     LoggerConfig::default()
//!         .with_file_prefix("logs/app")
//!         .with_threshold(LogLevel::Info)
//!         .with_async(true),
//! );
//! logger_info!(logger, "listening on {}", 8080);
//! logger_error!(logger; "attempt", 3, "failed");
//! ```

/// Handles configuration file loading.
pub mod config;
/// Errors raised while reading configuration.
pub mod config_error;
/// Logger, sinks, delivery queue and macros.
pub mod log;

pub use config::Config;
pub use config_error::ConfigError;
pub use self::log::{
    NoopLogSink,
    call_site::CallSite,
    default_logger::{default_logger, set_default_logger},
    log_bridge::{LogBridge, init_log_bridge},
    log_error::LogError,
    log_level::{LevelParseError, LogLevel},
    log_record::LogRecord,
    log_sink::LogSink,
    logger::Logger,
    logger_config::LoggerConfig,
};
