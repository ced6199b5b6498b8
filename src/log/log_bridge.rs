//! Adapter so records emitted through the `log` crate macros reach a [`Logger`].

use std::sync::Arc;

use ::log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::log::{call_site::CallSite, log_level::LogLevel, logger::Logger};

/// Implements [`log::Log`] on top of a [`Logger`].
///
/// `Trace` maps to [`LogLevel::Debug`]. Records without a static file name are
/// attributed to the unknown call site.
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let level = LogLevel::from(record.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let site = match (record.file_static(), record.line()) {
            (Some(file), Some(line)) => CallSite::new(file, line),
            _ => CallSite::unknown(),
        };
        self.logger.log_at(level, site, *record.args());
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Routes the `log` crate's global logger to `logger`.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use zlog::{Logger, LoggerConfig, init_log_bridge};
///
/// let logger = Arc::new(Logger::new(LoggerConfig::default()));
/// init_log_bridge(logger).expect("no other logger installed");
/// log::info!("now handled by zlog");
/// ```
///
/// # Errors
/// Fails if a `log` logger was already set for this process.
pub fn init_log_bridge(logger: Arc<Logger>) -> Result<(), SetLoggerError> {
    ::log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    ::log::set_max_level(LevelFilter::Trace);
    Ok(())
}
