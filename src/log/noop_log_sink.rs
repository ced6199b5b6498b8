use std::fmt;

use crate::log::{call_site::CallSite, log_level::LogLevel, log_sink::LogSink};

#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log_at(&self, _level: LogLevel, _site: CallSite, _message: fmt::Arguments<'_>) {}
}
