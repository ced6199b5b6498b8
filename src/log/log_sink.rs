use std::fmt;

use crate::log::{call_site::CallSite, log_level::LogLevel};

/// Anything that accepts log calls.
///
/// Library code takes an `Arc<dyn LogSink>` so hosts can pass a [`Logger`](crate::Logger)
/// or a [`NoopLogSink`](crate::NoopLogSink) in tests.
pub trait LogSink: Send + Sync {
    fn log_at(&self, level: LogLevel, site: CallSite, message: fmt::Arguments<'_>);
}
