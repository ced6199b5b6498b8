pub mod call_site;
pub mod default_logger;
pub mod delivery_queue;
pub mod delivery_worker;
pub mod file_sink;
pub mod formatter;
pub mod log_bridge;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_record;
pub mod log_sink;
pub mod logger;
pub mod logger_config;
pub mod noop_log_sink;
mod utils;
pub use noop_log_sink::NoopLogSink;
