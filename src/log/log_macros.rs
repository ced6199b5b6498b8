//! Leveled logging macros for an explicit `Logger` / `LogSink`, and for the
//! installed default logger.
//!
//! The call site is captured here with `file!()` and `line!()`, so wrapping a
//! logger in helpers never shifts the reported location.
//!
//! Two argument forms are accepted:
//! - `logger_info!(logger, "fmt {}", x)` formats like `format!`;
//! - `logger_info!(logger; a, b, c)` joins each `Display` argument with a space.
//!
//! The default-logger macros take the same two forms, with the joined one
//! spelled `log_info!(; a, b, c)`.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr; $($arg:expr),+ $(,)?) => {{
        let __text = $crate::log::formatter::join_args(&[$(&$arg as &dyn ::std::fmt::Display),+]);
        $logger.log_at(
            $lvl,
            $crate::CallSite::new(file!(), line!()),
            format_args!("{}", __text),
        );
    }};
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        $logger.log_at(
            $lvl,
            $crate::CallSite::new(file!(), line!()),
            format_args!($($arg)+),
        );
    }};
}

#[macro_export]
macro_rules! default_log {
    ($lvl:expr; $($arg:expr),+ $(,)?) => {{
        if let Some(__logger) = $crate::default_logger() {
            $crate::logger_log!(__logger, $lvl; $($arg),+);
        }
    }};
    ($lvl:expr, $($arg:tt)+) => {{
        if let Some(__logger) = $crate::default_logger() {
            $crate::logger_log!(__logger, $lvl, $($arg)+);
        }
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (explicit logger)
// ============================================================================

#[macro_export]
macro_rules! logger_emergency {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Emergency; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Emergency, $($arg)+) };
}

#[macro_export]
macro_rules! logger_alert {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Alert; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Alert, $($arg)+) };
}

#[macro_export]
macro_rules! logger_critical {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Critical; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Critical, $($arg)+) };
}

#[macro_export]
macro_rules! logger_error {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Error; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Error, $($arg)+) };
}

#[macro_export]
macro_rules! logger_warning {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Warning; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! logger_notice {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Notice; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Notice, $($arg)+) };
}

#[macro_export]
macro_rules! logger_info {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Info; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Info, $($arg)+) };
}

#[macro_export]
macro_rules! logger_debug {
    ($logger:expr; $($arg:expr),+ $(,)?) => { $crate::logger_log!($logger, $crate::LogLevel::Debug; $($arg),+) };
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::LogLevel::Debug, $($arg)+) };
}

// ============================================================================
// 3. LEVEL-SPECIFIC MACROS (default logger)
// ============================================================================
// No-ops until `set_default_logger` has been called. A leading `;` selects the
// space-joined form: `log_info!(; i, "done")`.

#[macro_export]
macro_rules! log_emergency {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Emergency; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Emergency, $($arg)+) };
}

#[macro_export]
macro_rules! log_alert {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Alert; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Alert, $($arg)+) };
}

#[macro_export]
macro_rules! log_critical {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Critical; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Critical, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Error; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Error, $($arg)+) };
}

#[macro_export]
macro_rules! log_warning {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Warning; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! log_notice {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Notice; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Notice, $($arg)+) };
}

#[macro_export]
macro_rules! log_info {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Info; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    (; $($arg:expr),+ $(,)?) => { $crate::default_log!($crate::LogLevel::Debug; $($arg),+) };
    ($($arg:tt)+) => { $crate::default_log!($crate::LogLevel::Debug, $($arg)+) };
}
