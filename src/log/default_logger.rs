//! Optional process-wide logger used by the `log_*!` macros.
//!
//! Nothing is installed implicitly: the host builds a [`Logger`] and hands it
//! over once. Until then the forwarding macros are no-ops.

use std::sync::{Arc, OnceLock};

use crate::log::logger::Logger;

static DEFAULT_LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

/// Installs `logger` as the default.
///
/// # Errors
/// Gives `logger` back if a default was already installed.
pub fn set_default_logger(logger: Arc<Logger>) -> Result<(), Arc<Logger>> {
    DEFAULT_LOGGER.set(logger)
}

#[must_use]
pub fn default_logger() -> Option<&'static Arc<Logger>> {
    DEFAULT_LOGGER.get()
}
