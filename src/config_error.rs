use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::log::log_level::LevelParseError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("[{section}] {key}: expected a boolean, got `{value}`")]
    InvalidBool {
        section: String,
        key: String,
        value: String,
    },

    #[error("[{section}] {key}: {source}")]
    InvalidLevel {
        section: String,
        key: String,
        source: LevelParseError,
    },

    #[error("[{section}] {key}: expected a number, got `{value}`")]
    InvalidNumber {
        section: String,
        key: String,
        value: String,
    },
}
