use std::path::PathBuf;

use crate::{
    config::Config,
    config_error::ConfigError,
    log::{formatter::DEFAULT_TIME_FORMAT, log_level::LogLevel},
};

/// Section read by [`LoggerConfig::from_config`].
pub const CONFIG_SECTION: &str = "Logging";

/// Default capacity of the delivery queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 4096;

/// Every option the logger understands.
///
/// An empty `file_prefix` disables all file output. `threshold` gates file
/// sinks only; the console shows every record while `console` is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Path prefix of generated files, e.g. `logs/app` -> `logs/app-20240309.log`.
    pub file_prefix: String,
    /// Least severe level persisted to file. Defaults to `Info`.
    pub threshold: LogLevel,
    pub console: bool,
    /// Embed the ANSI color sequences in the main file as well.
    pub file_color: bool,
    /// Hand records to the delivery worker instead of writing inline.
    pub async_mode: bool,
    /// Duplicate error-and-above records into `<prefix>-error[...].log`.
    pub error_file: bool,
    /// Include the record's calendar date in file names.
    pub daily_rotation: bool,
    /// Only read when the logger is built.
    pub queue_capacity: usize,
    pub time_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_prefix: String::new(),
            threshold: LogLevel::Info,
            console: true,
            file_color: false,
            async_mode: false,
            error_file: false,
            daily_rotation: true,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: LogLevel) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_console(mut self, on: bool) -> Self {
        self.console = on;
        self
    }

    #[must_use]
    pub fn with_file_color(mut self, on: bool) -> Self {
        self.file_color = on;
        self
    }

    #[must_use]
    pub fn with_async(mut self, on: bool) -> Self {
        self.async_mode = on;
        self
    }

    #[must_use]
    pub fn with_error_file(mut self, on: bool) -> Self {
        self.error_file = on;
        self
    }

    #[must_use]
    pub fn with_daily_rotation(mut self, on: bool) -> Self {
        self.daily_rotation = on;
        self
    }

    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Reads the `[Logging]` section of `config` on top of the defaults.
    ///
    /// Recognized keys: `console`, `file_color`, `async`, `error_file`,
    /// `daily_rotation`, `file_prefix`, `level`, `queue_capacity`, `time_format`.
    /// A leading `~` in `file_prefix` expands to the home directory.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the first key whose value is malformed.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let sec = CONFIG_SECTION;
        let mut out = Self::default();

        if let Some(v) = config.get_bool(sec, "console")? {
            out.console = v;
        }
        if let Some(v) = config.get_bool(sec, "file_color")? {
            out.file_color = v;
        }
        if let Some(v) = config.get_bool(sec, "async")? {
            out.async_mode = v;
        }
        if let Some(v) = config.get_bool(sec, "error_file")? {
            out.error_file = v;
        }
        if let Some(v) = config.get_bool(sec, "daily_rotation")? {
            out.daily_rotation = v;
        }
        if let Some(prefix) = config.get_non_empty(sec, "file_prefix") {
            out.file_prefix = expand_path(prefix).to_string_lossy().into_owned();
        }
        if let Some(level) = config.get_non_empty(sec, "level") {
            out.threshold = level.parse().map_err(|source| ConfigError::InvalidLevel {
                section: sec.to_string(),
                key: "level".to_string(),
                source,
            })?;
        }
        if let Some(cap) = config.get_number::<usize>(sec, "queue_capacity")? {
            out = out.with_queue_capacity(cap);
        }
        if let Some(fmt) = config.get_non_empty(sec, "time_format") {
            out.time_format = fmt.to_string();
        }
        Ok(out)
    }

    /// Whether a record of `level` should reach any file sink.
    #[inline]
    #[must_use]
    pub fn files_accept(&self, level: LogLevel) -> bool {
        !self.file_prefix.is_empty() && level.passes(self.threshold)
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn empty_prefix_disables_files() {
        let cfg = LoggerConfig::default();
        assert!(!cfg.files_accept(LogLevel::Emergency));
    }

    #[test]
    fn threshold_gates_files() {
        let cfg = LoggerConfig::default()
            .with_file_prefix("logs/app")
            .with_threshold(LogLevel::Info);
        assert!(cfg.files_accept(LogLevel::Error));
        assert!(cfg.files_accept(LogLevel::Info));
        assert!(!cfg.files_accept(LogLevel::Debug));
    }

    #[test]
    fn from_config_reads_logging_section() {
        let cfg = Config::parse(
            "[Logging]\nfile_prefix = out\nlevel = warn\nasync = on\nerror_file = 1\n\
             daily_rotation = false\nconsole = no\nqueue_capacity = 32\n",
        );
        let lc = LoggerConfig::from_config(&cfg).unwrap();
        assert_eq!(lc.file_prefix, "out");
        assert_eq!(lc.threshold, LogLevel::Warning);
        assert!(lc.async_mode && lc.error_file);
        assert!(!lc.daily_rotation && !lc.console && !lc.file_color);
        assert_eq!(lc.queue_capacity, 32);
        assert_eq!(lc.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn from_config_rejects_bad_level() {
        let cfg = Config::parse("[Logging]\nlevel = loud\n");
        let err = LoggerConfig::from_config(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLevel { .. }));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn empty_config_gives_defaults() {
        let lc = LoggerConfig::from_config(&Config::empty()).unwrap();
        assert_eq!(lc, LoggerConfig::default());
        assert_eq!(lc.threshold, LogLevel::Info);
        assert!(lc.console && lc.daily_rotation);
        assert!(!lc.async_mode && !lc.error_file && !lc.file_color);
    }

    #[test]
    fn default_threshold_keeps_debug_out_of_files() {
        let cfg = LoggerConfig::default().with_file_prefix("logs/app");
        assert!(cfg.files_accept(LogLevel::Info));
        assert!(!cfg.files_accept(LogLevel::Debug));
    }

    #[test]
    fn expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("logs/app"), PathBuf::from("logs/app"));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(LoggerConfig::default().with_queue_capacity(0).queue_capacity, 1);
    }
}
