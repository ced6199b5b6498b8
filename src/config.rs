//! INI-style configuration file.
//!
//! ```text
//! # global keys
//! app = demo
//!
//! [Logging]
//! file_prefix = "logs/app"
//! level = info
//! async = yes
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config_error::ConfigError;

#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses `content`. Blank lines, `#`/`;` comments and lines without `=`
    /// are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        config.globals.insert(key, value);
                    }
                    Some(sec) => {
                        config
                            .sections
                            .entry(sec.clone())
                            .or_default()
                            .insert(key, value);
                    }
                }
            }
        }
        config
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    /// Boolean value of `key`: `true/false`, `1/0`, `yes/no`, `on/off`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBool`] for any other value.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, ConfigError> {
        let Some(value) = self.get_non_empty(section, key) else {
            return Ok(None);
        };
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidBool {
                section: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Numeric value of `key`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidNumber`] if the value does not parse.
    pub fn get_number<T: FromStr>(
        &self,
        section: &str,
        key: &str,
    ) -> Result<Option<T>, ConfigError> {
        let Some(value) = self.get_non_empty(section, key) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber {
                section: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    const SAMPLE: &str = r#"
# comment
app = demo

[Logging]
file_prefix = "logs/app"
async = Yes
; another comment
queue_capacity = 128
bogus = maybe
"#;

    #[test]
    fn parses_globals_and_sections() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get_global("app"), Some("demo"));
        assert_eq!(cfg.get("Logging", "file_prefix"), Some("logs/app"));
        assert_eq!(cfg.get("Logging", "missing"), None);
        assert_eq!(cfg.get("Other", "file_prefix"), None);
    }

    #[test]
    fn typed_getters() {
        let cfg = Config::parse(SAMPLE);
        assert_eq!(cfg.get_bool("Logging", "async").unwrap(), Some(true));
        assert_eq!(cfg.get_bool("Logging", "absent").unwrap(), None);
        assert!(matches!(
            cfg.get_bool("Logging", "bogus"),
            Err(ConfigError::InvalidBool { .. })
        ));
        assert_eq!(cfg.get_number::<usize>("Logging", "queue_capacity").unwrap(), Some(128));
        assert!(cfg.get_number::<usize>("Logging", "bogus").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/definitely/not/here.ini").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("here.ini"));
    }
}
