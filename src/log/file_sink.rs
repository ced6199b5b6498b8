//! Date-rotated file output for the main and error streams.

use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::log::{
    formatter,
    log_error::{LogError, report},
    log_record::LogRecord,
    logger_config::LoggerConfig,
};

/// Tag inserted after the prefix for the error stream.
pub const ERROR_TAG: &str = "-error";

/// Computes a stream's file name.
///
/// `"<prefix><tag>-<YYYYMMDD>.log"` with rotation, `"<prefix><tag>.log"` without.
#[must_use]
pub fn file_name(prefix: &str, tag: &str, date_stamp: &str, daily: bool) -> String {
    if daily {
        format!("{prefix}{tag}-{date_stamp}.log")
    } else {
        format!("{prefix}{tag}.log")
    }
}

/// One output stream: at most one open handle, plus the name it was opened for.
#[derive(Debug, Default)]
struct StreamFile {
    handle: Option<BufWriter<File>>,
    current: Option<PathBuf>,
    opens: usize,
}

impl StreamFile {
    fn write_line(&mut self, path: PathBuf, line: &str) -> Result<(), LogError> {
        if self.handle.is_none() || self.current.as_deref() != Some(path.as_path()) {
            self.reopen(path)?;
        }

        let Some(writer) = self.handle.as_mut() else {
            return Ok(());
        };
        if let Err(source) = writeln!(writer, "{line}") {
            self.handle = None;
            return Err(LogError::Write {
                path: self.current.clone().unwrap_or_default(),
                source,
            });
        }
        Ok(())
    }

    /// Closes the current handle (if any) and opens `path` in append mode.
    fn reopen(&mut self, path: PathBuf) -> Result<(), LogError> {
        if let Err(e) = self.close() {
            report(&e);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(source) = fs::create_dir_all(parent)
        {
            // Still attempt the open; it reports the definitive failure.
            report(&LogError::CreateDir {
                path: parent.to_path_buf(),
                source,
            });
        }

        self.current = Some(path.clone());
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open { path, source })?;
        self.handle = Some(BufWriter::new(file));
        self.opens += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LogError> {
        let Some(writer) = self.handle.as_mut() else {
            return Ok(());
        };
        if let Err(source) = writer.flush() {
            self.handle = None;
            return Err(LogError::Write {
                path: self.current.clone().unwrap_or_default(),
                source,
            });
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), LogError> {
        let result = self.flush();
        self.handle = None;
        result
    }
}

/// Owns the main and error file handles.
///
/// Not internally synchronized: callers share it behind a single mutex, and
/// in async mode only the delivery worker ever takes that lock.
#[derive(Debug, Default)]
pub struct FileSink {
    main: StreamFile,
    error: StreamFile,
}

impl FileSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `record` to the main stream and, for error-and-above records with
    /// `error_file` on, to the error stream as well.
    ///
    /// Failures are reported on stderr and the record is not retried; the next
    /// record attempts a fresh open.
    pub fn write(&mut self, record: &LogRecord, cfg: &LoggerConfig) {
        if cfg.file_prefix.is_empty() {
            return;
        }

        let date = record.date_stamp();
        let main_path = file_name(&cfg.file_prefix, "", &date, cfg.daily_rotation);
        let line = formatter::line(
            &record.timestamp,
            record.level,
            &record.text,
            cfg.file_color,
            &cfg.time_format,
        );
        if let Err(e) = self.main.write_line(main_path.into(), &line) {
            report(&e);
        }

        if cfg.error_file && record.level.is_error_or_above() {
            let error_path = file_name(&cfg.file_prefix, ERROR_TAG, &date, cfg.daily_rotation);
            let plain = if cfg.file_color {
                formatter::line(
                    &record.timestamp,
                    record.level,
                    &record.text,
                    false,
                    &cfg.time_format,
                )
            } else {
                line
            };
            if let Err(e) = self.error.write_line(error_path.into(), &plain) {
                report(&e);
            }
        }
    }

    /// Pushes buffered lines of both streams to the OS.
    pub fn flush(&mut self) {
        for stream in [&mut self.main, &mut self.error] {
            if let Err(e) = stream.flush() {
                report(&e);
            }
        }
    }

    /// Path the main stream was last opened for.
    #[must_use]
    pub fn main_path(&self) -> Option<&Path> {
        self.main.current.as_deref()
    }

    /// Path the error stream was last opened for.
    #[must_use]
    pub fn error_path(&self) -> Option<&Path> {
        self.error.current.as_deref()
    }

    #[must_use]
    pub fn main_is_open(&self) -> bool {
        self.main.handle.is_some()
    }
}
