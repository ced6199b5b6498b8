use std::{
    fs,
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use chrono::Local;
use zlog::{
    LogLevel, LogSink, Logger, LoggerConfig, NoopLogSink, logger_debug, logger_error, logger_info,
    logger_warning,
};

#[derive(Clone, Default)]
struct Console(Arc<Mutex<Vec<u8>>>);

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("console lock").extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Console {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().expect("console lock").clone();
        String::from_utf8(bytes)
            .expect("utf8")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn today() -> String {
    Local::now().format("%Y%m%d").to_string()
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

fn wait_for_lines(path: &Path, n: usize) -> Vec<String> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let lines = read_lines(path);
        if lines.len() >= n || Instant::now() > deadline {
            return lines;
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn sync_out_prefix_scenario() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let console = Console::default();
    let logger = Logger::with_console(
        LoggerConfig::default()
            .with_file_prefix(tmp.path().join("out").to_string_lossy())
            .with_daily_rotation(true)
            .with_async(false)
            .with_threshold(LogLevel::Info),
        Box::new(console.clone()),
        false,
    );

    logger_error!(logger, "cannot bind {}", 8080);
    logger_debug!(logger, "socket options {:?}", [1, 2]);

    let lines = read_lines(&tmp.path().join(format!("out-{}.log", today())));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[E] pipeline.rs:"));
    assert!(lines[0].ends_with("cannot bind 8080"));

    let shown = console.lines();
    assert_eq!(shown.len(), 2);
    assert!(shown[1].contains("[D] pipeline.rs:"));
}

#[test]
fn macro_reports_its_own_line() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let logger = Logger::with_console(
        LoggerConfig::default()
            .with_console(false)
            .with_daily_rotation(false)
            .with_file_prefix(tmp.path().join("site").to_string_lossy()),
        Box::new(io::sink()),
        false,
    );

    let line = line!() + 1;
    logger_warning!(logger, "here");

    let lines = read_lines(&tmp.path().join("site.log"));
    assert!(lines[0].ends_with(&format!("[W] pipeline.rs:{line} here")));
}

#[test]
fn joined_argument_form() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let logger = Logger::with_console(
        LoggerConfig::default()
            .with_console(false)
            .with_daily_rotation(false)
            .with_file_prefix(tmp.path().join("join").to_string_lossy()),
        Box::new(io::sink()),
        false,
    );

    let i = 42;
    logger_info!(logger; i, "hahaha", 1.5);

    let lines = read_lines(&tmp.path().join("join.log"));
    assert!(lines[0].ends_with(" 42 hahaha 1.5"));
}

#[test]
fn async_with_error_file_and_color() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let logger = Logger::with_console(
        LoggerConfig::default()
            .with_console(false)
            .with_async(true)
            .with_error_file(true)
            .with_file_color(true)
            .with_threshold(LogLevel::Debug)
            .with_file_prefix(tmp.path().join("logs/abc").to_string_lossy()),
        Box::new(io::sink()),
        false,
    );

    for i in 0..50 {
        logger_debug!(logger, "{i} debug");
        logger_info!(logger, "{i} info");
        logger_error!(logger, "{i} error");
    }

    let main = wait_for_lines(&tmp.path().join(format!("logs/abc-{}.log", today())), 150);
    let err = wait_for_lines(
        &tmp.path().join(format!("logs/abc-error-{}.log", today())),
        50,
    );
    assert_eq!(main.len(), 150);
    assert_eq!(err.len(), 50);
    assert!(main.iter().all(|l| l.contains('\x1b')));
    assert!(err.iter().all(|l| !l.contains('\x1b') && l.ends_with("error")));
    assert!(err[0].ends_with("0 error") && err[49].ends_with("49 error"));
}

#[test]
fn below_threshold_reaches_console_only() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let console = Console::default();
    let logger = Logger::with_console(
        LoggerConfig::default()
            .with_threshold(LogLevel::Error)
            .with_daily_rotation(false)
            .with_file_prefix(tmp.path().join("t").to_string_lossy()),
        Box::new(console.clone()),
        false,
    );

    logger_info!(logger, "chatter");

    assert!(!tmp.path().join("t.log").exists());
    assert_eq!(console.lines().len(), 1);
    assert!(console.lines()[0].ends_with("chatter"));
}

#[test]
fn works_behind_dyn_log_sink() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let sink: Arc<dyn LogSink> = Arc::new(Logger::with_console(
        LoggerConfig::default()
            .with_console(false)
            .with_daily_rotation(false)
            .with_file_prefix(tmp.path().join("dyn").to_string_lossy()),
        Box::new(io::sink()),
        false,
    ));
    let noop: Arc<dyn LogSink> = Arc::new(NoopLogSink);

    logger_info!(sink, "through the trait");
    logger_info!(noop, "into the void");

    let lines = read_lines(&tmp.path().join("dyn.log"));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("through the trait"));
}
