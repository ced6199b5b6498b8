use crate::log::{
    call_site::CallSite,
    delivery_queue::DeliveryQueue,
    delivery_worker::DeliveryWorker,
    file_sink::FileSink,
    formatter,
    log_level::LogLevel,
    log_record::LogRecord,
    log_sink::LogSink,
    logger_config::LoggerConfig,
    utils::{lock, read, write},
};

use chrono::{DateTime, Local};
use std::{
    fmt::{self, Display},
    io::{self, IsTerminal, Write},
    sync::{Arc, Mutex, RwLock},
    thread::JoinHandle,
};

/// Leveled logger with console output and date-rotated files.
///
/// # Architecture
///
/// 1. **Producers**: Application threads call [`log_at`](Self::log_at) (usually via the
///    `logger_*!` macros). The console line is written immediately, under a lock.
/// 2. **Gate**: Records less severe than the threshold, or any record while the
///    file prefix is empty, stop here.
/// 3. **Queue**: In async mode, a bounded `mpsc` channel buffers records. When it
///    is full the new record is dropped; the caller never blocks.
/// 4. **Consumer**: A dedicated background thread drains the queue in batches and
///    writes through the [`FileSink`], flushing once per batch.
///
/// In sync mode the caller writes through the same `FileSink`, serialized by its
/// mutex. Nothing in this pipeline returns an error to the caller.
pub struct Logger {
    config: Arc<RwLock<LoggerConfig>>,
    sink: Arc<Mutex<FileSink>>,
    /// `None` only if the worker thread could not be spawned.
    queue: Option<DeliveryQueue>,
    console: Mutex<Box<dyn Write + Send>>,
    console_color: bool,
    _worker: Option<JoinHandle<()>>,
}

impl Logger {
    /// Builds a logger that prints to stdout, colored when stdout is a terminal.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let color = io::stdout().is_terminal();
        Self::with_console(config, Box::new(io::stdout()), color)
    }

    /// Builds a logger printing console lines to `console`.
    ///
    /// The delivery worker is started here, whatever the initial mode, so that
    /// async mode can be switched on later through [`configure`](Self::configure).
    /// The queue capacity is taken from `config` and cannot change afterwards.
    #[must_use]
    pub fn with_console(config: LoggerConfig, console: Box<dyn Write + Send>, color: bool) -> Self {
        let capacity = config.queue_capacity.max(1);
        let config = Arc::new(RwLock::new(LoggerConfig {
            queue_capacity: capacity,
            ..config
        }));
        let sink = Arc::new(Mutex::new(FileSink::new()));

        let (queue, rx) = DeliveryQueue::bounded(capacity);
        let worker = DeliveryWorker::new(rx, Arc::clone(&sink), Arc::clone(&config), capacity);
        let (queue, worker) = match worker.spawn() {
            Ok(handle) => (Some(queue), Some(handle)),
            Err(e) => {
                eprintln!("zlog: cannot start delivery worker, writing synchronously: {e}");
                (None, None)
            }
        };

        Self {
            config,
            sink,
            queue,
            console: Mutex::new(console),
            console_color: color,
            _worker: worker,
        }
    }

    /// Logs `message` as coming from `site`.
    ///
    /// Returns once the console line is printed and the record is either
    /// written (sync mode), queued, or dropped because the queue is full.
    pub fn log_at(&self, level: LogLevel, site: CallSite, message: fmt::Arguments<'_>) {
        let now = Local::now();
        let text = formatter::render(level, &site, message);

        // Snapshot so that no config lock is held across console or disk I/O.
        let cfg = read(&self.config).clone();
        if cfg.console {
            self.print_console(&now, level, &text, &cfg.time_format);
        }
        if !cfg.files_accept(level) {
            return;
        }

        let record = LogRecord::new(level, text, now);
        if cfg.async_mode
            && let Some(queue) = &self.queue
        {
            // Full or disconnected: the record is dropped without a report.
            let _ = queue.try_enqueue(record);
            return;
        }

        let mut sink = lock(&self.sink);
        sink.write(&record, &cfg);
        sink.flush();
    }

    /// Logs `message` at `level`, attributing it to the caller.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
        self.log_at(level, CallSite::caller(), message);
    }

    #[track_caller]
    pub fn emergency(&self, msg: impl Display) {
        self.log_at(LogLevel::Emergency, CallSite::caller(), format_args!("{msg}"));
    }

    #[track_caller]
    pub fn alert(&self, msg: impl Display) {
        self.log_at(LogLevel::Alert, CallSite::caller(), format_args!("{msg}"));
    }

    #[track_caller]
    pub fn critical(&self, msg: impl Display) {
        self.log_at(LogLevel::Critical, CallSite::caller(), format_args!("{msg}"));
    }

    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        self.log_at(LogLevel::Error, CallSite::caller(), format_args!("{msg}"));
    }

    #[track_caller]
    pub fn warning(&self, msg: impl Display) {
        self.log_at(LogLevel::Warning, CallSite::caller(), format_args!("{msg}"));
    }

    #[track_caller]
    pub fn notice(&self, msg: impl Display) {
        self.log_at(LogLevel::Notice, CallSite::caller(), format_args!("{msg}"));
    }

    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        self.log_at(LogLevel::Info, CallSite::caller(), format_args!("{msg}"));
    }

    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        self.log_at(LogLevel::Debug, CallSite::caller(), format_args!("{msg}"));
    }

    /// Whether a record at `level` would reach at least one sink.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        let cfg = read(&self.config);
        cfg.console || cfg.files_accept(level)
    }

    /// Replaces the configuration. Records already queued are written with the
    /// new settings. `queue_capacity` keeps the value the logger was built with.
    pub fn configure(&self, config: LoggerConfig) {
        let mut cfg = write(&self.config);
        let capacity = cfg.queue_capacity;
        *cfg = LoggerConfig {
            queue_capacity: capacity,
            ..config
        };
    }

    /// Applies `f` to the current configuration in place.
    pub fn update_config(&self, f: impl FnOnce(&mut LoggerConfig)) {
        let mut next = self.config();
        f(&mut next);
        self.configure(next);
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        read(&self.config).clone()
    }

    /// Flushes the console and whatever the file sink has buffered.
    ///
    /// This does not wait for records still in the delivery queue.
    pub fn flush(&self) {
        let _ = lock(&self.console).flush();
        lock(&self.sink).flush();
    }

    fn print_console(&self, ts: &DateTime<Local>, level: LogLevel, text: &str, time_format: &str) {
        let line = formatter::line(ts, level, text, self.console_color, time_format);
        let mut out = lock(&self.console);
        let _ = writeln!(out, "{line}").and_then(|()| out.flush());
    }
}

impl LogSink for Logger {
    #[inline]
    fn log_at(&self, level: LogLevel, site: CallSite, message: fmt::Arguments<'_>) {
        Logger::log_at(self, level, site, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*read(&self.config))
            .field("async_available", &self.queue.is_some())
            .finish_non_exhaustive()
    }
}
