use std::{
    io,
    sync::{Arc, Mutex, RwLock, mpsc::Receiver},
    thread::{self, JoinHandle},
};

use crate::log::{
    file_sink::FileSink,
    log_record::LogRecord,
    logger_config::LoggerConfig,
    utils::{lock, read},
};

pub const WORKER_THREAD_NAME: &str = "zlog-delivery";

/// Background consumer of the delivery queue.
///
/// It is the only writer to the file sink while the logger runs in async mode.
/// The loop ends once every producer handle has been dropped and the queue is
/// empty; nothing waits for that to happen.
pub struct DeliveryWorker {
    rx: Receiver<LogRecord>,
    sink: Arc<Mutex<FileSink>>,
    config: Arc<RwLock<LoggerConfig>>,
    batch_limit: usize,
}

impl DeliveryWorker {
    /// `batch_limit` bounds how many records are handled per wake-up; the
    /// queue capacity is the natural choice.
    pub fn new(
        rx: Receiver<LogRecord>,
        sink: Arc<Mutex<FileSink>>,
        config: Arc<RwLock<LoggerConfig>>,
        batch_limit: usize,
    ) -> Self {
        Self {
            rx,
            sink,
            config,
            batch_limit: batch_limit.max(1),
        }
    }

    /// Runs the worker on its own named thread.
    ///
    /// # Errors
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || self.run())
    }

    pub fn run(self) {
        let mut batch: Vec<LogRecord> = Vec::with_capacity(self.batch_limit.min(256));

        while let Ok(first) = self.rx.recv() {
            batch.push(first);
            // Take what is already buffered so a burst costs one wake-up.
            while batch.len() < self.batch_limit {
                match self.rx.try_recv() {
                    Ok(rec) => batch.push(rec),
                    Err(_) => break,
                }
            }
            self.deliver(&mut batch);
        }
    }

    fn deliver(&self, batch: &mut Vec<LogRecord>) {
        // Prefix and flags are read at write time so reconfiguration applies
        // to records still in flight.
        let cfg = read(&self.config).clone();
        let mut sink = lock(&self.sink);
        for rec in batch.drain(..) {
            sink.write(&rec, &cfg);
        }
        sink.flush();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{delivery_queue::DeliveryQueue, log_level::LogLevel};
    use chrono::Local;
    use std::{fs, path::Path, sync::mpsc::TrySendError};

    fn shared(prefix: &Path) -> (Arc<Mutex<FileSink>>, Arc<RwLock<LoggerConfig>>) {
        let cfg = LoggerConfig::default()
            .with_file_prefix(prefix.to_string_lossy())
            .with_daily_rotation(false);
        (
            Arc::new(Mutex::new(FileSink::new())),
            Arc::new(RwLock::new(cfg)),
        )
    }

    fn rec(i: usize) -> LogRecord {
        LogRecord::new(LogLevel::Info, format!("msg-{i}"), Local::now())
    }

    fn messages(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| l.rsplit(' ').next().unwrap().to_string())
            .collect()
    }

    #[test]
    fn drops_newest_when_full_and_keeps_queued_records() {
        let tmp = tempfile::tempdir().unwrap();
        let (sink, cfg) = shared(&tmp.path().join("app"));
        let cap = 8;
        let (q, rx) = DeliveryQueue::bounded(cap);

        // Worker not started yet: the queue saturates.
        for i in 0..cap {
            q.try_enqueue(rec(i)).expect("fits");
        }
        match q.try_enqueue(rec(cap)) {
            Err(TrySendError::Full(r)) => assert_eq!(r.text, format!("msg-{cap}")),
            other => panic!("expected Full, got: {other:?}"),
        }

        let handle = DeliveryWorker::new(rx, sink, cfg, cap).spawn().unwrap();
        drop(q);
        handle.join().unwrap();

        let got = messages(&tmp.path().join("app.log"));
        let want: Vec<_> = (0..cap).map(|i| format!("msg-{i}")).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn single_producer_order_is_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        let (sink, cfg) = shared(&tmp.path().join("app"));
        let (q, rx) = DeliveryQueue::bounded(1024);
        let handle = DeliveryWorker::new(rx, sink, cfg, 16).spawn().unwrap();

        for i in 0..500 {
            q.try_enqueue(rec(i)).expect("queue never saturates here");
        }
        drop(q);
        handle.join().unwrap();

        let got = messages(&tmp.path().join("app.log"));
        let want: Vec<_> = (0..500).map(|i| format!("msg-{i}")).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn worker_thread_is_named() {
        let tmp = tempfile::tempdir().unwrap();
        let (sink, cfg) = shared(&tmp.path().join("app"));
        let (q, rx) = DeliveryQueue::bounded(1);
        let handle = DeliveryWorker::new(rx, sink, cfg, 1).spawn().unwrap();
        assert_eq!(handle.thread().name(), Some(WORKER_THREAD_NAME));
        drop(q);
        handle.join().unwrap();
    }
}
