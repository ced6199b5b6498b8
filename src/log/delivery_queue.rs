use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use crate::log::log_record::LogRecord;

/// Producer side of the bounded queue between callers and the delivery worker.
///
/// [`try_enqueue`](Self::try_enqueue) never blocks: when the queue is at
/// capacity the new record is handed back and the caller drops it. Records
/// already queued are never evicted.
#[derive(Clone, Debug)]
pub struct DeliveryQueue {
    tx: SyncSender<LogRecord>,
    capacity: usize,
}

impl DeliveryQueue {
    /// Creates a queue holding at most `capacity` records (at least one) and
    /// returns the consuming end for the worker.
    #[must_use]
    pub fn bounded(capacity: usize) -> (Self, Receiver<LogRecord>) {
        let capacity = capacity.max(1);
        let (tx, rx) = mpsc::sync_channel(capacity);
        (Self { tx, capacity }, rx)
    }

    /// Attempts to enqueue `record` without blocking.
    ///
    /// # Errors
    /// - `TrySendError::Full` when the queue is at capacity; the record is not queued.
    /// - `TrySendError::Disconnected` when the worker is gone.
    pub fn try_enqueue(&self, record: LogRecord) -> Result<(), TrySendError<LogRecord>> {
        self.tx.try_send(record)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
