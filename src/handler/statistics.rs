use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing ingestion since the handler was created
#[derive(Debug, Default)]
pub struct IngestStatistics {
    /// Market data messages (W and X) received
    messages: AtomicU64,

    /// Records written to the trade store
    records_stored: AtomicU64,

    /// Market data messages that yielded no entries
    empty_batches: AtomicU64,

    /// Market data request rejects (Y) received
    rejects: AtomicU64,

    /// Batches the sink failed to persist
    persistence_failures: AtomicU64,
}

impl IngestStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_batch(&self, stored: usize) {
        self.messages.fetch_add(1, Ordering::Relaxed);
        if stored == 0 {
            self.empty_batches.fetch_add(1, Ordering::Relaxed);
        } else {
            self.records_stored
                .fetch_add(stored as u64, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_reject(&self) {
        self.rejects.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_persistence_failure(&self) {
        self.persistence_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn messages(&self) -> u64 {
        self.messages.load(Ordering::Relaxed)
    }

    pub fn records_stored(&self) -> u64 {
        self.records_stored.load(Ordering::Relaxed)
    }

    pub fn empty_batches(&self) -> u64 {
        self.empty_batches.load(Ordering::Relaxed)
    }

    pub fn rejects(&self) -> u64 {
        self.rejects.load(Ordering::Relaxed)
    }

    pub fn persistence_failures(&self) -> u64 {
        self.persistence_failures.load(Ordering::Relaxed)
    }
}

impl fmt::Display for IngestStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IngestStatistics:messages={};records_stored={};empty_batches={};rejects={};persistence_failures={}",
            self.messages(),
            self.records_stored(),
            self.empty_batches(),
            self.rejects(),
            self.persistence_failures()
        )
    }
}
