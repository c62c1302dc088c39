use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Generates unique, reproducible identifiers for outbound requests.
///
/// Each call hashes a monotonically increasing counter into the configured
/// namespace (UUID v5), so two generators built on the same namespace produce the
/// same sequence while a single generator never repeats itself. Safe to share
/// between threads.
#[derive(Debug)]
pub struct UuidGenerator {
    namespace: Uuid,
    counter: AtomicU64,
}

impl UuidGenerator {
    /// Creates a generator over `namespace`, starting at counter 0.
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the next identifier in the sequence.
    pub fn next(&self) -> Uuid {
        let counter = self.counter.fetch_add(1, Ordering::SeqCst);
        Uuid::new_v5(&self.namespace, counter.to_string().as_bytes())
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}
