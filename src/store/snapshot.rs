use crate::config::MAX_RING_CAPACITY;
use crate::errors::FixMdError;
use crate::store::record::Record;
use crate::store::subscription::Subscription;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Point-in-time copy of a trade store: live records oldest first plus the registry.
///
/// `digest` is a SHA-256 over the ring contents, field by field, so a restore
/// can tell a damaged file from a good one. It is not a signature: anyone can
/// recompute it, which is why [`TradeStoreSnapshot::validate`] also checks the
/// ring shape before a store is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStoreSnapshot {
    /// Ring capacity of the captured store.
    pub capacity: usize,
    /// Lifetime insert counter at capture time.
    pub total_inserted: u64,
    /// Live records, oldest first.
    pub records: Vec<Record>,
    /// Registered subscriptions, ordered by request id.
    pub subscriptions: Vec<Subscription>,
    /// Hex SHA-256 of the fields above.
    pub digest: String,
}

fn feed_text(hasher: &mut Sha256, text: &str) {
    hasher.update((text.len() as u64).to_le_bytes());
    hasher.update(text.as_bytes());
}

fn feed_flag(hasher: &mut Sha256, flag: bool) {
    hasher.update([u8::from(flag)]);
}

impl TradeStoreSnapshot {
    /// Builds a snapshot and stamps its digest.
    pub fn new(
        capacity: usize,
        total_inserted: u64,
        records: Vec<Record>,
        subscriptions: Vec<Subscription>,
    ) -> Self {
        let mut snapshot = Self {
            capacity,
            total_inserted,
            records,
            subscriptions,
            digest: String::new(),
        };
        snapshot.digest = snapshot.content_digest();
        snapshot
    }

    /// Hex SHA-256 over capacity, counters, every record and every subscription.
    ///
    /// Text fields are length-prefixed so adjacent fields cannot run together.
    pub fn content_digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.capacity as u64).to_le_bytes());
        hasher.update(self.total_inserted.to_le_bytes());

        hasher.update((self.records.len() as u64).to_le_bytes());
        for record in &self.records {
            hasher.update(record.timestamp.to_le_bytes());
            for text in [
                &record.symbol,
                &record.price,
                &record.size,
                &record.entry_time,
                &record.aggressor,
                &record.request_id,
                &record.entry_type,
                &record.position,
                &record.seq_num,
            ] {
                feed_text(&mut hasher, text);
            }
            feed_flag(&mut hasher, record.is_snapshot);
            feed_flag(&mut hasher, record.is_update);
        }

        hasher.update((self.subscriptions.len() as u64).to_le_bytes());
        for subscription in &self.subscriptions {
            feed_text(&mut hasher, &subscription.symbol);
            feed_text(&mut hasher, subscription.kind.as_code());
            feed_text(&mut hasher, &subscription.request_id);
            feed_flag(&mut hasher, subscription.active);
            feed_flag(&mut hasher, subscription.snapshot_received);
            hasher.update(subscription.total_updates.to_le_bytes());
            hasher.update(subscription.last_update.to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }

    /// Checks that the snapshot describes a ring this crate can rebuild.
    ///
    /// Capacity must be within `1..=MAX_RING_CAPACITY`, the live records must
    /// fit in it and cannot outnumber the lifetime counter, and the digest
    /// must match the contents.
    pub fn validate(&self) -> Result<(), FixMdError> {
        if self.capacity == 0 || self.capacity > MAX_RING_CAPACITY {
            return Err(FixMdError::DeserializationError {
                message: format!(
                    "snapshot capacity {} outside 1..={MAX_RING_CAPACITY}",
                    self.capacity
                ),
            });
        }
        if self.records.len() > self.capacity {
            return Err(FixMdError::DeserializationError {
                message: format!(
                    "snapshot holds {} records for capacity {}",
                    self.records.len(),
                    self.capacity
                ),
            });
        }
        if (self.records.len() as u64) > self.total_inserted {
            return Err(FixMdError::DeserializationError {
                message: format!(
                    "snapshot holds {} records but only {} were ever inserted",
                    self.records.len(),
                    self.total_inserted
                ),
            });
        }

        let computed = self.content_digest();
        if computed != self.digest {
            return Err(FixMdError::ChecksumMismatch {
                expected: self.digest.clone(),
                actual: computed,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, FixMdError> {
        serde_json::to_string(self).map_err(|error| FixMdError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Parses and validates a snapshot.
    pub fn from_json(data: &str) -> Result<Self, FixMdError> {
        let snapshot: Self =
            serde_json::from_str(data).map_err(|error| FixMdError::DeserializationError {
                message: error.to_string(),
            })?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

impl fmt::Display for TradeStoreSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeStoreSnapshot:capacity={};records={};subscriptions={};total_inserted={}",
            self.capacity,
            self.records.len(),
            self.subscriptions.len(),
            self.total_inserted
        )
    }
}
