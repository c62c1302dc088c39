use crate::protocol::SubscriptionKind;
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One market data request tracked by the registry.
///
/// Lives in the registry from submission until it is unsubscribed or rejected.
/// Callers only ever see copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Instrument symbol.
    pub symbol: String,
    /// Requested delivery mode.
    pub kind: SubscriptionKind,
    /// Client-generated MDReqID, the registry key.
    pub request_id: String,
    /// Always true while registered.
    pub active: bool,
    /// Set by the first snapshot batch and never cleared.
    pub snapshot_received: bool,
    /// Number of records delivered under this request.
    pub total_updates: u64,
    /// Millisecond time of registration or of the last delivery.
    pub last_update: u64,
}

impl Subscription {
    pub fn new(symbol: &str, kind: SubscriptionKind, request_id: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            kind,
            request_id: request_id.to_string(),
            active: true,
            snapshot_received: false,
            total_updates: 0,
            last_update: current_time_millis(),
        }
    }

    pub(crate) fn record_batch(&mut self, count: usize, is_snapshot: bool, now: u64) {
        self.last_update = now;
        self.total_updates += count as u64;
        if is_snapshot {
            self.snapshot_received = true;
        }
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}] updates={} snapshot={}",
            self.symbol,
            self.kind.description(),
            self.request_id,
            self.total_updates,
            if self.snapshot_received { "yes" } else { "no" }
        )
    }
}
