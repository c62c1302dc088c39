//! Fixed-capacity ring buffer of market data records with its subscription registry

use crate::errors::FixMdError;
use crate::parser::MdEntry;
use crate::protocol::SubscriptionKind;
use crate::store::record::Record;
use crate::store::snapshot::TradeStoreSnapshot;
use crate::store::subscription::Subscription;
use crate::utils::current_time_millis;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{info, trace, warn};

/// Ring buffer state plus the registry, guarded together by one lock.
#[derive(Debug)]
struct StoreState {
    /// Pre-allocated slots, `slots.len() == capacity` for the store's lifetime
    slots: Vec<Record>,

    /// Index of the oldest live slot
    head: usize,

    /// Number of live slots, never above capacity
    count: usize,

    /// Records inserted since construction, evicted ones included
    total_inserted: u64,

    /// Registry keyed by request id
    subscriptions: HashMap<String, Subscription>,
}

impl StoreState {
    fn with_slots(slots: Vec<Record>) -> Self {
        Self {
            slots,
            head: 0,
            count: 0,
            total_inserted: 0,
            subscriptions: HashMap::new(),
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot index of the `offset`-th live record, oldest first.
    #[inline]
    fn index(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Hands out the slot for the next write and advances the ring, evicting
    /// the oldest record when full.
    #[inline]
    fn claim_slot(&mut self) -> &mut Record {
        let capacity = self.capacity();
        let write_index = (self.head + self.count) % capacity;
        if self.count < capacity {
            self.count += 1;
        } else {
            self.head = (self.head + 1) % capacity;
        }
        self.total_inserted += 1;
        &mut self.slots[write_index]
    }

    /// Writes `items` in order, each into a freshly claimed slot filled by `fill`.
    ///
    /// The only way records enter the ring, for live inserts and restores alike.
    fn append_each<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        mut fill: impl FnMut(&mut Record, T),
    ) -> usize {
        let mut written = 0;
        for item in items {
            fill(self.claim_slot(), item);
            written += 1;
        }
        written
    }
}

/// Slots for a ring restored from outside input; allocation failure is an error, not an abort.
fn try_allocate_slots(capacity: usize) -> Result<Vec<Record>, FixMdError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|error| FixMdError::InvalidConfiguration {
            message: format!("cannot allocate {capacity} ring slots: {error}"),
        })?;
    slots.resize_with(capacity, Record::default);
    Ok(slots)
}

/// Concurrent store for market data records and the subscriptions that produce them.
///
/// Records live in a fixed array of `capacity` slots addressed by a `head`
/// index and a live `count`. Inserting into a full store overwrites the oldest
/// record, so capacity is never an error. The array is allocated once, and
/// slots are rewritten in place: after warm-up an insert copies bytes into
/// existing string buffers and allocates nothing.
///
/// Writers (inserts and registry mutations) take the lock exclusively, readers
/// share it. Every read returns owned copies; nothing inside the store is ever
/// handed out by reference.
///
/// # Examples
///
/// ```
/// use fixmd::{TradeStore, extract_entries};
///
/// let store = TradeStore::new(100);
/// let raw = "35=X\x01268=1\x01269=2\x01270=50000.00\x01271=0.5\x01";
/// let entries = extract_entries(raw, "BTC-USD", "req-1", false, "3").unwrap();
/// store.insert("BTC-USD", &entries, false, "req-1");
///
/// let recent = store.recent_by_symbol("BTC-USD", 10).unwrap();
/// assert_eq!(recent[0].price, "50000.00");
/// assert!(store.recent_by_symbol("ETH-USD", 10).is_none());
/// ```
#[derive(Debug)]
pub struct TradeStore {
    state: RwLock<StoreState>,
}

impl TradeStore {
    /// Creates a store holding at most `capacity` records.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            warn!("trade store capacity 0 requested, using 1");
            1
        } else {
            capacity
        };

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Record::default);

        Self {
            state: RwLock::new(StoreState::with_slots(slots)),
        }
    }

    /// Appends a batch of parsed entries, in order.
    ///
    /// Every record is stamped with the same timestamp (one clock read per
    /// call) and with `symbol`, `request_id` and the snapshot flag given here,
    /// which take precedence over whatever the parser set. When `request_id` is
    /// registered its counters are updated; an unknown id is not an error.
    ///
    /// Returns the number of records written.
    pub fn insert(
        &self,
        symbol: &str,
        entries: &[MdEntry<'_>],
        is_snapshot: bool,
        request_id: &str,
    ) -> usize {
        if entries.is_empty() {
            return 0;
        }

        let now = current_time_millis();
        let mut state = self.state.write();

        if let Some(subscription) = state.subscriptions.get_mut(request_id) {
            subscription.record_batch(entries.len(), is_snapshot, now);
        }

        let written = state.append_each(entries, |slot, entry| {
            slot.assign_from(entry, symbol, request_id, is_snapshot, now)
        });
        drop(state);

        trace!(symbol, request_id, count = written, "inserted market data records");
        written
    }

    /// Returns up to `limit` of the newest records for `symbol`, oldest first.
    ///
    /// `None` when the store is empty or holds no record for `symbol`. When
    /// matches exist but `limit` is 0 the result is `Some` and empty, so callers
    /// can tell "nothing to show" from "truncated to nothing".
    pub fn recent_by_symbol(&self, symbol: &str, limit: usize) -> Option<Vec<Record>> {
        let state = self.state.read();
        if state.count == 0 {
            return None;
        }

        // newest to oldest
        let newest_first = (0..state.count).rev().map(|offset| state.index(offset));

        let mut matches = 0;
        let mut any_match = false;
        for index in newest_first.clone() {
            if state.slots[index].symbol == symbol {
                any_match = true;
                if matches == limit {
                    break;
                }
                matches += 1;
            }
        }

        if !any_match {
            return None;
        }

        let mut recent = vec![Record::default(); matches];
        let mut remaining = matches;
        for index in newest_first {
            if remaining == 0 {
                break;
            }
            let slot = &state.slots[index];
            if slot.symbol == symbol {
                remaining -= 1;
                recent[remaining].clone_from(slot);
            }
        }

        Some(recent)
    }

    /// Returns every live record across all symbols, oldest first.
    ///
    /// `None` when the store is empty.
    pub fn all_records(&self) -> Option<Vec<Record>> {
        let state = self.state.read();
        if state.count == 0 {
            return None;
        }

        let mut records = Vec::with_capacity(state.count);
        for offset in 0..state.count {
            records.push(state.slots[state.index(offset)].clone());
        }
        Some(records)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.state.read().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of live records.
    pub fn capacity(&self) -> usize {
        self.state.read().capacity()
    }

    /// Records inserted since construction, including evicted ones.
    pub fn total_inserted(&self) -> u64 {
        self.state.read().total_inserted
    }

    /// Registers a subscription, replacing any previous one with the same request id.
    pub fn add_subscription(&self, symbol: &str, kind: SubscriptionKind, request_id: &str) {
        let subscription = Subscription::new(symbol, kind, request_id);
        self.state
            .write()
            .subscriptions
            .insert(request_id.to_string(), subscription);

        info!(symbol, kind = kind.description(), request_id, "added subscription");
    }

    /// Removes the subscription for `request_id`, returning it if present.
    pub fn remove_subscription_by_request_id(&self, request_id: &str) -> Option<Subscription> {
        let removed = self.state.write().subscriptions.remove(request_id);
        if let Some(subscription) = &removed {
            info!(
                symbol = %subscription.symbol,
                request_id,
                "removed subscription"
            );
        }
        removed
    }

    /// Removes every subscription for `symbol` and returns them.
    pub fn remove_subscriptions_by_symbol(&self, symbol: &str) -> Vec<Subscription> {
        let mut removed = Vec::new();
        {
            let mut state = self.state.write();
            state.subscriptions.retain(|_, subscription| {
                if subscription.symbol == symbol {
                    removed.push(subscription.clone());
                    false
                } else {
                    true
                }
            });
        }

        for subscription in &removed {
            info!(
                symbol,
                request_id = %subscription.request_id,
                total_updates = subscription.total_updates,
                "removed subscription"
            );
        }
        removed
    }

    /// Copy of the subscription registered under `request_id`.
    pub fn subscription(&self, request_id: &str) -> Option<Subscription> {
        self.state.read().subscriptions.get(request_id).cloned()
    }

    /// Copy of the whole registry, keyed by request id.
    pub fn subscription_snapshot(&self) -> HashMap<String, Subscription> {
        self.state.read().subscriptions.clone()
    }

    /// Copy of the registry grouped by symbol.
    pub fn subscriptions_grouped_by_symbol(&self) -> HashMap<String, Vec<Subscription>> {
        let state = self.state.read();
        let mut grouped: HashMap<String, Vec<Subscription>> = HashMap::new();
        for subscription in state.subscriptions.values() {
            grouped
                .entry(subscription.symbol.clone())
                .or_default()
                .push(subscription.clone());
        }
        grouped
    }

    /// Captures the live records (oldest first) and the registry.
    pub fn snapshot(&self) -> TradeStoreSnapshot {
        let state = self.state.read();
        let records = (0..state.count)
            .map(|offset| state.slots[state.index(offset)].clone())
            .collect();

        let mut subscriptions: Vec<Subscription> = state.subscriptions.values().cloned().collect();
        subscriptions.sort_by(|a, b| a.request_id.cmp(&b.request_id));

        TradeStoreSnapshot::new(state.capacity(), state.total_inserted, records, subscriptions)
    }

    /// Serializes a snapshot of the store to JSON.
    pub fn snapshot_to_json(&self) -> Result<String, FixMdError> {
        self.snapshot().to_json()
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// The snapshot is validated first (capacity bound, records fitting the
    /// ring, digest). Records are then replayed oldest first through the same
    /// slot-claiming path inserts use, and the lifetime counter and registry
    /// are carried over.
    pub fn restore(snapshot: TradeStoreSnapshot) -> Result<Self, FixMdError> {
        snapshot.validate()?;
        Self::rebuild(snapshot)
    }

    /// Parses, validates and restores a snapshot from JSON.
    pub fn from_snapshot_json(data: &str) -> Result<Self, FixMdError> {
        Self::rebuild(TradeStoreSnapshot::from_json(data)?)
    }

    fn rebuild(snapshot: TradeStoreSnapshot) -> Result<Self, FixMdError> {
        let mut state = StoreState::with_slots(try_allocate_slots(snapshot.capacity)?);
        let replayed = state.append_each(&snapshot.records, |slot, record| slot.clone_from(record));
        state.total_inserted = snapshot.total_inserted;
        state.subscriptions = snapshot
            .subscriptions
            .into_iter()
            .map(|subscription| (subscription.request_id.clone(), subscription))
            .collect();

        info!(
            capacity = snapshot.capacity,
            records = replayed,
            subscriptions = state.subscriptions.len(),
            "restored trade store"
        );
        Ok(Self {
            state: RwLock::new(state),
        })
    }
}

impl Default for TradeStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RING_CAPACITY)
    }
}
