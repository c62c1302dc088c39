use crate::parser::MdEntry;
use crate::protocol::MdEntryType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned market data entry as held by the trade store.
///
/// Despite the store's name this covers every entry type: book levels, trades
/// and OHLCV fields. Price and size keep the exchange's decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Arrival time in milliseconds since the Unix epoch, shared per batch.
    pub timestamp: u64,
    /// Instrument symbol, stamped by the store.
    pub symbol: String,
    /// Price as sent.
    pub price: String,
    /// Size as sent.
    pub size: String,
    /// Exchange entry time (tag 273).
    pub entry_time: String,
    /// Aggressor side label, empty for non-trade entries.
    pub aggressor: String,
    /// Request id of the subscription that delivered the entry.
    pub request_id: String,
    /// Raw MDEntryType code.
    pub entry_type: String,
    /// 1-based book position for bids and offers, empty otherwise.
    pub position: String,
    /// MsgSeqNum of the carrying message.
    pub seq_num: String,
    /// Delivered by a snapshot (W).
    pub is_snapshot: bool,
    /// Delivered by an incremental refresh (X).
    pub is_update: bool,
}

fn overwrite(slot: &mut String, value: &str) {
    slot.clear();
    slot.push_str(value);
}

impl Record {
    /// The interpreted entry type, if the code is known.
    pub fn kind(&self) -> Option<MdEntryType> {
        MdEntryType::from_code(&self.entry_type)
    }

    /// Rewrites this record from a parsed entry, reusing the existing string
    /// buffers. Symbol, request id, flags and timestamp come from the caller,
    /// not from the entry.
    pub(crate) fn assign_from(
        &mut self,
        entry: &MdEntry<'_>,
        symbol: &str,
        request_id: &str,
        is_snapshot: bool,
        timestamp: u64,
    ) {
        self.timestamp = timestamp;
        overwrite(&mut self.symbol, symbol);
        overwrite(&mut self.price, entry.price);
        overwrite(&mut self.size, entry.size);
        overwrite(&mut self.entry_time, entry.entry_time);
        overwrite(&mut self.aggressor, entry.aggressor);
        overwrite(&mut self.request_id, request_id);
        overwrite(&mut self.entry_type, entry.entry_type);
        self.position.clear();
        entry.position.write_to(&mut self.position);
        overwrite(&mut self.seq_num, entry.seq_num);
        self.is_snapshot = is_snapshot;
        self.is_update = !is_snapshot;
    }
}

impl From<&MdEntry<'_>> for Record {
    fn from(entry: &MdEntry<'_>) -> Self {
        let mut record = Record::default();
        record.assign_from(
            entry,
            entry.symbol,
            entry.request_id,
            entry.is_snapshot,
            entry.timestamp,
        );
        record
    }
}

/// One-line rendering used for streaming updates.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = &self.symbol;
        let code = if self.entry_type.is_empty() {
            "2"
        } else {
            self.entry_type.as_str()
        };

        match MdEntryType::from_code(code) {
            Some(side @ (MdEntryType::Bid | MdEntryType::Offer)) => write!(
                f,
                "{symbol} {side}: {} | Size: {} | Pos: {}",
                self.price, self.size, self.position
            ),
            Some(MdEntryType::Trade) => {
                let aggressor = if self.aggressor.is_empty() {
                    "-"
                } else {
                    self.aggressor.as_str()
                };
                write!(
                    f,
                    "{symbol} Trade: {} | Size: {} | Aggressor: {aggressor}",
                    self.price, self.size
                )
            }
            Some(MdEntryType::Volume) => write!(f, "{symbol} Volume: {}", self.size),
            Some(field) => write!(f, "{symbol} {field}: {}", self.price),
            None => write!(
                f,
                "{symbol} [{code}]: {} | Size: {}",
                self.price, self.size
            ),
        }
    }
}
