use crate::parser::{EntryPosition, MdEntry};
use crate::protocol::{EntryCategory, MdEntryType};
use serde::{Deserialize, Serialize};

/// One market data message handed to a sink: its entries plus batch metadata.
#[derive(Debug, Clone, Copy)]
pub struct PersistBatch<'a> {
    pub entries: &'a [MdEntry<'a>],
    /// MsgSeqNum of the carrying message, as text.
    pub seq_num: &'a str,
    pub is_snapshot: bool,
}

impl PersistBatch<'_> {
    /// Rows for every entry with a known type, in entry order. Entries with an
    /// unknown type code are skipped.
    pub fn rows(&self) -> impl Iterator<Item = PersistedRow> + '_ {
        let seq_num = parse_int(self.seq_num);
        self.entries
            .iter()
            .filter_map(move |entry| PersistedRow::from_entry(entry, seq_num, self.is_snapshot))
    }
}

/// Non-numeric text reads as 0.
fn parse_int(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

/// A stored row, shaped by the entry's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "table", rename_all = "snake_case")]
pub enum PersistedRow {
    /// Bid or offer level.
    OrderBook {
        symbol: String,
        /// `"bid"` or `"offer"`.
        side: String,
        price: String,
        size: String,
        position: i64,
        seq_num: i64,
        request_id: String,
        is_snapshot: bool,
    },
    Trade {
        symbol: String,
        price: String,
        size: String,
        aggressor_side: String,
        trade_time: String,
        seq_num: i64,
        request_id: String,
        is_snapshot: bool,
    },
    /// Open, close, high, low or volume; `value` is the size for volume and
    /// the price otherwise.
    Ohlcv {
        symbol: String,
        data_type: String,
        value: String,
        entry_time: String,
        seq_num: i64,
        request_id: String,
    },
}

impl PersistedRow {
    pub fn from_entry(entry: &MdEntry<'_>, seq_num: i64, is_snapshot: bool) -> Option<Self> {
        let kind = entry.kind()?;
        let symbol = entry.symbol.to_string();
        let request_id = entry.request_id.to_string();

        let row = match kind.category() {
            EntryCategory::BookLevel => PersistedRow::OrderBook {
                symbol,
                side: if kind == MdEntryType::Bid { "bid" } else { "offer" }.to_string(),
                price: entry.price.to_string(),
                size: entry.size.to_string(),
                position: match entry.position {
                    EntryPosition::Explicit(text) => parse_int(text),
                    EntryPosition::Implied(rank) => i64::from(rank),
                    EntryPosition::Absent => 0,
                },
                seq_num,
                request_id,
                is_snapshot,
            },
            EntryCategory::Trade => PersistedRow::Trade {
                symbol,
                price: entry.price.to_string(),
                size: entry.size.to_string(),
                aggressor_side: entry.aggressor.to_string(),
                trade_time: entry.entry_time.to_string(),
                seq_num,
                request_id,
                is_snapshot,
            },
            EntryCategory::Ohlcv => PersistedRow::Ohlcv {
                symbol,
                data_type: kind.name().to_lowercase(),
                value: if kind == MdEntryType::Volume {
                    entry.size
                } else {
                    entry.price
                }
                .to_string(),
                entry_time: entry.entry_time.to_string(),
                seq_num,
                request_id,
            },
        };
        Some(row)
    }

    pub fn category(&self) -> EntryCategory {
        match self {
            PersistedRow::OrderBook { .. } => EntryCategory::BookLevel,
            PersistedRow::Trade { .. } => EntryCategory::Trade,
            PersistedRow::Ohlcv { .. } => EntryCategory::Ohlcv,
        }
    }
}
