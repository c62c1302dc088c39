#![allow(unknown_lints)]
#![allow(clippy::literal_string_with_formatting_args)]

//!  # fixmd
//!
//!  The ingestion core of a FIX market data client. Market data messages are
//!  parsed straight from their raw `TAG=VALUE<SOH>` text, without building an
//!  intermediate field map, and land in a fixed-capacity ring buffer that
//!  never grows and never allocates once warm.
//!
//!  ## Features
//!
//!  - Single-pass parsing of repeating-group entries (`269=` onwards) into
//!    borrowed [`MdEntry`] views, with one exact-size allocation per message
//!  - A [`TradeStore`] ring buffer with overwrite-oldest eviction, symbol
//!    filtered reads and a subscription registry under one reader/writer lock
//!  - Prices and sizes kept as exchange text, never as binary floats
//!  - An [`OrderStore`] for orders and quotes, merged from execution reports
//!  - Checksum-protected JSON snapshots of the trade store
//!  - A [`MarketDataSink`] seam for persistence, with a JSON-lines sink that
//!    writes each message as one all-or-nothing batch
//!
//!  ## Data Flow
//!
//!  raw message → [`find_entry_boundaries`] → one segment per entry →
//!  [`parse_entry`] → `Vec<MdEntry>` → [`TradeStore::insert`] → sink.
//!
//!  The [`MarketDataHandler`] wires these steps together for messages coming
//!  out of a FIX engine through the [`InboundMessage`] trait. Persistence runs
//!  after the store lock is released; a failing sink is logged and counted but
//!  never stalls ingestion.
//!
//!  ## Read Semantics
//!
//!  [`TradeStore::recent_by_symbol`] and [`TradeStore::all_records`] return
//!  `None` when there is nothing to show (an empty store, or no record for the
//!  symbol) and `Some` otherwise. A zero `limit` with matching records yields
//!  `Some` of an empty vector. Every read returns owned copies.
//!
//!  ## Example
//!
//!  ```
//!  use std::sync::Arc;
//!  use fixmd::{Handled, MarketDataHandler, OrderStore, RawMessage, SubscriptionKind, TradeStore};
//!
//!  let handler = MarketDataHandler::new(Arc::new(TradeStore::new(1_000)), Arc::new(OrderStore::new()));
//!  let request_id = handler.register_request(&["BTC-USD"], SubscriptionKind::SnapshotPlusUpdates);
//!
//!  let message = RawMessage::from_fields(&[
//!      (35, "W"),
//!      (34, "2"),
//!      (262, request_id.as_str()),
//!      (55, "BTC-USD"),
//!      (268, "1"),
//!      (269, "2"),
//!      (270, "50000.00"),
//!      (271, "0.25"),
//!      (2446, "1"),
//!  ]);
//!
//!  assert_eq!(handler.on_message(&message), Handled::MarketData { stored: 1 });
//!  let trades = handler.trade_store().recent_by_symbol("BTC-USD", 10).unwrap();
//!  assert_eq!(trades[0].aggressor, "Buy");
//!  ```
//!
//!  ## Configuration
//!
//!  [`FixMdConfig::from_env`] reads `FIXMD_RING_CAPACITY` (default 10,000) and
//!  `FIXMD_PERSIST_PATH`. Logging goes through `tracing`; [`setup_logger`]
//!  installs a formatter whose level comes from `LOGLEVEL`.
//!

mod config;
mod errors;
mod handler;
mod orders;
mod parser;
mod persistence;
mod protocol;
mod store;
mod utils;

pub use config::{
    DEFAULT_RING_CAPACITY, ENV_PERSIST_PATH, ENV_RING_CAPACITY, FixMdConfig, MAX_RING_CAPACITY,
};
pub use errors::FixMdError;
pub use handler::{Handled, InboundMessage, IngestStatistics, MarketDataHandler, RawMessage};
pub use orders::{ExecutionReport, Order, OrderStore, Quote};
pub use parser::{
    EntryPosition, MdEntry, entry_end, extract_entries, extract_field_value, field_value,
    find_entry_boundaries, parse_entry, parse_entry_multi_pass,
};
pub use persistence::{JsonLinesSink, MarketDataSink, PersistBatch, PersistedRow};
pub use protocol::{
    ENTRY_MARKER, EntryCategory, MSG_TYPE_BUSINESS_REJECT, MSG_TYPE_EXECUTION_REPORT,
    MSG_TYPE_MARKET_DATA_INCREMENTAL, MSG_TYPE_MARKET_DATA_REJECT, MSG_TYPE_MARKET_DATA_SNAPSHOT,
    MSG_TYPE_QUOTE, MSG_TYPE_REJECT, MdEntryType, SOH, SubscriptionKind, aggressor_label,
    is_open_order_status, md_reject_reason_description, tags,
};
pub use store::{Record, Subscription, TradeStore, TradeStoreSnapshot};
pub use utils::{UuidGenerator, current_time_millis, setup_logger};
