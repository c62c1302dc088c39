//! Outbound persistence of market data batches.

mod rows;
mod sink;

pub use rows::{PersistBatch, PersistedRow};
pub use sink::{JsonLinesSink, MarketDataSink};
