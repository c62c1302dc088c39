//! Application message routing between the FIX engine and the stores.

mod inbound;
mod market_data;
mod statistics;

pub use inbound::{InboundMessage, RawMessage};
pub use market_data::{Handled, MarketDataHandler};
pub use statistics::IngestStatistics;
