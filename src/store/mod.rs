//! In-memory market data state: the ring buffer trade store and its subscription registry.

mod record;
mod snapshot;
mod subscription;
mod trade_store;

pub use record::Record;
pub use snapshot::TradeStoreSnapshot;
pub use subscription::Subscription;
pub use trade_store::TradeStore;
