//! Order and quote tracking for the order-entry side of the session.

mod execution_report;
mod order;
mod order_store;

pub use execution_report::ExecutionReport;
pub use order::{Order, Quote};
pub use order_store::OrderStore;
