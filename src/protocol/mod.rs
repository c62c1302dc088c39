//! FIX wire constants and the code tables the client interprets.

mod codes;
mod entry_type;
mod subscription_kind;
pub mod tags;

pub use codes::{aggressor_label, is_open_order_status, md_reject_reason_description};
pub use entry_type::{EntryCategory, MdEntryType};
pub use subscription_kind::SubscriptionKind;

/// FIX field delimiter (SOH).
pub const SOH: u8 = 0x01;

/// Tag prefix that opens every market data repeating-group entry.
pub const ENTRY_MARKER: &str = "269=";

/// Market Data Snapshot/Full Refresh.
pub const MSG_TYPE_MARKET_DATA_SNAPSHOT: &str = "W";
/// Market Data Incremental Refresh.
pub const MSG_TYPE_MARKET_DATA_INCREMENTAL: &str = "X";
/// Market Data Request Reject.
pub const MSG_TYPE_MARKET_DATA_REJECT: &str = "Y";
/// Execution Report.
pub const MSG_TYPE_EXECUTION_REPORT: &str = "8";
/// Quote.
pub const MSG_TYPE_QUOTE: &str = "S";
/// Session-level Reject.
pub const MSG_TYPE_REJECT: &str = "3";
/// Business Message Reject.
pub const MSG_TYPE_BUSINESS_REJECT: &str = "j";
