use crate::protocol::is_open_order_status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-side view of an order's current state.
///
/// Quantities and prices stay as exchange text, like market data records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Client order id (tag 11), the store key.
    pub cl_ord_id: String,
    /// Exchange-assigned order id (tag 37).
    pub order_id: String,
    pub symbol: String,
    /// `1` buy, `2` sell.
    pub side: String,
    pub ord_type: String,
    pub ord_status: String,
    pub exec_type: String,
    pub order_qty: String,
    /// Quantity in quote currency, when the order was sized that way.
    pub cash_order_qty: String,
    pub price: String,
    pub avg_px: String,
    pub cum_qty: String,
    pub leaves_qty: String,
    pub last_px: String,
    pub last_shares: String,
    pub exec_id: String,
    pub commission: String,
    pub filled_amt: String,
    pub net_avg_px: String,
    pub ord_rej_reason: String,
    pub text: String,
    /// Portfolio the order belongs to.
    pub account: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
    pub updated_at: u64,
}

impl Order {
    pub fn new(cl_ord_id: &str, symbol: &str, side: &str) -> Self {
        Self {
            cl_ord_id: cl_ord_id.to_string(),
            symbol: symbol.to_string(),
            side: side.to_string(),
            ..Self::default()
        }
    }

    /// New, partially filled, or pending some transition.
    pub fn is_open(&self) -> bool {
        is_open_order_status(&self.ord_status)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side.as_str() {
            "1" => "BUY",
            "2" => "SELL",
            other => other,
        };
        write!(
            f,
            "{} {} {} qty={} filled={} status={}",
            self.cl_ord_id, side, self.symbol, self.order_qty, self.cum_qty, self.ord_status
        )
    }
}

/// A quote received in answer to a quote request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote_id: String,
    /// Request id of the originating quote request, the store key.
    pub quote_req_id: String,
    pub account: String,
    pub symbol: String,
    /// Populated when quoting the client's sell side.
    pub bid_px: String,
    pub bid_size: String,
    /// Populated when quoting the client's buy side.
    pub offer_px: String,
    pub offer_size: String,
    /// Milliseconds since the Unix epoch, stamped by the store.
    pub received_at: u64,
}
