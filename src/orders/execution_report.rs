use crate::handler::InboundMessage;
use crate::orders::order::Quote;
use crate::protocol::tags;
use serde::{Deserialize, Serialize};

/// Fields of an Execution Report (8) that the order store consumes.
///
/// Absent tags read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub cl_ord_id: String,
    pub order_id: String,
    pub exec_id: String,
    pub account: String,
    pub symbol: String,
    pub ord_status: String,
    pub exec_type: String,
    pub side: String,
    pub ord_type: String,
    pub order_qty: String,
    pub cum_qty: String,
    pub leaves_qty: String,
    pub cash_order_qty: String,
    pub price: String,
    pub avg_px: String,
    pub last_px: String,
    pub last_shares: String,
    pub commission: String,
    pub filled_amt: String,
    pub net_avg_px: String,
    pub ord_rej_reason: String,
    pub text: String,
    pub effective_time: String,
}

fn text_of<M: InboundMessage + ?Sized>(message: &M, tag: u32) -> String {
    message.field(tag).unwrap_or_default().to_string()
}

impl ExecutionReport {
    pub fn from_message<M: InboundMessage + ?Sized>(message: &M) -> Self {
        Self {
            cl_ord_id: text_of(message, tags::CL_ORD_ID),
            order_id: text_of(message, tags::ORDER_ID),
            exec_id: text_of(message, tags::EXEC_ID),
            account: text_of(message, tags::ACCOUNT),
            symbol: text_of(message, tags::SYMBOL),
            ord_status: text_of(message, tags::ORD_STATUS),
            exec_type: text_of(message, tags::EXEC_TYPE),
            side: text_of(message, tags::SIDE),
            ord_type: text_of(message, tags::ORD_TYPE),
            order_qty: text_of(message, tags::ORDER_QTY),
            cum_qty: text_of(message, tags::CUM_QTY),
            leaves_qty: text_of(message, tags::LEAVES_QTY),
            cash_order_qty: text_of(message, tags::CASH_ORDER_QTY),
            price: text_of(message, tags::PRICE),
            avg_px: text_of(message, tags::AVG_PX),
            last_px: text_of(message, tags::LAST_PX),
            last_shares: text_of(message, tags::LAST_SHARES),
            commission: text_of(message, tags::COMMISSION),
            filled_amt: text_of(message, tags::FILLED_AMT),
            net_avg_px: text_of(message, tags::NET_AVG_PRICE),
            ord_rej_reason: text_of(message, tags::ORD_REJ_REASON),
            text: text_of(message, tags::TEXT),
            effective_time: text_of(message, tags::EFFECTIVE_TIME),
        }
    }
}

impl Quote {
    /// Reads a Quote (S) message. `received_at` is left for the store to stamp.
    pub fn from_message<M: InboundMessage + ?Sized>(message: &M) -> Self {
        Self {
            quote_id: text_of(message, tags::QUOTE_ID),
            quote_req_id: text_of(message, tags::QUOTE_REQ_ID),
            account: text_of(message, tags::ACCOUNT),
            symbol: text_of(message, tags::SYMBOL),
            bid_px: text_of(message, tags::BID_PX),
            bid_size: text_of(message, tags::BID_SIZE),
            offer_px: text_of(message, tags::OFFER_PX),
            offer_size: text_of(message, tags::OFFER_SIZE),
            received_at: 0,
        }
    }
}
