//! Tag numbers consumed by the client.

// Header
pub const MSG_SEQ_NUM: u32 = 34;
pub const MSG_TYPE: u32 = 35;

// Common body
pub const ACCOUNT: u32 = 1;
pub const AVG_PX: u32 = 6;
pub const CL_ORD_ID: u32 = 11;
pub const COMMISSION: u32 = 12;
pub const CUM_QTY: u32 = 14;
pub const EXEC_ID: u32 = 17;
pub const LAST_PX: u32 = 31;
pub const LAST_SHARES: u32 = 32;
pub const ORDER_ID: u32 = 37;
pub const ORDER_QTY: u32 = 38;
pub const ORD_STATUS: u32 = 39;
pub const ORD_TYPE: u32 = 40;
pub const PRICE: u32 = 44;
pub const SIDE: u32 = 54;
pub const SYMBOL: u32 = 55;
pub const TEXT: u32 = 58;
pub const ORD_REJ_REASON: u32 = 103;
pub const QUOTE_ID: u32 = 117;
pub const QUOTE_REQ_ID: u32 = 131;
pub const BID_PX: u32 = 132;
pub const OFFER_PX: u32 = 133;
pub const BID_SIZE: u32 = 134;
pub const OFFER_SIZE: u32 = 135;
pub const EXEC_TYPE: u32 = 150;
pub const LEAVES_QTY: u32 = 151;
pub const CASH_ORDER_QTY: u32 = 152;
pub const EFFECTIVE_TIME: u32 = 168;

// Market data
pub const MD_REQ_ID: u32 = 262;
pub const SUBSCRIPTION_REQUEST_TYPE: u32 = 263;
pub const NO_MD_ENTRIES: u32 = 268;
pub const MD_ENTRY_TYPE: u32 = 269;
pub const MD_ENTRY_PX: u32 = 270;
pub const MD_ENTRY_SIZE: u32 = 271;
pub const MD_ENTRY_TIME: u32 = 273;
pub const MD_REQ_REJ_REASON: u32 = 281;
pub const MD_ENTRY_POSITION_NO: u32 = 290;

// Venue specific
pub const AGGRESSOR_SIDE: u32 = 2446;
pub const FILLED_AMT: u32 = 8002;
pub const NET_AVG_PRICE: u32 = 8006;
