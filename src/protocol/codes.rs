/// Maps an aggressor side code (tag 2446) to its label.
///
/// `"1"` is `"Buy"`, `"2"` is `"Sell"`; any other code is returned unchanged, so
/// the result either borrows the input or is a static label and never allocates.
///
/// ```
/// use fixmd::aggressor_label;
///
/// assert_eq!(aggressor_label("1"), "Buy");
/// assert_eq!(aggressor_label("2"), "Sell");
/// assert_eq!(aggressor_label("7"), "7");
/// ```
#[inline]
pub fn aggressor_label(code: &str) -> &str {
    match code {
        "1" => "Buy",
        "2" => "Sell",
        other => other,
    }
}

/// Human description of a Market Data Request Reject reason (tag 281).
pub fn md_reject_reason_description(code: &str) -> &'static str {
    match code {
        "0" => "Unknown symbol",
        "1" => "Duplicate MdReqId",
        "2" => "Insufficient bandwidth",
        "3" => "Insufficient permission",
        "4" => "Invalid SubscriptionRequestType",
        "5" => "Invalid MarketDepth",
        "6" => "Unsupported MdUpdateType",
        "7" => "Other",
        "8" => "Unsupported MdEntryType",
        _ => "Unknown reason",
    }
}

/// True when an order status (tag 39) means the order can still trade:
/// New, Partially Filled, Pending Cancel, Suspended, Pending New, Pending Replace.
pub fn is_open_order_status(status: &str) -> bool {
    matches!(status, "0" | "1" | "6" | "9" | "A" | "E")
}
