use crate::parser::field_value;
use crate::protocol::{SOH, tags};
use std::fmt::Write;

/// An application message as delivered by the FIX engine.
///
/// The engine owns framing, sequencing and session state; the handler only
/// needs the header fields it already decoded and the raw text of the body.
pub trait InboundMessage {
    /// MsgType (tag 35).
    fn msg_type(&self) -> &str;

    /// MsgSeqNum (tag 34) as text.
    fn seq_num(&self) -> &str;

    /// The whole message as `TAG=VALUE<SOH>` text.
    fn raw_text(&self) -> &str;

    /// First value of a body field outside repeating groups.
    fn field(&self, tag: u32) -> Option<&str>;
}

/// An [`InboundMessage`] backed by its raw wire text.
///
/// Used for replays, demos and tests; header fields are read from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    raw: String,
}

impl RawMessage {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Builds `TAG=VALUE<SOH>` text from fields, in the given order.
    pub fn from_fields(fields: &[(u32, &str)]) -> Self {
        let mut raw = String::with_capacity(fields.len() * 12);
        for (tag, value) in fields {
            let _ = write!(raw, "{tag}={value}");
            raw.push(SOH as char);
        }
        Self { raw }
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl InboundMessage for RawMessage {
    fn msg_type(&self) -> &str {
        field_value(&self.raw, tags::MSG_TYPE).unwrap_or_default()
    }

    fn seq_num(&self) -> &str {
        field_value(&self.raw, tags::MSG_SEQ_NUM).unwrap_or_default()
    }

    fn raw_text(&self) -> &str {
        &self.raw
    }

    fn field(&self, tag: u32) -> Option<&str> {
        field_value(&self.raw, tag)
    }
}
