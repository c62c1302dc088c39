use crate::parser::field::extract_field_value;
use crate::protocol::{MdEntryType, SOH, aggressor_label};
use std::fmt;
use std::fmt::Write;

/// Book position of a parsed entry (tag 290).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryPosition<'a> {
    /// No position was sent and none applies (trades, OHLCV fields).
    #[default]
    Absent,
    /// Position as sent by the exchange.
    Explicit(&'a str),
    /// 1-based rank assigned from the entry's index within its batch, for a bid or
    /// offer that arrived without tag 290.
    Implied(u32),
}

impl EntryPosition<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, EntryPosition::Absent)
    }

    /// Writes the textual form into `out` without clearing it first.
    pub fn write_to(&self, out: &mut String) {
        match self {
            EntryPosition::Absent => {}
            EntryPosition::Explicit(value) => out.push_str(value),
            EntryPosition::Implied(rank) => {
                let _ = write!(out, "{rank}");
            }
        }
    }
}

impl fmt::Display for EntryPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryPosition::Absent => Ok(()),
            EntryPosition::Explicit(value) => f.write_str(value),
            EntryPosition::Implied(rank) => write!(f, "{rank}"),
        }
    }
}

/// One market data entry, parsed in place.
///
/// Every text field borrows from the raw message (or is a static label for the
/// aggressor side), so the value is fixed-size and building it never touches the
/// heap. Price and size stay textual to keep the exchange's decimal precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MdEntry<'a> {
    /// Arrival time in milliseconds, shared by every entry of a batch.
    pub timestamp: u64,
    pub symbol: &'a str,
    pub price: &'a str,
    pub size: &'a str,
    /// MDEntryTime as sent by the exchange.
    pub entry_time: &'a str,
    /// "Buy", "Sell", the raw code for anything else, or empty.
    pub aggressor: &'a str,
    pub request_id: &'a str,
    /// Raw MDEntryType code; unknown codes are kept as sent.
    pub entry_type: &'a str,
    pub position: EntryPosition<'a>,
    pub seq_num: &'a str,
    pub is_snapshot: bool,
    pub is_update: bool,
}

impl MdEntry<'_> {
    /// The interpreted entry type, if the code is one the client knows.
    pub fn kind(&self) -> Option<MdEntryType> {
        MdEntryType::from_code(self.entry_type)
    }
}

#[inline]
fn apply_default_position(entry: &mut MdEntry<'_>, entry_index: usize) {
    if entry.position.is_absent() && matches!(entry.entry_type, "0" | "1") {
        let rank = u32::try_from(entry_index.saturating_add(1)).unwrap_or(u32::MAX);
        entry.position = EntryPosition::Implied(rank);
    }
}

/// Parses one entry segment in a single pass.
///
/// Walks `TAG=VALUE<SOH>` fields once, keeping the six recognised tags (269,
/// 270, 271, 273, 290, 2446) and skipping everything else. A field without a
/// trailing delimiter runs to the end of the segment; text without any `=` ends
/// the scan. Never fails: missing tags leave their field empty.
///
/// A bid or offer without tag 290 receives position `entry_index + 1`.
#[allow(clippy::too_many_arguments)]
pub fn parse_entry<'a>(
    segment: &'a str,
    symbol: &'a str,
    request_id: &'a str,
    is_snapshot: bool,
    seq_num: &'a str,
    entry_index: usize,
    timestamp: u64,
) -> MdEntry<'a> {
    let mut entry = MdEntry {
        timestamp,
        symbol,
        request_id,
        seq_num,
        is_snapshot,
        is_update: !is_snapshot,
        ..MdEntry::default()
    };

    let bytes = segment.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    while pos < len {
        let Some(eq) = bytes[pos..].iter().position(|&b| b == b'=') else {
            break;
        };
        let eq = pos + eq;
        let tag = &segment[pos..eq];

        let value_start = eq + 1;
        let (value, next) = match bytes[value_start..].iter().position(|&b| b == SOH) {
            Some(offset) => (
                &segment[value_start..value_start + offset],
                value_start + offset + 1,
            ),
            None => (&segment[value_start..], len),
        };

        // ordered by frequency
        match tag {
            "269" => entry.entry_type = value,
            "270" => entry.price = value,
            "271" => entry.size = value,
            "273" => entry.entry_time = value,
            "290" if !value.is_empty() => entry.position = EntryPosition::Explicit(value),
            "2446" => entry.aggressor = aggressor_label(value),
            _ => {}
        }

        pos = next;
    }

    apply_default_position(&mut entry, entry_index);
    entry
}

/// Parses one entry segment with an independent lookup per recognised tag.
///
/// Produces the same entry as [`parse_entry`] for well-formed segments but scans
/// the segment six times. Kept as the benchmark baseline for the single-pass
/// parser; ingestion never calls it.
#[allow(clippy::too_many_arguments)]
pub fn parse_entry_multi_pass<'a>(
    segment: &'a str,
    symbol: &'a str,
    request_id: &'a str,
    is_snapshot: bool,
    seq_num: &'a str,
    entry_index: usize,
    timestamp: u64,
) -> MdEntry<'a> {
    let mut entry = MdEntry {
        timestamp,
        symbol,
        request_id,
        seq_num,
        is_snapshot,
        is_update: !is_snapshot,
        ..MdEntry::default()
    };

    if let Some(entry_type) = extract_field_value(segment, "269=") {
        entry.entry_type = entry_type;
    }
    if let Some(price) = extract_field_value(segment, "270=") {
        entry.price = price;
    }
    if let Some(size) = extract_field_value(segment, "271=") {
        entry.size = size;
    }
    if let Some(entry_time) = extract_field_value(segment, "273=") {
        entry.entry_time = entry_time;
    }
    if let Some(position) = extract_field_value(segment, "290=").filter(|p| !p.is_empty()) {
        entry.position = EntryPosition::Explicit(position);
    }
    if let Some(aggressor) = extract_field_value(segment, "2446=") {
        entry.aggressor = aggressor_label(aggressor);
    }

    apply_default_position(&mut entry, entry_index);
    entry
}
