use crate::parser::boundaries::{entry_end, find_entry_boundaries};
use crate::parser::entry::{MdEntry, parse_entry};
use crate::parser::field::field_value;
use crate::protocol::tags;
use crate::utils::current_time_millis;
use tracing::trace;

/// Extracts every market data entry of `raw`, in wire order.
///
/// Returns `None` when the message declares no entries (tag 268 missing or
/// `0`) or when no `269=` marker is found. Otherwise the result holds exactly
/// one entry per marker and was allocated once at its final size. The clock is
/// read once, so every entry of the batch carries the same timestamp.
///
/// ```
/// use fixmd::extract_entries;
///
/// let raw = "35=X\x01268=2\x01269=0\x01270=99.5\x01271=10\x01269=2\x01270=99.6\x012446=2\x01";
/// let entries = extract_entries(raw, "ETH-USD", "req-1", false, "8").unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].position.to_string(), "1");
/// assert_eq!(entries[1].aggressor, "Sell");
/// assert_eq!(entries[0].timestamp, entries[1].timestamp);
/// ```
pub fn extract_entries<'a>(
    raw: &'a str,
    symbol: &'a str,
    request_id: &'a str,
    is_snapshot: bool,
    seq_num: &'a str,
) -> Option<Vec<MdEntry<'a>>> {
    match field_value(raw, tags::NO_MD_ENTRIES) {
        None | Some("0") => return None,
        Some(_) => {}
    }

    let starts = find_entry_boundaries(raw);
    if starts.is_empty() {
        return None;
    }

    let timestamp = current_time_millis();
    let mut entries = Vec::with_capacity(starts.len());
    for (index, &start) in starts.iter().enumerate() {
        let end = entry_end(&starts, index, raw.len());
        entries.push(parse_entry(
            &raw[start..end],
            symbol,
            request_id,
            is_snapshot,
            seq_num,
            index,
            timestamp,
        ));
    }

    trace!(symbol, count = entries.len(), "extracted market data entries");
    Some(entries)
}
