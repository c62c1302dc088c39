use crate::protocol::ENTRY_MARKER;

/// Finds the byte offset of every `269=` marker in `raw`, in order.
///
/// A counting pass sizes the result exactly, then a forward scan collects the
/// offsets, resuming after each match. One allocation; an empty vector (which
/// does not allocate) when the message carries no entries.
pub fn find_entry_boundaries(raw: &str) -> Vec<usize> {
    let count = raw.matches(ENTRY_MARKER).count();
    if count == 0 {
        return Vec::new();
    }

    let mut starts = Vec::with_capacity(count);
    let mut search_from = 0;
    while let Some(pos) = raw[search_from..].find(ENTRY_MARKER) {
        starts.push(search_from + pos);
        search_from += pos + ENTRY_MARKER.len();
    }
    starts
}

/// End offset (exclusive) of the segment opened by `starts[index]`: the next
/// marker, or `message_len` for the final entry.
#[inline]
pub fn entry_end(starts: &[usize], index: usize, message_len: usize) -> usize {
    starts.get(index + 1).copied().unwrap_or(message_len)
}
