//! Market data extraction straight from the raw wire text.
//!
//! A market data message is scanned once for every `269=` marker; each marker
//! opens a segment that runs to the next marker (or to the end of the message),
//! and each segment is parsed in a single sequential pass. Every text field of
//! the resulting [`MdEntry`] borrows from the raw message, so apart from the two
//! exact-capacity vectors (boundaries and entries) nothing is allocated.

mod boundaries;
mod entry;
mod field;
mod message;

pub use boundaries::{entry_end, find_entry_boundaries};
pub use entry::{EntryPosition, MdEntry, parse_entry, parse_entry_multi_pass};
pub use field::{extract_field_value, field_value};
pub use message::extract_entries;
