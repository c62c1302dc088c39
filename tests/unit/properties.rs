use super::marker;
use fixmd::{EntryPosition, MdEntry, TradeStore, extract_entries};
use proptest::prelude::*;

fn labels(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|n| n.to_string()).collect()
}

fn prices(records: Option<Vec<fixmd::Record>>) -> Vec<String> {
    records
        .unwrap_or_default()
        .into_iter()
        .map(|record| record.price)
        .collect()
}

proptest! {
    #[test]
    fn ring_keeps_newest_in_order(capacity in 1usize..32, inserted in 0usize..96) {
        let store = TradeStore::new(capacity);
        let markers = labels(0..inserted);
        for label in &markers {
            store.insert("SYM", &[marker(label)], false, "");
        }

        let kept = inserted.min(capacity);
        prop_assert_eq!(store.len(), kept);
        prop_assert_eq!(store.total_inserted(), inserted as u64);
        prop_assert_eq!(prices(store.all_records()), markers[inserted - kept..].to_vec());
    }

    #[test]
    fn single_batch_larger_than_capacity(capacity in 1usize..16, extra in 0usize..32) {
        let store = TradeStore::new(capacity);
        let markers = labels(0..capacity + extra);
        let entries: Vec<MdEntry<'_>> = markers.iter().map(|label| marker(label)).collect();

        prop_assert_eq!(store.insert("SYM", &entries, true, ""), entries.len());
        prop_assert_eq!(prices(store.all_records()), markers[extra..].to_vec());
    }

    #[test]
    fn recent_respects_limit_and_symbol(
        capacity in 1usize..40,
        symbols in proptest::collection::vec(0u8..3, 0..80),
        limit in 0usize..50,
    ) {
        let store = TradeStore::new(capacity);
        let markers = labels(0..symbols.len());
        for (label, symbol) in markers.iter().zip(&symbols) {
            store.insert(&format!("S{symbol}"), &[marker(label)], false, "");
        }

        let survivors = symbols.len().saturating_sub(capacity);
        for wanted in 0u8..3 {
            let wanted_symbol = format!("S{}", wanted);
            let expected: Vec<String> = markers[survivors..]
                .iter()
                .zip(&symbols[survivors..])
                .filter(|(_, symbol)| **symbol == wanted)
                .map(|(label, _)| label.clone())
                .collect();

            let result = store.recent_by_symbol(&wanted_symbol, limit);
            if expected.is_empty() {
                prop_assert!(result.is_none());
                continue;
            }

            let records = result.unwrap_or_default();
            prop_assert!(records.len() <= limit);
            prop_assert!(records.iter().all(|record| record.symbol == wanted_symbol));
            let newest = &expected[expected.len() - records.len().min(expected.len())..];
            let got: Vec<String> = records.into_iter().map(|record| record.price).collect();
            prop_assert_eq!(got, newest.to_vec());
        }
    }

    #[test]
    fn book_entries_get_one_based_positions(sides in proptest::collection::vec(prop::bool::ANY, 1..20)) {
        let mut raw = format!("35=W\x0155=BTC-USD\x01268={}\x01", sides.len());
        for (index, bid) in sides.iter().enumerate() {
            raw.push_str(&format!(
                "269={}\x01270={index}\x01271=1\x01",
                if *bid { "0" } else { "1" }
            ));
        }

        let entries = extract_entries(&raw, "BTC-USD", "r", true, "1").unwrap_or_default();
        prop_assert_eq!(entries.len(), sides.len());
        for (index, entry) in entries.iter().enumerate() {
            prop_assert_eq!(entry.position, EntryPosition::Implied(index as u32 + 1));
        }
    }
}
