use super::md_message;
use fixmd::{
    EntryPosition, Handled, InboundMessage, MarketDataHandler, MdEntryType, OrderStore,
    SubscriptionKind, TradeStore, extract_entries, find_entry_boundaries, parse_entry,
    parse_entry_multi_pass,
};
use std::sync::Arc;

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_ohlcv_entry_types() {
        let cases = [
            ("269=4\x01270=49500.00\x01273=20250101-00:00:00\x01", MdEntryType::Open),
            ("269=5\x01270=50500.00\x01273=20250101-23:59:59\x01", MdEntryType::Close),
            ("269=7\x01270=51000.00\x01273=20250101-14:30:00\x01", MdEntryType::High),
            ("269=8\x01270=48000.00\x01273=20250101-03:15:00\x01", MdEntryType::Low),
            ("269=B\x01271=12345.67\x01273=20250101-00:00:00\x01", MdEntryType::Volume),
        ];

        for (segment, expected) in cases {
            let entry = parse_entry(segment, "ETH-USD", "req-456", true, "1", 0, 0);
            assert_eq!(entry.kind(), Some(expected), "segment {segment:?}");
            assert!(entry.position.is_absent());
        }
    }

    #[test]
    fn test_boundaries_ignore_interspersed_tags() {
        let message = md_message(
            true,
            3,
            "req-1",
            "BTC-USD",
            &[
                "269=0\x01270=49999.00\x01271=1.0\x01290=1\x01",
                "269=1\x01270=50001.00\x01271=2.0\x01290=1\x01",
                "269=2\x01270=50000.00\x01271=0.5\x012446=1\x01",
            ],
        );
        let raw = message.raw_text();

        let starts = find_entry_boundaries(raw);
        assert_eq!(starts.len(), 3);
        assert!(raw[starts[0]..].starts_with("269=0"));
        assert!(raw[starts[1]..].starts_with("269=1"));
        assert!(raw[starts[2]..].starts_with("269=2"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let entry = parse_entry("269=2\x01270=50000.00\x01271=1.0\x01", "BTC-USD", "r", false, "1", 0, 0);
        assert_eq!(entry.entry_time, "");
        assert_eq!(entry.aggressor, "");
        assert_eq!(entry.position, EntryPosition::Absent);
    }

    #[test]
    fn test_both_parsers_agree_on_real_message() {
        let message = md_message(
            false,
            8,
            "req-2",
            "SOL-USD",
            &[
                "269=0\x01270=150.10\x01271=30\x01",
                "269=1\x01270=150.20\x01271=25\x01290=2\x01",
                "269=2\x01270=150.15\x01271=4\x01273=20250101-09:00:00\x012446=2\x01",
            ],
        );
        let raw = message.raw_text();
        let starts = find_entry_boundaries(raw);
        let end_of = |i: usize| starts.get(i + 1).copied().unwrap_or(raw.len());

        for (index, &start) in starts.iter().enumerate() {
            let segment = &raw[start..end_of(index)];
            assert_eq!(
                parse_entry(segment, "SOL-USD", "req-2", false, "8", index, 42),
                parse_entry_multi_pass(segment, "SOL-USD", "req-2", false, "8", index, 42)
            );
        }
    }

    #[test]
    fn test_symbol_and_request_propagate_through_pipeline() {
        let message = md_message(false, 4, "req-9", "ETH-USD", &["269=2\x01270=3000\x01"]);
        let entries =
            extract_entries(message.raw_text(), "ETH-USD", "req-9", false, message.seq_num()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symbol, "ETH-USD");
        assert_eq!(entries[0].request_id, "req-9");
        assert_eq!(entries[0].seq_num, "4");
        assert!(entries[0].is_update);
    }
}

#[cfg(test)]
mod handler_tests {
    use super::*;

    fn handler(capacity: usize) -> MarketDataHandler {
        MarketDataHandler::new(Arc::new(TradeStore::new(capacity)), Arc::new(OrderStore::new()))
    }

    #[test]
    fn test_snapshot_then_updates() {
        let handler = handler(100);
        let request_id = handler.register_request(&["BTC-USD"], SubscriptionKind::SnapshotPlusUpdates);

        let snapshot = md_message(
            true,
            1,
            &request_id,
            "BTC-USD",
            &[
                "269=0\x01270=49999.00\x01271=1.0\x01",
                "269=0\x01270=49998.00\x01271=2.0\x01",
                "269=1\x01270=50001.00\x01271=1.5\x01",
            ],
        );
        assert_eq!(handler.on_message(&snapshot), Handled::MarketData { stored: 3 });

        let update = md_message(
            false,
            2,
            &request_id,
            "BTC-USD",
            &["269=2\x01270=50000.00\x01271=0.1\x012446=2\x01"],
        );
        assert_eq!(handler.on_message(&update), Handled::MarketData { stored: 1 });

        let records = handler.trade_store().all_records().unwrap();
        let positions: Vec<&str> = records.iter().map(|r| r.position.as_str()).collect();
        assert_eq!(positions, ["1", "2", "3", ""]);
        assert!(records[..3].iter().all(|r| r.is_snapshot));
        assert!(records[3].is_update);
        assert_eq!(records[3].aggressor, "Sell");

        let subscription = handler.trade_store().subscription(&request_id).unwrap();
        assert!(subscription.snapshot_received);
        assert_eq!(subscription.total_updates, 4);
        assert_eq!(handler.statistics().messages(), 2);
    }

    #[test]
    fn test_display_lines_for_streamed_records() {
        let handler = handler(10);
        let update = md_message(
            false,
            7,
            "req-1",
            "BTC-USD",
            &[
                "269=2\x01270=50000.00\x01271=0.1\x01",
                "269=B\x01271=1234.5\x01",
            ],
        );
        handler.on_message(&update);

        let lines: Vec<String> = handler
            .trade_store()
            .recent_by_symbol("BTC-USD", 10)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            [
                "BTC-USD Trade: 50000.00 | Size: 0.1 | Aggressor: -",
                "BTC-USD Volume: 1234.5",
            ]
        );
    }
}
