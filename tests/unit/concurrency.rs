use fixmd::{MdEntry, SubscriptionKind, TradeStore};
use std::sync::{Arc, Barrier};
use std::thread;

const CAPACITY: usize = 256;
const WRITERS: usize = 4;
const READERS: usize = 4;
const BATCHES_PER_WRITER: usize = 500;

#[test]
fn test_concurrent_writers_and_readers() {
    let store = Arc::new(TradeStore::new(CAPACITY));
    let barrier = Arc::new(Barrier::new(WRITERS + READERS));
    let mut handles = Vec::new();

    for writer in 0..WRITERS {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            let symbol = format!("W{writer}");
            barrier.wait();
            for batch in 0..BATCHES_PER_WRITER {
                // Price and size carry the same marker so torn records are detectable.
                let label = format!("{writer}-{batch}");
                let entries = [
                    MdEntry {
                        entry_type: "2",
                        price: &label,
                        size: &label,
                        ..MdEntry::default()
                    },
                    MdEntry {
                        entry_type: "0",
                        price: &label,
                        size: &label,
                        ..MdEntry::default()
                    },
                ];
                store.insert(&symbol, &entries, false, "");
            }
        }));
    }

    for reader in 0..READERS {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            let symbol = format!("W{}", reader % WRITERS);
            barrier.wait();
            for _ in 0..BATCHES_PER_WRITER {
                assert!(store.len() <= CAPACITY);
                if let Some(records) = store.recent_by_symbol(&symbol, 32) {
                    assert!(records.len() <= 32);
                    for record in &records {
                        assert_eq!(record.symbol, symbol);
                        assert_eq!(record.price, record.size);
                    }
                }
                if let Some(records) = store.all_records() {
                    assert!(records.len() <= CAPACITY);
                    assert!(records.iter().all(|record| record.price == record.size));
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), CAPACITY);
    assert_eq!(store.total_inserted(), (WRITERS * BATCHES_PER_WRITER * 2) as u64);
}

#[test]
fn test_batches_stay_contiguous_under_contention() {
    let store = Arc::new(TradeStore::new(1_000));
    let barrier = Arc::new(Barrier::new(WRITERS));
    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let label = writer.to_string();
                barrier.wait();
                for _ in 0..50 {
                    let entry = MdEntry {
                        entry_type: "2",
                        price: &label,
                        ..MdEntry::default()
                    };
                    store.insert("BTC-USD", &[entry; 4], false, "");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let records = store.all_records().unwrap();
    assert_eq!(records.len(), WRITERS * 50 * 4);
    for batch in records.chunks(4) {
        assert!(batch.iter().all(|record| record.price == batch[0].price));
    }
}

#[test]
fn test_concurrent_subscription_updates() {
    let store = Arc::new(TradeStore::new(64));
    for index in 0..WRITERS {
        store.add_subscription(
            &format!("S{index}"),
            SubscriptionKind::SnapshotPlusUpdates,
            &format!("req-{index}"),
        );
    }

    let barrier = Arc::new(Barrier::new(WRITERS + 1));
    let mut handles: Vec<_> = (0..WRITERS)
        .map(|index| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let symbol = format!("S{index}");
                let request_id = format!("req-{index}");
                barrier.wait();
                for _ in 0..100 {
                    let entry = MdEntry {
                        entry_type: "2",
                        price: "1",
                        ..MdEntry::default()
                    };
                    store.insert(&symbol, &[entry], false, &request_id);
                }
            })
        })
        .collect();

    let observer = {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..100 {
                let registry = store.subscription_snapshot();
                assert_eq!(registry.len(), WRITERS);
                assert!(registry.values().all(|subscription| subscription.total_updates <= 100));
            }
        })
    };
    handles.push(observer);

    for handle in handles {
        handle.join().unwrap();
    }

    for (request_id, subscription) in store.subscription_snapshot() {
        assert_eq!(subscription.total_updates, 100, "{request_id}");
        assert!(!subscription.snapshot_received);
    }
}
