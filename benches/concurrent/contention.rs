use criterion::{BenchmarkId, Criterion};
use fixmd::{MdEntry, SubscriptionKind, TradeStore};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

const SYMBOLS: [&str; 4] = ["BTC-USD", "ETH-USD", "SOL-USD", "DOGE-USD"];

/// Register benchmarks that test different contention patterns on the trade store
pub fn register_contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("TradeStore - Contention Patterns");

    // Test with different read/write ratios
    for read_ratio in [0, 25, 50, 75, 95].iter() {
        // Fixed at 8 threads which is a common server core count
        let thread_count = 8;

        group.bench_with_input(
            BenchmarkId::new("read_write_ratio", read_ratio),
            read_ratio,
            |b, &read_ratio| {
                b.iter_custom(|iters| {
                    measure_read_write_contention(thread_count, iters, read_ratio)
                });
            },
        );
    }

    // Writers only, scaling thread count
    for thread_count in [2, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("concurrent_insert", thread_count),
            thread_count,
            |b, &thread_count| {
                b.iter_custom(|iters| measure_read_write_contention(thread_count, iters, 0));
            },
        );
    }

    group.finish();
}

/// Measures time for operations with different read/write ratios
/// read_ratio = percentage of read operations (0-100)
fn measure_read_write_contention(
    thread_count: usize,
    iterations: u64,
    read_ratio: usize,
) -> Duration {
    let store = Arc::new(TradeStore::new(10_000));
    let barrier = Arc::new(Barrier::new(thread_count + 1)); // +1 for main thread

    for (i, symbol) in SYMBOLS.iter().enumerate() {
        store.add_subscription(
            symbol,
            SubscriptionKind::SnapshotPlusUpdates,
            &format!("req-{i}"),
        );
    }

    // Pre-populate so reads have something to filter
    for i in 0..2_000 {
        let entry = trade("50000.00");
        store.insert(SYMBOLS[i % SYMBOLS.len()], &[entry], false, "");
    }

    let mut handles = Vec::with_capacity(thread_count);

    for thread_id in 0..thread_count {
        let thread_store = Arc::clone(&store);
        let thread_barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            let slot = thread_id % SYMBOLS.len();
            let symbol = SYMBOLS[slot];
            let request_id = format!("req-{slot}");
            let entries = [trade("50000.00"), trade("50000.50"), trade("50001.00")];

            // Wait for all threads to be ready
            thread_barrier.wait();

            for i in 0..iterations {
                let is_read = (i as usize % 100) < read_ratio;

                if is_read {
                    match i % 3 {
                        0 => {
                            let _ = thread_store.recent_by_symbol(symbol, 50);
                        }
                        1 => {
                            let _ = thread_store.subscription(&request_id);
                        }
                        _ => {
                            let _ = thread_store.len();
                        }
                    }
                } else {
                    thread_store.insert(symbol, &entries, false, &request_id);
                }
            }

            // Signal completion
            thread_barrier.wait();
        }));
    }

    // Start timing
    barrier.wait();
    let start = Instant::now();

    // Wait for all threads to complete
    barrier.wait();
    let duration = start.elapsed();

    for handle in handles {
        let _ = handle.join();
    }

    duration
}

fn trade(price: &'static str) -> MdEntry<'static> {
    MdEntry {
        entry_type: "2",
        price,
        size: "0.10",
        aggressor: "Sell",
        ..MdEntry::default()
    }
}
