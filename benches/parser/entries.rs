use super::sample_message;
use criterion::{BenchmarkId, Criterion, Throughput};
use fixmd::{entry_end, extract_entries, find_entry_boundaries, parse_entry, parse_entry_multi_pass};
use std::hint::black_box;

/// Register benchmarks for boundary location and entry parsing
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser - Entries");

    let trade = "269=2\x01270=50000.00\x01271=1.5000\x01273=20250101-12:00:00\x012446=1\x01";

    // Single scan against one lookup per tag on the same segment
    group.bench_function("parse_entry_single_pass", |b| {
        b.iter(|| {
            black_box(parse_entry(
                black_box(trade),
                "BTC-USD",
                "req-bench",
                false,
                "42",
                0,
                0,
            ))
        })
    });

    group.bench_function("parse_entry_multi_pass", |b| {
        b.iter(|| {
            black_box(parse_entry_multi_pass(
                black_box(trade),
                "BTC-USD",
                "req-bench",
                false,
                "42",
                0,
                0,
            ))
        })
    });

    for entries in [10usize, 100].iter() {
        let raw = sample_message(*entries);
        group.throughput(Throughput::Elements(*entries as u64));

        group.bench_with_input(
            BenchmarkId::new("find_entry_boundaries", entries),
            &raw,
            |b, raw| b.iter(|| black_box(find_entry_boundaries(black_box(raw)))),
        );

        group.bench_with_input(BenchmarkId::new("extract_entries", entries), &raw, |b, raw| {
            b.iter(|| black_box(extract_entries(black_box(raw), "BTC-USD", "req-bench", false, "42")))
        });

        // Same pipeline with the multi-pass parser, for comparison
        group.bench_with_input(
            BenchmarkId::new("extract_entries_multi_pass", entries),
            &raw,
            |b, raw| {
                b.iter(|| {
                    let starts = find_entry_boundaries(black_box(raw));
                    let mut parsed = Vec::with_capacity(starts.len());
                    for (index, &start) in starts.iter().enumerate() {
                        let end = entry_end(&starts, index, raw.len());
                        parsed.push(parse_entry_multi_pass(
                            &raw[start..end],
                            "BTC-USD",
                            "req-bench",
                            false,
                            "42",
                            index,
                            0,
                        ));
                    }
                    black_box(parsed)
                })
            },
        );
    }

    group.finish();
}
