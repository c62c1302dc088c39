use criterion::{criterion_group, criterion_main};

mod concurrent;
mod store;

use concurrent::register_benchmarks as register_concurrent_benchmarks;
use parser::register_benchmarks as register_parser_benchmarks;
use store::register_benchmarks as register_store_benchmarks;

criterion_group!(
    benches,
    register_parser_benchmarks,
    register_store_benchmarks,
    register_concurrent_benchmarks,
);

criterion_main!(benches);
