
use criterion::Criterion;

pub fn register_benchmarks(c: &mut Criterion) {
    ring_buffer::register_benchmarks(c);
}
