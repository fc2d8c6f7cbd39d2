use std::time::Duration;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use suggestkit::cache::{Ttl, TtlLruCore};

fn warm_cache(capacity: usize) -> TtlLruCore<u64, u64> {
    let mut cache = TtlLruCore::new(capacity, Ttl::After(Duration::from_secs(300))).unwrap();
    for i in 0..capacity as u64 {
        cache.insert(i, i);
    }
    cache
}

fn bench_insert_get(c: &mut Criterion) {
    c.bench_function("ttl_lru_insert_get", |b| {
        b.iter_batched(
            || warm_cache(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_eviction_churn(c: &mut Criterion) {
    c.bench_function("ttl_lru_eviction_churn", |b| {
        b.iter_batched(
            || warm_cache(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_hit_heavy_reads(c: &mut Criterion) {
    c.bench_function("ttl_lru_hit_heavy_reads", |b| {
        b.iter_batched(
            || warm_cache(1024),
            |mut cache| {
                for i in 0..8192u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i % 1024)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_insert_get,
    bench_eviction_churn,
    bench_hit_heavy_reads
);
criterion_main!(benches);
