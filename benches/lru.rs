use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lrukit::policy::lru::LruCache;

const CAPACITY: usize = 1024;

fn warm_cache() -> LruCache<u64, u64> {
    let mut cache = LruCache::new(CAPACITY);
    for i in 0..CAPACITY as u64 {
        cache.insert(i, i);
    }
    cache
}

fn bench_insert_get(c: &mut Criterion) {
    c.bench_function("lru_insert_get", |b| {
        b.iter_batched(
            warm_cache,
            |mut cache| {
                for i in 0..CAPACITY as u64 {
                    cache.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            warm_cache,
            |mut cache| {
                for i in 0..4 * CAPACITY as u64 {
                    cache.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_hit_heavy_workload(c: &mut Criterion) {
    c.bench_function("lru_hit_heavy_workload", |b| {
        b.iter_batched(
            || {
                let cache = warm_cache();
                let mut rng = StdRng::seed_from_u64(7);
                // 90% hits on resident keys, 10% fresh inserts.
                let ops: Vec<u64> = (0..4096)
                    .map(|_| {
                        if rng.gen_bool(0.9) {
                            rng.gen_range(0..CAPACITY as u64)
                        } else {
                            CAPACITY as u64 + rng.gen_range(0..1024)
                        }
                    })
                    .collect();
                (cache, ops)
            },
            |(mut cache, ops)| {
                for key in ops {
                    if cache.get(std::hint::black_box(&key)).is_none() {
                        cache.insert(key, key);
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_iteration(c: &mut Criterion) {
    c.bench_function("lru_iter_forward", |b| {
        let cache = warm_cache();
        b.iter(|| {
            let mut sum = 0u64;
            for (_, value) in cache.iter() {
                sum = sum.wrapping_add(*value);
            }
            std::hint::black_box(sum)
        })
    });

    c.bench_function("lru_iter_reverse", |b| {
        let cache = warm_cache();
        b.iter(|| {
            let mut sum = 0u64;
            for (_, value) in cache.iter().rev() {
                sum = sum.wrapping_add(*value);
            }
            std::hint::black_box(sum)
        })
    });
}

criterion_group!(
    benches,
    bench_insert_get,
    bench_eviction_churn,
    bench_hit_heavy_workload,
    bench_iteration
);
criterion_main!(benches);
