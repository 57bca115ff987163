// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use spatia_pool::{FixedPool, MemoryPool, PoolConfig};

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_pool");
    for &n in &[256usize, 4096, 65536] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("fill_then_drain_n{}", n), |b| {
            b.iter_batched(
                || FixedPool::<[u64; 4]>::new(n).unwrap(),
                |mut pool| {
                    let blocks: Vec<_> = (0..n)
                        .map(|i| pool.allocate([i as u64; 4]).unwrap())
                        .collect();
                    for block in blocks.into_iter().rev() {
                        black_box(pool.free(block).unwrap());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_memory_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_pool");
    let config = PoolConfig {
        pool_size: 1024,
        max_pools: 16,
    };
    group.bench_function("grow_to_cap", |b| {
        b.iter_batched(
            || MemoryPool::<u64>::new(config).unwrap(),
            |mut pool| {
                for i in 0..(config.pool_size * config.max_pools) {
                    black_box(pool.allocate(i as u64).unwrap());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("interleaved_churn", |b| {
        b.iter_batched(
            || {
                let mut pool = MemoryPool::<u64>::new(config).unwrap();
                let live: Vec<_> = (0..8192).map(|i| pool.allocate(i).unwrap()).collect();
                (pool, live)
            },
            |(mut pool, mut live)| {
                for step in 0..8192_u64 {
                    let victim = live.swap_remove((step as usize * 7) % live.len());
                    black_box(pool.free(victim).unwrap());
                    live.push(pool.allocate(step).unwrap());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_fixed, bench_memory_pool);
criterion_main!(benches);
