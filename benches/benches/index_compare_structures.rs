// Copyright 2025 the Spatia Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashSet;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use spatia_index::{DenseSpatialGrid, FindMode, GridConfig, QuadTree, QuadTreeConfig};

const WORLD: f64 = 2000.0;

fn world() -> Rect {
    Rect::new(0.0, 0.0, WORLD, WORLD)
}

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, rect_w: f64, rect_h: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (WORLD - rect_w);
        let y0 = rng.next_f64() * (WORLD - rect_h);
        out.push(Rect::new(x0, y0, x0 + rect_w, y0 + rect_h));
    }
    out
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        let margin = spread + 12.0;
        centers.push((
            margin + rng.next_f64() * (WORLD - 2.0 * margin),
            margin + rng.next_f64() * (WORLD - 2.0 * margin),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let x0 = cx + (rng.next_f64() - 0.5) * spread;
            let y0 = cy + (rng.next_f64() - 0.5) * spread;
            out.push(Rect::new(x0, y0, x0 + 12.0, y0 + 12.0));
        }
    }
    out
}

fn build_grid(rects: &[Rect], cells: usize) -> DenseSpatialGrid<u32> {
    let config = GridConfig {
        rows: cells,
        cols: cells,
    };
    let mut grid = DenseSpatialGrid::new(world(), config).unwrap();
    for (i, r) in rects.iter().copied().enumerate() {
        let _ = grid.insert(r, i as u32);
    }
    grid
}

fn build_tree(rects: &[Rect], config: QuadTreeConfig) -> QuadTree<u32> {
    let mut tree = QuadTree::new(world(), config).unwrap();
    for (i, r) in rects.iter().copied().enumerate() {
        let _ = tree.insert(r, i as u32);
    }
    tree
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, WORLD / n as f64);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_rect_n{}", n), |b| {
            b.iter(|| {
                let grid = build_grid(&rects, 64);
                let mut hits = HashSet::new();
                grid.find_rect(Rect::new(400.0, 400.0, 800.0, 800.0), &mut hits);
                black_box(hits.len());
            })
        });
    }
    let rects = gen_random_rects(4096, 12.0, 12.0);
    for &cells in &[16usize, 64, 256] {
        group.bench_function(format!("insert_query_random_cells{}", cells), |b| {
            b.iter(|| {
                let grid = build_grid(&rects, cells);
                let mut hits = HashSet::new();
                grid.find_rect(Rect::new(800.0, 800.0, 1200.0, 1200.0), &mut hits);
                black_box(hits.len());
            })
        });
    }
    group.finish();
}

fn bench_quadtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree");
    for &levels in &[4usize, 6, 8] {
        let config = QuadTreeConfig {
            max_items: 8,
            max_levels: levels,
        };
        let rects = gen_random_rects(4096, 12.0, 12.0);
        group.throughput(Throughput::Elements(rects.len() as u64));
        group.bench_function(format!("insert_query_random_levels{}", levels), |b| {
            b.iter(|| {
                let tree = build_tree(&rects, config);
                let mut hits = HashSet::new();
                tree.find_rect(Rect::new(800.0, 800.0, 1200.0, 1200.0), &mut hits);
                black_box(hits.len());
            })
        });
    }
    let clustered = gen_clustered_rects(16, 256, 120.0);
    group.bench_function("insert_query_clustered", |b| {
        b.iter(|| {
            let tree = build_tree(&clustered, QuadTreeConfig {
                max_items: 8,
                max_levels: 7,
            });
            let mut hits = HashSet::new();
            tree.find_rect(Rect::new(0.0, 0.0, 1000.0, 1000.0), &mut hits);
            black_box(hits.len());
        })
    });
    group.bench_function("erase_half_then_merge", |b| {
        b.iter_batched(
            || {
                build_tree(&clustered, QuadTreeConfig {
                    max_items: 8,
                    max_levels: 7,
                })
            },
            |mut tree| {
                let removed = tree.erase_where(|o, _| o % 2 == 0);
                black_box((removed, tree.node_count()));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_point_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_query_heavy");
    let rects = gen_clustered_rects(16, 256, 120.0);
    let grid = build_grid(&rects, 128);
    let tree = build_tree(&rects, QuadTreeConfig {
        max_items: 8,
        max_levels: 7,
    });
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let probes: Vec<Point> = (0..256)
        .map(|_| Point::new(rng.next_f64() * WORLD, rng.next_f64() * WORLD))
        .collect();
    for mode in [FindMode::All, FindMode::Closest, FindMode::First] {
        group.bench_function(format!("grid_{:?}", mode), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for p in &probes {
                    let mut out = Vec::new();
                    grid.find_point_radius(*p, 25.0, mode, &mut out);
                    total += out.len();
                }
                black_box(total);
            })
        });
        group.bench_function(format!("quadtree_{:?}", mode), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for p in &probes {
                    let mut out = Vec::new();
                    tree.find_point_radius(*p, 25.0, mode, &mut out);
                    total += out.len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid, bench_quadtree, bench_point_queries);
criterion_main!(benches);
