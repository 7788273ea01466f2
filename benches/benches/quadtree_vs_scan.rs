// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Quadtree, QuadtreeConfig, Rect};

const WORLD: f64 = 2000.0;

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

fn gen_random_points(count: usize) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| (rng.next_f64() * WORLD, rng.next_f64() * WORLD))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * WORLD, rng.next_f64() * WORLD));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(((cx + dx).clamp(0.0, WORLD - 1.0), (cy + dy).clamp(0.0, WORLD - 1.0)));
        }
    }
    out
}

fn build(points: &[(f64, f64)], capacity: usize) -> Quadtree<(f64, f64)> {
    let mut qt = Quadtree::with_config(
        Rect::new(0.0, 0.0, WORLD, WORLD),
        QuadtreeConfig::default().with_capacity(capacity),
    )
    .unwrap();
    for &p in points {
        qt.insert(p);
    }
    qt
}

fn gen_windows(count: usize, size: f64) -> Vec<Rect<f64>> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            Rect::new(
                rng.next_f64() * (WORLD - size),
                rng.next_f64() * (WORLD - size),
                size,
                size,
            )
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_random_points(n);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[4usize, 16] {
            group.bench_function(format!("random_n{}_cap{}", n, capacity), |b| {
                b.iter(|| black_box(build(&points, capacity)));
            });
        }
    }
    let clustered = gen_clustered_points(32, 512, 40.0);
    group.bench_function("clustered_cap8", |b| {
        b.iter(|| black_box(build(&clustered, 8)));
    });
    group.finish();
}

fn bench_query_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    for &n in &[10_000usize, 50_000] {
        let points = gen_random_points(n);
        let qt = build(&points, 8);
        let windows = gen_windows(64, 100.0);
        group.throughput(Throughput::Elements(windows.len() as u64));

        group.bench_function(format!("quadtree_n{}", n), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for w in &windows {
                    total += qt.query(w).len();
                }
                black_box(total);
            });
        });

        group.bench_function(format!("quadtree_reuse_buffer_n{}", n), |b| {
            b.iter_batched(
                || Vec::with_capacity(256),
                |mut buf| {
                    for w in &windows {
                        buf.clear();
                        qt.query_into(w, &mut buf);
                        black_box(buf.len());
                    }
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for w in &windows {
                    total += points.iter().filter(|p| w.contains(*p)).count();
                }
                black_box(total);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query_vs_scan);
criterion_main!(benches);
