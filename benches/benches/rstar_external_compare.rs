// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Quadtree, Rect};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push([x as f64 * cell + 0.5, y as f64 * cell + 0.5]);
        }
    }
    out
}

// rstar envelopes are closed; shrink the far corner to mimic half-open bounds.
fn half_open_envelope(window: &Rect<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners(
        [window.x, window.y],
        [
            (window.x + window.width).next_down(),
            (window.y + window.height).next_down(),
        ],
    )
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    for &n in &[64usize, 128] {
        let cell = 10.0;
        let side = n as f64 * cell;
        let points = gen_grid_points(n, cell);
        let window = Rect::new(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::<[f64; 2]>::new(0.0, 0.0, side, side, 8).unwrap(),
                |mut qt| {
                    for &p in &points {
                        qt.insert(p);
                    }
                    black_box(qt.query(&window).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = half_open_envelope(&window);
                    black_box(tree.locate_in_envelope(&aabb).count());
                },
                BatchSize::SmallInput,
            )
        });

        let qt = {
            let mut qt = Quadtree::<[f64; 2]>::new(0.0, 0.0, side, side, 8).unwrap();
            for &p in &points {
                qt.insert(p);
            }
            qt
        };
        let tree = RTree::bulk_load(points.clone());
        group.bench_function(format!("quadtree_query_only_n{}", n), |b| {
            b.iter(|| black_box(qt.query(&window).len()));
        });
        group.bench_function(format!("rstar_query_only_n{}", n), |b| {
            let aabb = half_open_envelope(&window);
            b.iter(|| black_box(tree.locate_in_envelope(&aabb).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);
