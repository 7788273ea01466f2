// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert a handful of points, including some outside the region, then run a range query.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_quadtree_demos --example quadtree_basics`

use tracing_subscriber::EnvFilter;
use understory_quadtree::{Quadrant, Quadtree, Rect};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut qt: Quadtree<(f32, f32)> =
        Quadtree::new(0.0, 0.0, 100.0, 100.0, 4).expect("valid region and capacity");

    for p in [
        (0.0, 0.0),
        (100.0, 100.0),
        (50.0, 0.0),
        (0.0, 50.0),
        (20.0, 10.0),
        (99.0, 99.0),
        (120.0, 110.0),
        (-1.0, -2.0),
    ] {
        println!("insert {:?} -> {}", p, qt.insert(p));
    }
    println!("{:?}", qt);

    for q in Quadrant::QUERY_ORDER {
        if let Some(child) = qt.child(q) {
            println!("  {:?}: {:?} holds {:?}", q, child.region(), child.items());
        }
    }

    let window = Rect::new(0.0, 0.0, 50.0, 50.0);
    println!("query {:?}: {:?}", window, qt.query(&window));
}
