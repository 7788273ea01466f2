// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index Kurbo points and query with a Kurbo rectangle.
//!
//! Also shows storing references, so the payloads stay owned by the caller.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_kurbo`

use kurbo::{Point, Rect};
use understory_quadtree::{Quadtree, QuadtreeConfig};

#[derive(Debug)]
struct Marker {
    label: String,
    at: Point,
}

impl understory_quadtree::Point for Marker {
    type Scalar = f64;

    fn x(&self) -> f64 {
        self.at.x
    }

    fn y(&self) -> f64 {
        self.at.y
    }
}

fn main() {
    let markers: Vec<Marker> = (0..64)
        .map(|i| Marker {
            label: format!("m{i}"),
            at: Point::new(f64::from(i % 8) * 25.0 + 3.0, f64::from(i / 8) * 25.0 + 3.0),
        })
        .collect();

    let world = understory_quadtree::Rect::new(0.0, 0.0, 200.0, 200.0);
    let cfg = QuadtreeConfig::default().with_capacity(4);
    let mut by_ref: Quadtree<&Marker> = Quadtree::with_config(world, cfg).expect("valid config");
    for m in &markers {
        by_ref.insert(m);
    }

    let viewport = Rect::new(40.0, 40.0, 110.0, 90.0);
    let labels: Vec<&str> = by_ref
        .query(&viewport)
        .into_iter()
        .map(|m| m.label.as_str())
        .collect();
    println!("markers in {:?}: {:?}", viewport, labels);

    // Plain Kurbo points work too.
    let mut points: Quadtree<Point> = Quadtree::with_config(world, cfg).expect("valid config");
    for m in &markers {
        points.insert(m.at);
    }
    println!(
        "{} of {} points in viewport",
        points.query(&viewport).len(),
        points.len()
    );
}
