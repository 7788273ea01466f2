// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Quadtree: a point-region quadtree for 2D range queries.
//!
//! Understory Quadtree accelerates "which points fall inside this rectangle?" compared to a linear scan.
//!
//! - Build a tree over a fixed rectangular region with a per-node capacity.
//! - Insert points; a node that is full splits once into four equal quadrants and routes later points down.
//! - Query any rectangle and get back every stored point inside it, in a deterministic order.
//!
//! The tree is generic over the stored point type: anything implementing [`Point`] (an `x`/`y`
//! accessor pair over an `f32` or `f64` [`Scalar`]) can be indexed, so payloads never need to be
//! copied into a crate-specific struct. Query windows are anything implementing [`Boundary`],
//! including [`Rect`] and a [`Quadtree`] node itself.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Quadtree, Rect};
//!
//! // A 100×100 region, up to 4 points per node.
//! let mut qt: Quadtree<(f32, f32)> = Quadtree::new(0.0, 0.0, 100.0, 100.0, 4).unwrap();
//! for p in [(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (20.0, 10.0), (99.0, 99.0)] {
//!     assert!(qt.insert(p));
//! }
//! // Outside the region: rejected, nothing stored.
//! assert!(!qt.insert((100.0, 100.0)));
//! assert!(qt.is_subdivided());
//!
//! // Right and bottom edges of the window are exclusive.
//! let hits = qt.query(&Rect::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(hits, [&(0.0, 0.0), &(20.0, 10.0)]);
//! ```
//!
//! ## Containment
//!
//! Every test is half-open: `x <= p.x < x + width` and `y <= p.y < y + height`
//! (see [`is_within_bounds`]). Along the edge shared by two quadrants a point belongs
//! to exactly one of them, so each accepted point is stored in exactly one node.
//!
//! ## Ordering
//!
//! A query returns a node's own matching points in insertion order, followed by the
//! results of its children in north-east, north-west, south-west, south-east order
//! (see [`Quadrant::QUERY_ORDER`]). Insertion offers a point to the children in
//! north-east, north-west, south-east, south-west order ([`Quadrant::INSERT_ORDER`]).
//!
//! ## Depth cutoff
//!
//! Points sharing a coordinate always land in the same quadrant, so splitting alone
//! cannot separate them. Nodes stop splitting at [`QuadtreeConfig::max_depth`], or once
//! their region is too small to halve in the scalar type, and keep further points
//! directly instead.
//!
//! ```rust
//! use understory_quadtree::{Quadtree, QuadtreeConfig, Rect};
//!
//! let cfg = QuadtreeConfig::default().with_capacity(1).with_max_depth(2);
//! let mut qt: Quadtree<[f64; 2]> = Quadtree::with_config(Rect::new(0.0, 0.0, 1.0, 1.0), cfg).unwrap();
//! for _ in 0..10 {
//!     assert!(qt.insert([0.1, 0.1]));
//! }
//! assert_eq!(qt.len(), 10);
//! ```
//!
//! ## Non-goals
//!
//! Points cannot be removed and quadrants never merge. The tree is not synchronized:
//! share it across threads behind a lock if you need to insert concurrently.
//!
//! ## Features
//!
//! - `kurbo`: [`Point`] for `kurbo::Point` and [`Boundary`] for `kurbo::Rect`.
//! - `serde`: `Serialize`/`Deserialize` for [`QuadtreeConfig`] and [`Rect`].

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod quadtree;
pub mod types;

pub use config::QuadtreeConfig;
pub use error::Error;
pub use quadtree::{Iter, Quadrant, Quadtree};
pub use types::{Boundary, Point, Rect, Scalar, is_within_bounds};
