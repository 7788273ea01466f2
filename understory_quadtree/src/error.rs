// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use thiserror::Error;

/// Errors returned when building a [`Quadtree`](crate::Quadtree).
///
/// Insertion and queries never fail; only an unusable configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// A capacity of zero would force a split on every insert.
    #[error("quadtree capacity must be at least 1")]
    ZeroCapacity,

    /// The root region has a negative or NaN extent.
    #[error("invalid quadtree region extents: width={width}, height={height}")]
    InvalidRegion {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}
