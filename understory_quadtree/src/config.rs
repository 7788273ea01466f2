// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tree tuning knobs.

use crate::error::Error;

/// Settings shared by every node of a tree.
///
/// Children inherit the root's configuration unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadtreeConfig {
    /// Points a node holds directly before routing new points to its children.
    pub capacity: usize,
    /// Depth at which nodes stop splitting and keep overflow points themselves.
    ///
    /// The root is depth 0. Without a cutoff, many points sharing one coordinate
    /// would split the same corner until the scalar runs out of precision.
    pub max_depth: usize,
}

impl QuadtreeConfig {
    /// Default node capacity.
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Default depth cutoff.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Set the per-node capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the depth cutoff.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
