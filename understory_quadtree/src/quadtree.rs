// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree node: insertion with lazy subdivision and range queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::QuadtreeConfig;
use crate::error::Error;
use crate::types::{Boundary, Point, Rect, Scalar};

/// One of the four children of a subdivided node.
///
/// `y` grows downward, so "north" is the half with the smaller `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Shares the parent's origin.
    NorthWest,
    /// Shifted right by half the parent's width.
    NorthEast,
    /// Shifted down by half the parent's height.
    SouthWest,
    /// Shifted right and down by half the parent's extents.
    SouthEast,
}

impl Quadrant {
    /// Order in which insertion offers a point to the children.
    pub const INSERT_ORDER: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Order in which queries concatenate child results.
    pub const QUERY_ORDER: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthWest,
        Self::SouthEast,
    ];

    const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    /// The region this quadrant covers within `parent`.
    pub fn of<T: Scalar>(self, parent: &Rect<T>) -> Rect<T> {
        let half_w = T::half(parent.width);
        let half_h = T::half(parent.height);
        let (x, y) = match self {
            Self::NorthWest => (parent.x, parent.y),
            Self::NorthEast => (parent.x + half_w, parent.y),
            Self::SouthWest => (parent.x, parent.y + half_h),
            Self::SouthEast => (parent.x + half_w, parent.y + half_h),
        };
        Rect::new(x, y, half_w, half_h)
    }
}

/// Point-region quadtree node.
///
/// Each node owns a fixed region and holds up to `capacity` points directly. The
/// insert that finds a node full splits it into four equal quadrants (once) and
/// routes the point into the first quadrant that contains it. If float rounding
/// leaves the point outside every quadrant, the insert is rejected. Points already
/// held stay where they are; nothing is ever moved or duplicated.
///
/// The tree owns its points. Queries return borrowed references in a deterministic
/// order: a node's own matches (insertion order) followed by its children's results
/// in [`Quadrant::QUERY_ORDER`].
///
/// A node also acts as a [`Boundary`] describing its own region.
pub struct Quadtree<P: Point> {
    region: Rect<P::Scalar>,
    config: QuadtreeConfig,
    depth: usize,
    items: Vec<P>,
    len: usize,
    children: Option<Box<[Self; 4]>>,
}

impl<P: Point> Quadtree<P> {
    /// Create an empty tree over `(x, y, width, height)` with the given per-node capacity.
    ///
    /// Uses the default depth cutoff; see [`QuadtreeConfig::max_depth`].
    pub fn new(
        x: P::Scalar,
        y: P::Scalar,
        width: P::Scalar,
        height: P::Scalar,
        capacity: usize,
    ) -> Result<Self, Error> {
        Self::with_config(
            Rect::new(x, y, width, height),
            QuadtreeConfig::default().with_capacity(capacity),
        )
    }

    /// Create an empty tree over `region` using `config`.
    ///
    /// Fails if the capacity is zero or the region has a negative or NaN extent.
    pub fn with_config(region: Rect<P::Scalar>, config: QuadtreeConfig) -> Result<Self, Error> {
        config.validate()?;
        if !region.has_valid_extents() {
            return Err(Error::InvalidRegion {
                width: Scalar::to_f64(region.width),
                height: Scalar::to_f64(region.height),
            });
        }
        Ok(Self::node(region, config, 0))
    }

    fn node(region: Rect<P::Scalar>, config: QuadtreeConfig, depth: usize) -> Self {
        Self {
            region,
            config,
            depth,
            items: Vec::new(),
            len: 0,
            children: None,
        }
    }

    /// The region this node indexes.
    pub fn region(&self) -> Rect<P::Scalar> {
        self.region
    }

    /// Points this node holds before delegating to children.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Configuration shared by the whole tree.
    pub fn config(&self) -> QuadtreeConfig {
        self.config
    }

    /// Depth at which nodes stop splitting.
    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Distance from the root (the root is 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node has split into four children.
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// Points held directly by this node, in insertion order.
    pub fn items(&self) -> &[P] {
        &self.items
    }

    /// The child covering `quadrant`, if this node has subdivided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children.as_deref().map(|c| &c[quadrant.index()])
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this subtree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a point. Returns `false`, leaving the tree contents untouched, if the
    /// point lies outside this node's region (half-open) or, after a split, outside
    /// every quadrant.
    ///
    /// A point outside the region is rejected before any split, so it never
    /// allocates children.
    pub fn insert(&mut self, point: P) -> bool {
        if !self.region.contains(&point) {
            tracing::trace!(region = ?self.region, "rejected point outside region");
            return false;
        }
        self.insert_contained(point)
    }

    fn insert_contained(&mut self, point: P) -> bool {
        if self.items.len() < self.config.capacity {
            self.items.push(point);
            self.len += 1;
            return true;
        }
        let Some(children) = self.subdivide() else {
            // Depth cutoff: keep overflow here.
            self.items.push(point);
            self.len += 1;
            return true;
        };
        let accepted = match Quadrant::INSERT_ORDER
            .iter()
            .map(|q| q.index())
            .find(|&i| children[i].region.contains(&point))
        {
            Some(i) => children[i].insert_contained(point),
            None => {
                tracing::trace!(
                    depth = self.depth,
                    region = ?self.region,
                    "rejected point outside every quadrant"
                );
                false
            }
        };
        if accepted {
            self.len += 1;
        }
        accepted
    }

    /// Split into four quadrants unless already split or past the depth cutoff.
    ///
    /// Idempotent: existing children are returned as-is.
    fn subdivide(&mut self) -> Option<&mut [Self; 4]> {
        if self.children.is_none() {
            if self.depth >= self.config.max_depth || !self.region.can_halve() {
                if self.items.len() == self.config.capacity {
                    tracing::debug!(
                        depth = self.depth,
                        region = ?self.region,
                        "depth cutoff reached, holding overflow points in place"
                    );
                }
                return None;
            }
            tracing::trace!(depth = self.depth, region = ?self.region, "subdividing");
            let depth = self.depth + 1;
            let child = |q: Quadrant| Self::node(q.of(&self.region), self.config, depth);
            self.children = Some(Box::new([
                child(Quadrant::NorthWest),
                child(Quadrant::NorthEast),
                child(Quadrant::SouthWest),
                child(Quadrant::SouthEast),
            ]));
        }
        self.children.as_deref_mut()
    }

    /// Every stored point inside `boundary` (half-open), each exactly once.
    ///
    /// Order: this node's matching items in insertion order, then each child's
    /// results in [`Quadrant::QUERY_ORDER`], recursively. Children whose region
    /// cannot overlap `boundary` are skipped.
    pub fn query<B>(&self, boundary: &B) -> Vec<&P>
    where
        B: Boundary<Scalar = P::Scalar> + ?Sized,
    {
        let mut out = Vec::new();
        self.query_into(boundary, &mut out);
        out
    }

    /// Like [`query`](Self::query), appending into an existing buffer.
    pub fn query_into<'a, B>(&'a self, boundary: &B, out: &mut Vec<&'a P>)
    where
        B: Boundary<Scalar = P::Scalar> + ?Sized,
    {
        out.extend(
            self.items
                .iter()
                .filter(|p| crate::is_within_bounds(*p, boundary)),
        );
        if let Some(children) = self.children.as_deref() {
            for q in Quadrant::QUERY_ORDER {
                let child = &children[q.index()];
                if child.region.intersects(boundary) {
                    child.query_into(boundary, out);
                }
            }
        }
    }

    /// Iterate every stored point in query order.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            stack: alloc::vec![self],
            current: core::slice::Iter::default(),
        }
    }
}

impl<P: Point> Boundary for Quadtree<P> {
    type Scalar = P::Scalar;

    fn x(&self) -> P::Scalar {
        self.region.x
    }

    fn y(&self) -> P::Scalar {
        self.region.y
    }

    fn width(&self) -> P::Scalar {
        self.region.width
    }

    fn height(&self) -> P::Scalar {
        self.region.height
    }
}

impl<P: Point> Debug for Quadtree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("region", &self.region)
            .field("capacity", &self.config.capacity)
            .field("depth", &self.depth)
            .field("items", &self.items.len())
            .field("len", &self.len)
            .field("subdivided", &self.is_subdivided())
            .finish_non_exhaustive()
    }
}

impl<'a, P: Point> IntoIterator for &'a Quadtree<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over every point of a tree, see [`Quadtree::iter`].
pub struct Iter<'a, P: Point> {
    stack: Vec<&'a Quadtree<P>>,
    current: core::slice::Iter<'a, P>,
}

impl<'a, P: Point> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<&'a P> {
        loop {
            if let Some(p) = self.current.next() {
                return Some(p);
            }
            let node = self.stack.pop()?;
            self.current = node.items.iter();
            if let Some(children) = node.children.as_deref() {
                // Reverse so the first quadrant in query order is popped first.
                for q in Quadrant::QUERY_ORDER.iter().rev() {
                    self.stack.push(&children[q.index()]);
                }
            }
        }
    }
}

impl<P: Point> Debug for Iter<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("pending_nodes", &self.stack.len())
            .field("pending_items", &self.current.len())
            .finish()
    }
}
