// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate scalars, the point and boundary capabilities, and the half-open
//! containment test shared by insertion and queries.

use core::fmt::Debug;
use core::ops::{Add, Sub};

/// Floating-point scalar used for coordinates and extents.
///
/// Implemented for `f32` and `f64`. The quadtree only needs addition, subtraction,
/// halving, and ordering; NaN compares false everywhere, so NaN points are never
/// contained by any region.
pub trait Scalar: Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> {
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Half of `v` (used to split a region into quadrants).
    fn half(v: Self) -> Self;

    /// Convert to `f64` for diagnostics and error reporting.
    fn to_f64(v: Self) -> f64;
}

impl Scalar for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        v * 0.5
    }

    #[inline]
    fn to_f64(v: Self) -> f64 {
        f64::from(v)
    }
}

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        v * 0.5
    }

    #[inline]
    fn to_f64(v: Self) -> f64 {
        v
    }
}

/// Anything with a 2D position.
///
/// The tree stores values of this type opaquely and only ever reads `x`/`y`.
pub trait Point {
    /// Coordinate scalar.
    type Scalar: Scalar;

    /// Horizontal coordinate.
    fn x(&self) -> Self::Scalar;

    /// Vertical coordinate (grows downward: "south" is larger `y`).
    fn y(&self) -> Self::Scalar;
}

/// Anything describing an axis-aligned rectangle by origin and extents.
///
/// Extents are expected to be non-negative. Query windows and node regions
/// both use this shape.
pub trait Boundary {
    /// Coordinate scalar.
    type Scalar: Scalar;

    /// Left edge.
    fn x(&self) -> Self::Scalar;

    /// Top edge.
    fn y(&self) -> Self::Scalar;

    /// Horizontal extent.
    fn width(&self) -> Self::Scalar;

    /// Vertical extent.
    fn height(&self) -> Self::Scalar;
}

impl<P: Point + ?Sized> Point for &P {
    type Scalar = P::Scalar;

    #[inline]
    fn x(&self) -> Self::Scalar {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> Self::Scalar {
        (**self).y()
    }
}

impl<T: Scalar> Point for (T, T) {
    type Scalar = T;

    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }
}

impl<T: Scalar> Point for [T; 2] {
    type Scalar = T;

    #[inline]
    fn x(&self) -> T {
        self[0]
    }

    #[inline]
    fn y(&self) -> T {
        self[1]
    }
}

impl<B: Boundary + ?Sized> Boundary for &B {
    type Scalar = B::Scalar;

    #[inline]
    fn x(&self) -> Self::Scalar {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> Self::Scalar {
        (**self).y()
    }

    #[inline]
    fn width(&self) -> Self::Scalar {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> Self::Scalar {
        (**self).height()
    }
}

/// Whether `p` lies within `b` using half-open intervals on both axes.
///
/// `b.x <= p.x < b.x + b.width` and `b.y <= p.y < b.y + b.height`: the left and
/// top edges are inside, the right and bottom edges are not. Adjacent quadrants
/// therefore never both claim a point on their shared edge.
#[inline]
pub fn is_within_bounds<P, B>(p: &P, b: &B) -> bool
where
    P: Point + ?Sized,
    B: Boundary<Scalar = P::Scalar> + ?Sized,
{
    let (px, py) = (p.x(), p.y());
    let (bx, by) = (b.x(), b.y());
    px >= bx && px < bx + b.width() && py >= by && py < by + b.height()
}

/// Axis-aligned rectangle given by origin and extents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Rect<T> {
    /// Create a rectangle from origin and extents.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Scalar> Rect<T> {
    /// Copy the shape of any boundary.
    pub fn from_boundary<B: Boundary<Scalar = T> + ?Sized>(b: &B) -> Self {
        Self::new(b.x(), b.y(), b.width(), b.height())
    }

    /// Half-open point containment, see [`is_within_bounds`].
    #[inline]
    pub fn contains<P: Point<Scalar = T> + ?Sized>(&self, p: &P) -> bool {
        is_within_bounds(p, self)
    }

    /// Whether some point could lie in both `self` and `other` under half-open containment.
    ///
    /// Rectangles that merely touch along an edge do not intersect, and a rectangle
    /// with zero width or height intersects nothing.
    #[inline]
    pub fn intersects<B: Boundary<Scalar = T> + ?Sized>(&self, other: &B) -> bool {
        let (ox, oy) = (other.x(), other.y());
        let (ow, oh) = (other.width(), other.height());
        let zero = T::zero();
        self.width > zero
            && self.height > zero
            && ow > zero
            && oh > zero
            && self.x < ox + ow
            && ox < self.x + self.width
            && self.y < oy + oh
            && oy < self.y + self.height
    }

    /// Whether both extents are non-negative (false for NaN extents).
    pub fn has_valid_extents(&self) -> bool {
        self.width >= T::zero() && self.height >= T::zero()
    }

    /// Whether halving both axes yields four quadrants that are each non-empty.
    ///
    /// False once the midpoint rounds onto an edge in the scalar type.
    pub fn can_halve(&self) -> bool {
        let mid_x = self.x + T::half(self.width);
        let mid_y = self.y + T::half(self.height);
        mid_x > self.x
            && mid_x < self.x + self.width
            && mid_y > self.y
            && mid_y < self.y + self.height
    }
}

impl<T: Scalar> Boundary for Rect<T> {
    type Scalar = T;

    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }

    #[inline]
    fn width(&self) -> T {
        self.width
    }

    #[inline]
    fn height(&self) -> T {
        self.height
    }
}

#[cfg(feature = "kurbo")]
impl Point for kurbo::Point {
    type Scalar = f64;

    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(feature = "kurbo")]
impl Boundary for kurbo::Rect {
    type Scalar = f64;

    #[inline]
    fn x(&self) -> f64 {
        self.x0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y0
    }

    #[inline]
    fn width(&self) -> f64 {
        kurbo::Rect::width(self)
    }

    #[inline]
    fn height(&self) -> f64 {
        kurbo::Rect::height(self)
    }
}
