//! Axis-aligned rectangle and the geometric predicates the router is
//! built on.
//!
//! [`Rect`] is the fundamental shape for obstacles, walkable tiles, and
//! query regions. Two predicates carry all of the geometric weight:
//!
//! - [`Rect::intersects`] — overlap test with *strict* inequalities, so
//!   rectangles whose edges exactly touch are treated as not intersecting.
//!   Tile generation relies on this: a tile flush against an obstacle wall
//!   is still walkable.
//! - [`Rect::contains_point`] — inclusive on all four boundaries, so
//!   corners and edge points count as inside.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned rectangle `{x, y, width, height}`.
///
/// `(x, y)` is the top-left corner in canvas convention (y grows downward);
/// width and height are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True when the rectangle has no area (zero width or height).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether two rectangles overlap.
    ///
    /// True unless one rectangle lies strictly outside the other on some
    /// axis. Exactly touching edges do NOT count as an overlap. Commutative:
    /// `a.intersects(&b) == b.intersects(&a)`.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x > self.x + self.width
            || other.x + other.width < self.x
            || other.y > self.y + self.height
            || other.y + other.height < self.y)
    }

    /// Check whether a point lies within or on the boundary of the
    /// rectangle (all four comparisons inclusive).
    #[inline]
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}
