//! Point and lattice coordinate types for the routing grid.

use serde::{Deserialize, Serialize};

/// Lattice coordinates (integer tile indices)
///
/// A tile at `GridCoord { x, y }` covers the world-space square from
/// `(x * tile_size, y * tile_size)` with side `tile_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by the given column/row deltas
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> GridCoord {
        GridCoord::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another coordinate, in lattice steps
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// World-space point (canvas units, f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance `|dx| + |dy|` to another point.
    ///
    /// The routing layer uses this metric throughout for point and tile
    /// proximity comparisons.
    #[inline]
    pub fn manhattan_distance(&self, other: &Point2D) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}
