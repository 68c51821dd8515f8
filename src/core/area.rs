//! Bounds of the region to tile.

use serde::{Deserialize, Serialize};

/// Width and height of the rectangular area the tile lattice covers,
/// anchored at the origin.
///
/// The lattice starts at (0, 0) and steps by the tile size; a final
/// row/column may extend past the boundary (tiles are never clipped).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaBounds {
    /// Horizontal extent of the area
    pub width: f32,
    /// Vertical extent of the area
    pub height: f32,
}

impl AreaBounds {
    /// Create new area bounds
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is non-positive (nothing to tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(AreaBounds::new(0.0, 100.0).is_empty());
        assert!(AreaBounds::new(100.0, -1.0).is_empty());
        assert!(!AreaBounds::new(900.0, 700.0).is_empty());
    }
}
