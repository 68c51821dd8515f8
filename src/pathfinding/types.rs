//! Route result types.

use serde::Serialize;

use crate::grid::Tile;

/// An ordered tile sequence from the located start tile to the located end
/// tile, inclusive.
///
/// Consecutive tiles always differ by exactly `step × tile_size` along
/// exactly one axis (`step` is 1 for the fine search, the configured
/// coarse step when the fallback pass produced the route).
#[derive(Clone, Debug, Serialize)]
pub struct Route {
    /// Tiles start → end inclusive
    pub tiles: Vec<Tile>,
    /// Lattice step the winning search attempt used
    pub step: i32,
}

impl Route {
    /// Number of tiles on the route
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tile-to-tile hops (one less than the tile count)
    #[inline]
    pub fn hops(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }
}
