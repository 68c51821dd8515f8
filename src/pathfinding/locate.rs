//! Entry-tile selection: map a boundary point onto a concrete walkable
//! tile of the grid.
//!
//! Two-phase policy:
//!
//! 1. **Adjacency-preferred** — among tiles flush against the obstacle's
//!    boundary, pick the one whose center is Manhattan-closest to the
//!    query point. Starting a route from a tile that touches the obstacle
//!    avoids routes that visually jump away from the obstacle edge.
//! 2. **Fallback** — if no flush tile exists (obstacle not aligned to the
//!    lattice, or sitting at the area edge), pick the Manhattan-closest
//!    tile among all walkable tiles.
//!
//! The fallback guarantees a result whenever the grid is non-empty.

use crate::core::{Point2D, Rect};
use crate::grid::{Tile, TileGrid};

/// Tolerance for facing-edge coincidence. Tile edges are exact lattice
/// multiples, so this only has to absorb f32 rounding in obstacle input.
const EDGE_EPS: f32 = 1e-3;

/// Select the entry tile for a query point attached to an obstacle.
///
/// Returns `None` only when the grid has no walkable tiles.
pub fn entry_tile<'a>(grid: &'a TileGrid, point: Point2D, obstacle: &Rect) -> Option<&'a Tile> {
    let flush = nearest_by_center(
        grid.tiles().iter().filter(|t| is_flush(&t.rect, obstacle)),
        point,
    );
    flush.or_else(|| nearest_by_center(grid.tiles().iter(), point))
}

/// Tile whose center is Manhattan-closest to the point; ties go to the
/// first candidate in iteration (lattice scan) order.
fn nearest_by_center<'a>(
    tiles: impl Iterator<Item = &'a Tile>,
    point: Point2D,
) -> Option<&'a Tile> {
    let mut best: Option<(f32, &Tile)> = None;
    for tile in tiles {
        let d = tile.center().manhattan_distance(&point);
        if best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, tile));
        }
    }
    best.map(|(_, tile)| tile)
}

/// Whether a tile's edge lies flush against the obstacle's boundary:
/// facing edges coincide and the spans overlap on the perpendicular axis.
fn is_flush(tile: &Rect, obstacle: &Rect) -> bool {
    let spans_overlap_x = tile.x <= obstacle.right() && tile.right() >= obstacle.x;
    let spans_overlap_y = tile.y <= obstacle.bottom() && tile.bottom() >= obstacle.y;

    let flush_left = (tile.right() - obstacle.x).abs() <= EDGE_EPS;
    let flush_right = (obstacle.right() - tile.x).abs() <= EDGE_EPS;
    let flush_above = (tile.bottom() - obstacle.y).abs() <= EDGE_EPS;
    let flush_below = (obstacle.bottom() - tile.y).abs() <= EDGE_EPS;

    ((flush_left || flush_right) && spans_overlap_y)
        || ((flush_above || flush_below) && spans_overlap_x)
}
