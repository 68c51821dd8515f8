//! Walkable tile lattice generation.
//!
//! [`TileGrid::build`] rasterizes the free space of an area into fixed-size
//! square tiles: the candidate lattice starts at the origin, steps by the
//! tile size, and a candidate survives iff it overlaps no obstacle. The
//! result is the implicit graph the route search runs on.
//!
//! The grid also carries a coordinate index so "the tile at lattice
//! coordinate (x, y)" is an O(1) lookup during neighbor expansion.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::{AreaBounds, GridCoord, Point2D, Rect};
use crate::obstacles::{Obstacle, ObstacleSet};

/// A walkable tile of the routing grid.
///
/// Tiles carry synthetic negative ids (disjoint from obstacle ids),
/// assigned in lattice scan order starting at −1.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tile {
    /// Synthetic negative id
    pub id: i64,
    /// Lattice coordinate (column, row)
    pub coord: GridCoord,
    /// World-space footprint, side length = tile size
    pub rect: Rect,
}

impl Tile {
    /// Center point of the tile
    #[inline]
    pub fn center(&self) -> Point2D {
        self.rect.center()
    }

    /// Render the tile as a map record, the layout emitted walkable tiles
    /// use in the obstacle definition file (`isPath: true`).
    pub fn to_record(&self) -> Obstacle {
        Obstacle {
            id: self.id,
            name: "path".to_string(),
            info: "walkable path".to_string(),
            x: self.rect.x,
            y: self.rect.y,
            width: self.rect.width,
            height: self.rect.height,
            is_path: true,
        }
    }
}

/// The walkable tile set plus its coordinate index.
#[derive(Clone, Debug, Default)]
pub struct TileGrid {
    /// Tiles in lattice scan order (row-major, y outer, x inner)
    tiles: Vec<Tile>,
    /// Lattice coordinate → index into `tiles`
    index: HashMap<GridCoord, usize>,
    tile_size: f32,
}

impl TileGrid {
    /// Create an empty grid (no walkable tiles).
    pub fn empty(tile_size: f32) -> Self {
        Self {
            tiles: Vec::new(),
            index: HashMap::new(),
            tile_size,
        }
    }

    /// Generate the walkable tile set for an area.
    ///
    /// Scans the candidate lattice row-major (y outer, x inner) from the
    /// origin; each candidate is tested against every obstacle and kept iff
    /// it intersects none (touching edges are not an intersection, so tiles
    /// flush against an obstacle wall survive). Ids decrease from −1 in
    /// scan order.
    ///
    /// The output replaces any previous tile set wholesale, and is a
    /// deterministic function of (obstacles, area, tile_size): same inputs,
    /// same tiles, same order. An obstacle set covering the whole area
    /// yields an empty grid.
    pub fn build(obstacles: &ObstacleSet, area: AreaBounds, tile_size: f32) -> Self {
        let mut grid = Self::empty(tile_size);
        if area.is_empty() || tile_size <= 0.0 {
            return grid;
        }

        let mut next_id: i64 = -1;
        let mut row: i32 = 0;
        // Lattice positions are computed as index * tile_size rather than
        // accumulated, so tile edges stay exact multiples of the step.
        while (row as f32) * tile_size < area.height {
            let mut col: i32 = 0;
            while (col as f32) * tile_size < area.width {
                let rect = Rect::new(
                    col as f32 * tile_size,
                    row as f32 * tile_size,
                    tile_size,
                    tile_size,
                );

                let blocked = obstacles.iter().any(|o| rect.intersects(&o.rect()));
                if !blocked {
                    let coord = GridCoord::new(col, row);
                    grid.index.insert(coord, grid.tiles.len());
                    grid.tiles.push(Tile {
                        id: next_id,
                        coord,
                        rect,
                    });
                    next_id -= 1;
                }
                col += 1;
            }
            row += 1;
        }

        grid
    }

    /// Tiles in lattice scan order
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at the given lattice coordinate, if walkable. O(1).
    #[inline]
    pub fn tile_at(&self, coord: GridCoord) -> Option<&Tile> {
        self.index.get(&coord).map(|&i| &self.tiles[i])
    }

    /// Whether a walkable tile exists at the coordinate. O(1).
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.index.contains_key(&coord)
    }

    /// Side length of a tile
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Number of walkable tiles
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(id: i64, x: f32, y: f32, width: f32, height: f32) -> Obstacle {
        Obstacle {
            id,
            name: format!("obstacle-{}", id),
            info: String::new(),
            x,
            y,
            width,
            height,
            is_path: false,
        }
    }

    #[test]
    fn test_open_area_is_fully_tiled() {
        let grid = TileGrid::build(&ObstacleSet::default(), AreaBounds::new(60.0, 30.0), 6.0);
        // 10 columns x 5 rows
        assert_eq!(grid.len(), 50);
        assert_eq!(grid.tiles()[0].coord, GridCoord::new(0, 0));
        assert_eq!(grid.tiles()[0].id, -1);
        // Row-major scan order: second tile is the next column
        assert_eq!(grid.tiles()[1].coord, GridCoord::new(1, 0));
    }

    #[test]
    fn test_final_row_extends_past_boundary() {
        // Height 10 with tile 6: rows at y=0 and y=6, the latter reaching 12
        let grid = TileGrid::build(&ObstacleSet::default(), AreaBounds::new(6.0, 10.0), 6.0);
        assert_eq!(grid.len(), 2);
        let last = &grid.tiles()[1];
        assert_eq!(last.rect.y, 6.0);
        assert_eq!(last.rect.bottom(), 12.0);
    }

    #[test]
    fn test_tiles_never_overlap_obstacles() {
        let set = ObstacleSet::new(vec![
            obstacle(1, 10.0, 10.0, 20.0, 15.0),
            obstacle(2, 40.0, 5.0, 8.0, 30.0),
        ]);
        let grid = TileGrid::build(&set, AreaBounds::new(60.0, 48.0), 6.0);
        for tile in grid.tiles() {
            for o in set.iter() {
                assert!(
                    !tile.rect.intersects(&o.rect()),
                    "tile {:?} overlaps obstacle {}",
                    tile.coord,
                    o.id
                );
            }
        }
    }

    #[test]
    fn test_flush_tiles_survive() {
        // Obstacle aligned to the lattice: tiles touching its edges stay
        let set = ObstacleSet::new(vec![obstacle(1, 6.0, 6.0, 6.0, 6.0)]);
        let grid = TileGrid::build(&set, AreaBounds::new(18.0, 18.0), 6.0);
        assert_eq!(grid.len(), 8);
        assert!(!grid.contains(GridCoord::new(1, 1)));
        assert!(grid.contains(GridCoord::new(0, 1)));
        assert!(grid.contains(GridCoord::new(2, 1)));
    }

    #[test]
    fn test_ids_negative_descending_in_scan_order() {
        let grid = TileGrid::build(&ObstacleSet::default(), AreaBounds::new(18.0, 6.0), 6.0);
        let ids: Vec<i64> = grid.tiles().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![-1, -2, -3]);
    }

    #[test]
    fn test_determinism() {
        let set = ObstacleSet::new(vec![obstacle(1, 12.0, 0.0, 9.0, 21.0)]);
        let a = TileGrid::build(&set, AreaBounds::new(90.0, 70.0), 6.0);
        let b = TileGrid::build(&set, AreaBounds::new(90.0, 70.0), 6.0);
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_full_coverage_yields_empty_grid() {
        let set = ObstacleSet::new(vec![obstacle(1, 0.0, 0.0, 100.0, 100.0)]);
        let grid = TileGrid::build(&set, AreaBounds::new(90.0, 70.0), 6.0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_coordinate_index_lookup() {
        let grid = TileGrid::build(&ObstacleSet::default(), AreaBounds::new(30.0, 30.0), 6.0);
        let tile = grid.tile_at(GridCoord::new(2, 3)).unwrap();
        assert_eq!(tile.rect.x, 12.0);
        assert_eq!(tile.rect.y, 18.0);
        assert!(grid.tile_at(GridCoord::new(50, 0)).is_none());
    }

    #[test]
    fn test_tile_record_roundtrip_shape() {
        let grid = TileGrid::build(&ObstacleSet::default(), AreaBounds::new(6.0, 6.0), 6.0);
        let record = grid.tiles()[0].to_record();
        assert!(record.is_path);
        assert_eq!(record.id, -1);
        assert_eq!(record.name, "path");
        // An emitted record must never survive reloading as an obstacle
        let reloaded = ObstacleSet::new(vec![record]);
        assert!(reloaded.is_empty());
    }
}
