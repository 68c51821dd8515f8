//! The routing engine: owned grid/route state and the route pipeline.
//!
//! [`RouteEngine`] owns the obstacle set, the walkable tile grid, and the
//! current route as explicit state; all mutation goes through its entry
//! points. Changing the obstacle set rebuilds the grid and drops any
//! in-flight route in the same call, so a route computed against a
//! superseded grid is never observable.

use log::{debug, info};

use crate::config::EngineConfig;
use crate::core::AreaBounds;
use crate::error::{Result, RouteError};
use crate::grid::{Tile, TileGrid};
use crate::obstacles::ObstacleSet;
use crate::pathfinding::bfs;
use crate::pathfinding::{closest_boundary_points, entry_tile, Route};

/// Tile-grid routing engine.
///
/// Construction fixes the area bounds and configuration; obstacles are
/// supplied (and replaced wholesale) via [`set_obstacles`], and routes are
/// computed per request via [`route_between`].
///
/// [`set_obstacles`]: RouteEngine::set_obstacles
/// [`route_between`]: RouteEngine::route_between
#[derive(Debug)]
pub struct RouteEngine {
    config: EngineConfig,
    area: AreaBounds,
    obstacles: ObstacleSet,
    grid: TileGrid,
    route: Option<Route>,
}

impl RouteEngine {
    /// Create an engine with no obstacles (the whole area is walkable).
    pub fn new(config: EngineConfig, area: AreaBounds) -> Self {
        let grid = TileGrid::build(&ObstacleSet::default(), area, config.grid.tile_size);
        Self {
            config,
            area,
            obstacles: ObstacleSet::default(),
            grid,
            route: None,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(area: AreaBounds) -> Self {
        Self::new(EngineConfig::default(), area)
    }

    /// Replace the obstacle set.
    ///
    /// Rebuilds the walkable grid from scratch and invalidates the current
    /// route in the same step; there is no incremental update.
    pub fn set_obstacles(&mut self, obstacles: ObstacleSet) {
        self.obstacles = obstacles;
        self.route = None;
        self.grid = TileGrid::build(&self.obstacles, self.area, self.config.grid.tile_size);
        info!(
            "grid rebuilt: {} walkable tiles for {} obstacles",
            self.grid.len(),
            self.obstacles.len()
        );
    }

    /// Compute the route between two obstacles, store it as the current
    /// route, and return it.
    ///
    /// Pipeline: closest boundary points → entry tiles → single-step BFS →
    /// doubled-step BFS fallback → reconstruction. The doubled-step retry
    /// searches the same tile set and only bridges odd/even lattice
    /// misalignment; it cannot cross a genuine obstacle wall.
    ///
    /// Any previously stored route is dropped before the search runs, so a
    /// failed request never leaves a stale route behind.
    pub fn route_between(&mut self, start_id: i64, end_id: i64) -> Result<&Route> {
        self.route = None;

        if start_id == end_id {
            return Err(RouteError::InvalidQuery(format!(
                "start and end obstacle are the same (id {})",
                start_id
            )));
        }

        let start = self
            .obstacles
            .get(start_id)
            .ok_or(RouteError::UnknownObstacle(start_id))?;
        let end = self
            .obstacles
            .get(end_id)
            .ok_or(RouteError::UnknownObstacle(end_id))?;

        let start_rect = start.rect();
        let end_rect = end.rect();
        if start_rect.is_degenerate() || end_rect.is_degenerate() {
            return Err(RouteError::InvalidQuery(
                "zero-area obstacle geometry".to_string(),
            ));
        }

        if self.grid.is_empty() {
            return Err(RouteError::EmptyGrid);
        }

        let pair = closest_boundary_points(&start_rect, &end_rect, self.config.search.edge_samples);

        // The grid is non-empty, so both locates succeed.
        let start_coord = entry_tile(&self.grid, pair.start, &start_rect)
            .ok_or(RouteError::EmptyGrid)?
            .coord;
        let end_coord = entry_tile(&self.grid, pair.end, &end_rect)
            .ok_or(RouteError::EmptyGrid)?
            .coord;

        let max_iterations = self.config.search.max_iterations;
        let mut step = 1;
        let mut outcome = bfs::search(&self.grid, start_coord, end_coord, step, max_iterations);
        if !outcome.found {
            step = self.config.search.coarse_step;
            debug!(
                "fine search failed after {} dequeues, retrying with step {}",
                outcome.iterations, step
            );
            outcome = bfs::search(&self.grid, start_coord, end_coord, step, max_iterations);
        }
        if !outcome.found {
            return Err(RouteError::NoPathFound);
        }

        let coords = bfs::reconstruct(&outcome, start_coord, end_coord)?;
        let mut tiles = Vec::with_capacity(coords.len());
        for coord in coords {
            match self.grid.tile_at(coord) {
                Some(tile) => tiles.push(tile.clone()),
                None => {
                    debug_assert!(false, "search visited a coordinate outside the grid");
                    return Err(RouteError::NoPathFound);
                }
            }
        }

        info!(
            "route {} -> {}: {} tiles, step {}",
            start_id,
            end_id,
            tiles.len(),
            step
        );
        Ok(self.route.insert(Route { tiles, step }))
    }

    /// Drop the current route (e.g. when the selection is cleared).
    pub fn clear_route(&mut self) {
        self.route = None;
    }

    /// Walkable tiles in lattice scan order, for rendering collaborators.
    pub fn walkable_tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    /// The most recently computed route, if any.
    pub fn current_route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// The current obstacle set.
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Area bounds the grid covers.
    pub fn area(&self) -> AreaBounds {
        self.area
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
