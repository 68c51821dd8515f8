//! # Marga: Tile-Grid Routing Engine
//!
//! A routing engine for 2D maps of axis-aligned rectangular obstacles:
//! it rasterizes the free space into a lattice of fixed-size walkable
//! tiles and answers obstacle-to-obstacle route requests with
//! breadth-first search over the implicit grid graph.
//!
//! ## Features
//!
//! - **Walkable tile generation**: deterministic lattice scan, tiles kept
//!   iff they overlap no obstacle (touching edges are not an overlap)
//! - **Closest-point routing endpoints**: sampled boundary points under
//!   the Manhattan metric, mapped to adjacency-preferred entry tiles
//! - **Shortest routes in tile hops**: FIFO BFS with an O(1) coordinate
//!   index, a bounded iteration cap, and a doubled-step fallback pass
//! - **Explicit outcomes**: empty grids, unroutable pairs, and invalid
//!   queries are reported as typed errors, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{AreaBounds, Obstacle, ObstacleSet, RouteEngine};
//!
//! let obstacles = ObstacleSet::from_json_str(
//!     r#"[
//!         { "id": 1, "name": "Library", "info": "A hub of learning.",
//!           "x": 60, "y": 60, "width": 90, "height": 60 },
//!         { "id": 2, "name": "Gymnasium", "info": "Sports and events.",
//!           "x": 600, "y": 480, "width": 120, "height": 90 }
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut engine = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
//! engine.set_obstacles(obstacles);
//!
//! let route = engine.route_between(1, 2).unwrap();
//! println!("route: {} tiles, {} hops", route.len(), route.hops());
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules, leaves first:
//!
//! - [`core`]: fundamental types (Point2D, GridCoord, Rect, AreaBounds)
//! - [`config`]: configuration types and TOML loading
//! - [`obstacles`]: obstacle records and the map definition loader
//! - [`grid`]: walkable tile lattice generation and coordinate indexing
//! - [`pathfinding`]: closest-point sampling, entry-tile location, BFS
//! - [`engine`]: the owning [`RouteEngine`] with the route pipeline
//!
//! ## Data Flow
//!
//! ```text
//!        ┌──────────────────┐   obstacle-set change
//!        │   ObstacleSet    │─────────────┐
//!        └────────┬─────────┘             ▼
//!                 │              ┌──────────────────┐
//!                 │              │    TileGrid      │  walkable lattice +
//!                 │              │     (build)      │  coordinate index
//!                 │              └────────┬─────────┘
//!     route request (ids)                 │
//!                 ▼                       │
//!        ┌──────────────────┐             │
//!        │  Closest points  │             │
//!        │ (boundary pairs) │             │
//!        └────────┬─────────┘             │
//!                 ▼                       ▼
//!        ┌──────────────────┐    ┌──────────────────┐
//!        │   Entry tiles    │───►│       BFS        │  fine pass, then
//!        │   (locate ×2)    │    │  (step 1 → 2)    │  doubled-step retry
//!        └──────────────────┘    └────────┬─────────┘
//!                                         ▼
//!                                ┌──────────────────┐
//!                                │      Route       │  ordered tiles,
//!                                │  (reconstruct)   │  start → end
//!                                └──────────────────┘
//! ```
//!
//! All computation is single-threaded and synchronous; every request runs
//! to completion within one call, and grid plus in-flight route are always
//! invalidated together when obstacles change.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod grid;
pub mod obstacles;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::{EngineConfig, GridSection, SearchSection};
pub use core::{AreaBounds, GridCoord, Point2D, Rect};
pub use engine::RouteEngine;
pub use error::{Result, RouteError};
pub use grid::{Tile, TileGrid};
pub use obstacles::{Obstacle, ObstacleSet};
pub use pathfinding::{closest_boundary_points, entry_tile, ClosestPair, Route};
