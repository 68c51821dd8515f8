//! End-to-end routing scenarios.
//!
//! Each test drives the full pipeline through [`RouteEngine`]: obstacle
//! load, grid build, closest-point sampling, entry-tile location, BFS, and
//! reconstruction.

use marga::{
    closest_boundary_points, entry_tile, AreaBounds, EngineConfig, Obstacle, ObstacleSet, Route,
    RouteEngine, RouteError, TileGrid,
};

fn obstacle(id: i64, x: f32, y: f32, width: f32, height: f32) -> Obstacle {
    Obstacle {
        id,
        name: format!("building-{}", id),
        info: String::new(),
        x,
        y,
        width,
        height,
        is_path: false,
    }
}

/// Every pair of consecutive route tiles must differ by exactly
/// `step × tile_size` along exactly one axis.
fn assert_route_adjacency(route: &Route, tile_size: f32) {
    let step = route.step as f32 * tile_size;
    for pair in route.tiles.windows(2) {
        let dx = (pair[1].rect.x - pair[0].rect.x).abs();
        let dy = (pair[1].rect.y - pair[0].rect.y).abs();
        let one_axis_step = ((dx - step).abs() < 1e-3 && dy < 1e-3)
            || (dx < 1e-3 && (dy - step).abs() < 1e-3);
        assert!(
            one_axis_step,
            "tiles {:?} and {:?} are not one step apart (step {})",
            pair[0].coord, pair[1].coord, route.step
        );
    }
}

#[test]
fn scenario_a_open_grid_route_is_hop_optimal() {
    // 900x700 area, tile 6, two far-apart buildings with open space between
    let set = ObstacleSet::new(vec![
        obstacle(1, 60.0, 60.0, 90.0, 60.0),
        obstacle(2, 600.0, 480.0, 120.0, 90.0),
    ]);
    let area = AreaBounds::new(900.0, 700.0);

    let mut engine = RouteEngine::with_defaults(area);
    engine.set_obstacles(set.clone());

    let route = engine.route_between(1, 2).unwrap();
    assert_eq!(route.step, 1, "fine attempt must succeed on an open grid");
    assert_route_adjacency(route, 6.0);

    // Hop count equals the Manhattan tile distance between the located
    // entry tiles: BFS optimality on an open grid.
    let config = EngineConfig::default();
    let grid = TileGrid::build(&set, area, config.grid.tile_size);
    let pair = closest_boundary_points(
        &set.get(1).unwrap().rect(),
        &set.get(2).unwrap().rect(),
        config.search.edge_samples,
    );
    let start = entry_tile(&grid, pair.start, &set.get(1).unwrap().rect()).unwrap();
    let end = entry_tile(&grid, pair.end, &set.get(2).unwrap().rect()).unwrap();

    let expected_hops = start.coord.manhattan_distance(&end.coord) as usize;
    assert_eq!(route.hops(), expected_hops);
}

#[test]
fn scenario_b_routes_around_blocking_obstacle() {
    // A wall sits between the two endpoints, open only along the bottom
    let blocker = obstacle(3, 360.0, 0.0, 30.0, 660.0);
    let set = ObstacleSet::new(vec![
        obstacle(1, 60.0, 300.0, 60.0, 60.0),
        obstacle(2, 600.0, 300.0, 60.0, 60.0),
        blocker.clone(),
    ]);

    let mut engine = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
    engine.set_obstacles(set);

    let route = engine.route_between(1, 2).unwrap();
    assert!(!route.is_empty());
    assert_route_adjacency(route, 6.0);

    for tile in &route.tiles {
        assert!(
            !tile.rect.intersects(&blocker.rect()),
            "route tile {:?} crosses the blocking obstacle",
            tile.coord
        );
    }
    // The only opening is below the wall
    assert!(
        route.tiles.iter().any(|t| t.rect.y >= 660.0),
        "route should detour through the gap under the wall"
    );
}

#[test]
fn scenario_c_fully_covered_area_reports_empty_grid() {
    let set = ObstacleSet::new(vec![
        obstacle(1, 0.0, 0.0, 900.0, 700.0),
        obstacle(2, 120.0, 120.0, 60.0, 60.0),
    ]);

    let mut engine = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
    engine.set_obstacles(set);

    assert!(engine.walkable_tiles().is_empty());
    assert!(matches!(
        engine.route_between(1, 2),
        Err(RouteError::EmptyGrid)
    ));
}

#[test]
fn scenario_d_route_to_self_is_invalid() {
    let set = ObstacleSet::new(vec![
        obstacle(1, 60.0, 60.0, 90.0, 60.0),
        obstacle(2, 600.0, 480.0, 120.0, 90.0),
    ]);

    let mut engine = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
    engine.set_obstacles(set);

    assert!(matches!(
        engine.route_between(2, 2),
        Err(RouteError::InvalidQuery(_))
    ));
}

#[test]
fn scenario_e_coarse_retry_bridges_alternating_grid() {
    // One row of five tiles; the blockers remove columns 1 and 3, leaving
    // walkable tiles only at columns 0, 2, 4 - connected at step 2 but not
    // at step 1. The endpoints sit flush against columns 0 and 4.
    let set = ObstacleSet::new(vec![
        obstacle(1, -6.0, 0.0, 6.0, 6.0),
        obstacle(2, 24.0, 6.0, 6.0, 6.0),
        obstacle(3, 6.0, 0.0, 6.0, 6.0),
        obstacle(4, 18.0, 0.0, 6.0, 6.0),
    ]);

    let mut engine = RouteEngine::with_defaults(AreaBounds::new(30.0, 6.0));
    engine.set_obstacles(set);

    let walkable: Vec<i32> = engine.walkable_tiles().iter().map(|t| t.coord.x).collect();
    assert_eq!(walkable, vec![0, 2, 4]);

    let route = engine.route_between(1, 2).unwrap();
    assert_eq!(route.step, 2, "fine attempt cannot connect the sublattice");
    assert_eq!(route.len(), 3);
    assert_route_adjacency(route, 6.0);
}

#[test]
fn walkable_tiles_never_overlap_obstacles() {
    let set = ObstacleSet::new(vec![
        obstacle(1, 100.0, 100.0, 150.0, 100.0),
        obstacle(2, 400.0, 150.0, 200.0, 150.0),
        obstacle(3, 250.0, 400.0, 180.0, 120.0),
    ]);

    let mut engine = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
    engine.set_obstacles(set.clone());

    for tile in engine.walkable_tiles() {
        for o in set.iter() {
            assert!(!tile.rect.intersects(&o.rect()));
        }
    }
}

#[test]
fn grid_rebuild_is_deterministic() {
    let records = vec![
        obstacle(1, 100.0, 100.0, 150.0, 100.0),
        obstacle(2, 400.0, 150.0, 200.0, 150.0),
    ];

    let mut engine = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
    engine.set_obstacles(ObstacleSet::new(records.clone()));
    let first: Vec<_> = engine.walkable_tiles().to_vec();

    engine.set_obstacles(ObstacleSet::new(records));
    assert_eq!(engine.walkable_tiles(), first.as_slice());
}

#[test]
fn route_is_reproducible_for_identical_inputs() {
    let records = vec![
        obstacle(1, 60.0, 60.0, 90.0, 60.0),
        obstacle(2, 600.0, 480.0, 120.0, 90.0),
        obstacle(3, 300.0, 200.0, 60.0, 180.0),
    ];

    let mut a = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
    a.set_obstacles(ObstacleSet::new(records.clone()));
    let route_a: Vec<_> = a.route_between(1, 2).unwrap().tiles.clone();

    let mut b = RouteEngine::with_defaults(AreaBounds::new(900.0, 700.0));
    b.set_obstacles(ObstacleSet::new(records));
    let route_b: Vec<_> = b.route_between(1, 2).unwrap().tiles.clone();

    assert_eq!(route_a, route_b);
}
