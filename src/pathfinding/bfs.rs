//! Breadth-first search over the implicit tile-grid graph, plus path
//! reconstruction.
//!
//! Each walkable tile is a node; edges connect tiles exactly `step`
//! lattice units apart in one of the four axis directions. FIFO processing
//! order guarantees the predecessor chain yields a path that is shortest
//! in number of tile hops (ties resolved by enqueue order, deterministic
//! for a given grid).
//!
//! The searcher runs with `step = 1` first; callers retry with a doubled
//! step to bridge odd/even lattice misalignment. A hard dequeue cap bounds
//! pathological inputs; hitting it is identical to frontier exhaustion.

use log::{debug, trace};
use std::collections::{HashMap, VecDeque};

use crate::core::GridCoord;
use crate::error::{Result, RouteError};
use crate::grid::TileGrid;

/// Neighbor directions in fixed expansion order: up, down, left, right.
const NEIGHBOR_DIRS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Outcome of one search attempt.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    /// Whether the goal tile was dequeued
    pub found: bool,
    /// Discovered coordinate → predecessor coordinate (`None` for the
    /// start tile)
    pub predecessors: HashMap<GridCoord, Option<GridCoord>>,
    /// Dequeues performed
    pub iterations: usize,
}

/// Run one BFS attempt from `start` to `goal` with the given lattice step.
pub(crate) fn search(
    grid: &TileGrid,
    start: GridCoord,
    goal: GridCoord,
    step: i32,
    max_iterations: usize,
) -> SearchOutcome {
    let mut predecessors: HashMap<GridCoord, Option<GridCoord>> = HashMap::new();
    let mut frontier: VecDeque<GridCoord> = VecDeque::new();

    predecessors.insert(start, None);
    frontier.push_back(start);

    let mut iterations = 0;

    while let Some(current) = frontier.pop_front() {
        iterations += 1;
        if iterations > max_iterations {
            debug!(
                "[Bfs] FAILED: iteration cap {} reached (step={})",
                max_iterations, step
            );
            return SearchOutcome {
                found: false,
                predecessors,
                iterations,
            };
        }

        if current == goal {
            trace!(
                "[Bfs] SUCCESS: goal ({},{}) reached after {} dequeues (step={})",
                goal.x,
                goal.y,
                iterations,
                step
            );
            return SearchOutcome {
                found: true,
                predecessors,
                iterations,
            };
        }

        for (dx, dy) in NEIGHBOR_DIRS {
            let neighbor = current.offset(dx * step, dy * step);
            if grid.contains(neighbor) && !predecessors.contains_key(&neighbor) {
                predecessors.insert(neighbor, Some(current));
                frontier.push_back(neighbor);
            }
        }
    }

    debug!(
        "[Bfs] FAILED: frontier exhausted after {} dequeues (step={})",
        iterations, step
    );
    SearchOutcome {
        found: false,
        predecessors,
        iterations,
    }
}

/// Walk predecessor links from the goal back to the start and reverse,
/// producing the ordered coordinate sequence start → goal inclusive.
///
/// Only legal on a successful search. A predecessor chain that does not
/// terminate at the start tile means the outcome was not a success for
/// this (start, goal) pair; that is a caller bug, reported loudly instead
/// of returning a partial sequence.
pub(crate) fn reconstruct(
    outcome: &SearchOutcome,
    start: GridCoord,
    goal: GridCoord,
) -> Result<Vec<GridCoord>> {
    if !outcome.found {
        return Err(RouteError::NoPathFound);
    }

    let mut coords = Vec::new();
    let mut current = goal;
    loop {
        coords.push(current);
        match outcome.predecessors.get(&current) {
            Some(Some(prev)) => current = *prev,
            Some(None) => break,
            None => {
                debug_assert!(false, "predecessor chain broken at {:?}", current);
                return Err(RouteError::NoPathFound);
            }
        }
    }

    if coords.last() != Some(&start) {
        debug_assert!(false, "predecessor chain does not terminate at the start tile");
        return Err(RouteError::NoPathFound);
    }

    coords.reverse();
    Ok(coords)
}
