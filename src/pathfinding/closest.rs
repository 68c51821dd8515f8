//! Closest boundary points between two obstacle rectangles.
//!
//! Exact nearest-boundary-point computation is unnecessary for routing: a
//! bounded sample grid over each rectangle's edges gives a good entry-point
//! approximation cheaply and deterministically.

use crate::core::{Point2D, Rect};

/// The geometrically closest pair of sampled boundary points, one per
/// rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    /// Point on the first rectangle's boundary
    pub start: Point2D,
    /// Point on the second rectangle's boundary
    pub end: Point2D,
}

/// Find the Manhattan-closest pair of boundary points between `a` and `b`.
///
/// Each boundary is sampled at `samples` parametric offsets per edge
/// (t = i / (samples − 1), so the endpoints are always included), edges in
/// order top, bottom, left, right, t ascending. Every (point on a, point
/// on b) pair is compared; the strict `<` keeps the first-found pair on
/// exact distance ties, so the result is stable for a given sample order.
pub fn closest_boundary_points(a: &Rect, b: &Rect, samples: usize) -> ClosestPair {
    let pa = sample_boundary(a, samples);
    let pb = sample_boundary(b, samples);

    let mut best = ClosestPair {
        start: pa[0],
        end: pb[0],
    };
    let mut best_dist = f32::INFINITY;

    for p1 in &pa {
        for p2 in &pb {
            let d = p1.manhattan_distance(p2);
            if d < best_dist {
                best_dist = d;
                best = ClosestPair {
                    start: *p1,
                    end: *p2,
                };
            }
        }
    }
    best
}

/// Sample a rectangle's boundary: `samples` points per edge, edges in
/// order top, bottom, left, right.
fn sample_boundary(rect: &Rect, samples: usize) -> Vec<Point2D> {
    let samples = samples.max(2);
    let mut points = Vec::with_capacity(samples * 4);
    let fractions = (0..samples).map(|i| i as f32 / (samples - 1) as f32);

    for t in fractions.clone() {
        points.push(Point2D::new(rect.x + rect.width * t, rect.y));
    }
    for t in fractions.clone() {
        points.push(Point2D::new(rect.x + rect.width * t, rect.bottom()));
    }
    for t in fractions.clone() {
        points.push(Point2D::new(rect.x, rect.y + rect.height * t));
    }
    for t in fractions {
        points.push(Point2D::new(rect.right(), rect.y + rect.height * t));
    }
    points
}
