//! Planar convex hull via extreme octagon, stairs, and a stack scan.
//!
//! Purpose
//! - Compute the convex hull of a finite 2D point set as a counter-clockwise
//!   vertex list, without a closing duplicate of the first vertex.
//!
//! Pipeline
//! - `stairs::build_stairs`: eight extremes, four quadrant buckets, one greedy
//!   monotone staircase per bucket. Output is already in hull order.
//! - `assemble::assemble`: left-turn-only stack scan that removes what is left.
//!
//! Conventions
//! - Exact arithmetic predicates only (no eps). Collinear boundary points are not
//!   hull vertices: both stages treat a zero cross product as "not a left turn".
//! - Inputs must be finite. `compute_hull` does not check; `try_compute_hull` does.
//! - The hull starts at the leftmost point with the largest y.
//!
//! Code cross-refs: `crate::polygon` (checks for the hull properties).

mod assemble;
mod orient;
mod point;
mod stairs;

use std::fmt;

pub use assemble::assemble;
pub use orient::{cross, left_turn};
pub use point::{coord_cmp, first_non_finite, Coord, Point};
pub use stairs::{build_stairs, Extremes, Quadrant};

/// Input rejected by `try_compute_hull`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// A point has a NaN or infinite coordinate.
    NonFinite { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Convex hull in counter-clockwise order.
///
/// Pre: all coordinates are finite (unchecked; see `try_compute_hull`).
/// Post: fewer than 3 input points are returned verbatim, duplicates included.
/// Otherwise every output point is an input point, consecutive triples turn
/// strictly left, and every input point lies on or inside the polygon.
pub fn compute_hull<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let stairs = build_stairs(points);
    if stairs.len() < 3 {
        return stairs;
    }
    assemble(stairs)
}

/// Same as `compute_hull`, but rejects non-finite coordinates before running.
pub fn try_compute_hull<T: Coord>(points: &[Point<T>]) -> Result<Vec<Point<T>>, HullError> {
    if let Some(index) = first_non_finite(points) {
        return Err(HullError::NonFinite { index });
    }
    Ok(compute_hull(points))
}

#[cfg(test)]
mod tests;
