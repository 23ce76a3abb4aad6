//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It groups the pipeline stages for callers that
//!   want to inspect intermediate results (stairs, extremes) rather than only
//!   the final hull. Breaking changes are allowed.

// Hull pipeline
pub use crate::hull::{
    assemble, build_stairs, compute_hull, cross, first_non_finite, left_turn, try_compute_hull,
    Coord, Extremes, HullError, Point, Quadrant,
};
// Checks on hull outputs
pub use crate::polygon::{contains, is_strictly_convex, same_cycle, signed_area};
// Random clouds
pub use crate::cloud::{draw_cloud, regular_polygon, CloudCfg, CloudShape, ReplayToken};

/// Number of candidates the stairs pass hands to the assembler.
///
/// Useful for judging how much work the pre-filter saved on a given input.
pub fn stairs_len<T: Coord>(points: &[Point<T>]) -> usize {
    build_stairs(points).len()
}
