//! Planar convex hulls and the helpers around them.
//!
//! Modules
//! - `hull`: extreme octagon, per-quadrant stairs, and the final stack scan.
//! - `polygon`: checks on the counter-clockwise vertex lists `hull` returns.
//! - `cloud`: reproducible random point clouds for tests, benches, and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api` is a
//!   convenience surface, not a contract.

pub mod api;
pub mod cloud;
pub mod hull;
pub mod polygon;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{compute_hull, try_compute_hull, HullError, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_cloud, regular_polygon, CloudCfg, CloudShape, ReplayToken};
    pub use crate::hull::{compute_hull, left_turn, try_compute_hull, Coord, HullError, Point};
    pub use crate::polygon::{contains, is_strictly_convex, same_cycle, signed_area};
}
