//! Point type and scalar bound shared by every hull stage.
//!
//! - `Point<T>`: plain `nalgebra::Point2`, compared by exact coordinates.
//! - `Coord`: the scalar bound; `f32` and `f64` both qualify, and the hull keeps
//!   whatever precision the caller hands in.

use std::cmp::Ordering;

use nalgebra::{Point2, RealField};

/// A 2D point. Equality is exact coordinate equality (no tolerance).
pub type Point<T = f64> = Point2<T>;

/// Scalar types accepted by the hull routines.
pub trait Coord: RealField + Copy {}

impl<T: RealField + Copy> Coord for T {}

/// Total order for sorting coordinates; incomparable values (NaN) tie.
#[inline]
pub fn coord_cmp<T: Coord>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Index of the first point carrying a NaN or infinite coordinate.
pub fn first_non_finite<T: Coord>(points: &[Point<T>]) -> Option<usize> {
    points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
}
