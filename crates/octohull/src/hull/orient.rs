use super::point::{Coord, Point};

/// Cross product `(b − a) × (c − a)`; positive when `a → b → c` turns counter-clockwise.
#[inline]
pub fn cross<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Strict left turn. Collinear triples (cross product exactly zero) are not left turns.
#[inline]
pub fn left_turn<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
    cross(a, b, c) > T::zero()
}
