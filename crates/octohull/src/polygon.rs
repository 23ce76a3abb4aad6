//! Checks on counter-clockwise vertex lists (hull outputs).
//!
//! Used by tests and by the CLI `check` command. The polygon is implicitly
//! closed; the first vertex is not repeated at the end.

use crate::hull::{cross, left_turn, Coord, Point};

/// Shoelace area; positive for counter-clockwise order, zero for < 3 vertices.
pub fn signed_area<T: Coord>(poly: &[Point<T>]) -> T {
    let n = poly.len();
    if n < 3 {
        return T::zero();
    }
    let mut twice = T::zero();
    for i in 0..n {
        let p = poly[i];
        let q = poly[(i + 1) % n];
        twice = twice + (p.x * q.y - q.x * p.y);
    }
    twice / (T::one() + T::one())
}

/// On-or-inside test against a counter-clockwise polygon.
///
/// Degenerate polygons: 0 vertices contain nothing, 1 vertex contains only itself,
/// 2 vertices contain the closed segment between them.
pub fn contains<T: Coord>(poly: &[Point<T>], p: &Point<T>) -> bool {
    match poly {
        [] => false,
        [a] => a == p,
        [a, b] => {
            cross(a, b, p) == T::zero()
                && p.x >= a.x.min(b.x)
                && p.x <= a.x.max(b.x)
                && p.y >= a.y.min(b.y)
                && p.y <= a.y.max(b.y)
        }
        _ => (0..poly.len()).all(|i| {
            let a = &poly[i];
            let b = &poly[(i + 1) % poly.len()];
            cross(a, b, p) >= T::zero()
        }),
    }
}

/// Every consecutive triple, wrap-around included, is a strict left turn.
///
/// Vacuously true for 2 or fewer vertices.
pub fn is_strictly_convex<T: Coord>(poly: &[Point<T>]) -> bool {
    let n = poly.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| left_turn(&poly[i], &poly[(i + 1) % n], &poly[(i + 2) % n]))
}

/// Same vertices in the same cyclic order, up to the choice of start vertex.
pub fn same_cycle<T: Coord>(a: &[Point<T>], b: &[Point<T>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..b.len())
        .filter(|&k| b[k] == a[0])
        .any(|k| (0..a.len()).all(|i| a[i] == b[(k + i) % b.len()]))
}
