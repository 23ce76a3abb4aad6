//! Hull scenarios plus property tests over small integer grids.
//!
//! Integer-valued coordinates keep every predicate exact and make ties,
//! duplicates, and collinear runs common.

use super::*;
use crate::polygon::{contains, is_strictly_convex, same_cycle, signed_area};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn p(x: f64, y: f64) -> Point<f64> {
    Point::new(x, y)
}

#[test]
fn trivial_inputs_are_returned_verbatim() {
    assert!(compute_hull::<f64>(&[]).is_empty());
    assert_eq!(compute_hull(&[p(1.0, 2.0)]), vec![p(1.0, 2.0)]);
    let dup = [p(3.0, 3.0), p(3.0, 3.0)];
    assert_eq!(compute_hull(&dup), dup.to_vec());
    let pair = [p(5.0, 0.0), p(-1.0, 4.0)];
    assert_eq!(compute_hull(&pair), pair.to_vec());
}

#[test]
fn square_with_interior_point() {
    let pts = [
        p(0.0, 0.0),
        p(10.0, 0.0),
        p(10.0, 10.0),
        p(0.0, 10.0),
        p(5.0, 5.0),
    ];
    let hull = compute_hull(&pts);
    assert_eq!(
        hull,
        vec![p(0.0, 10.0), p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]
    );
    assert!((signed_area(&hull) - 100.0).abs() < 1e-12);
}

#[test]
fn collinear_points_collapse() {
    let hull = compute_hull(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]);
    assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 2.0)]);
}

#[test]
fn all_identical_points() {
    let pts = [p(1.0, 1.0); 5];
    assert_eq!(compute_hull(&pts), vec![p(1.0, 1.0)]);
}

#[test]
fn hexagon_with_random_interior() {
    let h = 3f64.sqrt();
    let hex = [
        p(2.0, 0.0),
        p(1.0, h),
        p(-1.0, h),
        p(-2.0, 0.0),
        p(-1.0, -h),
        p(1.0, -h),
    ];
    let mut rng = StdRng::seed_from_u64(5);
    let inner: Vec<Point<f64>> = (0..20)
        .map(|_| {
            // inradius is h; stay well inside
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = 0.9 * h * rng.gen::<f64>().sqrt();
            p(r * th.cos(), r * th.sin())
        })
        .collect();
    let mut pts = inner[..10].to_vec();
    pts.extend_from_slice(&hex[3..]);
    pts.extend_from_slice(&inner[10..]);
    pts.extend_from_slice(&hex[..3]);

    let hull = compute_hull(&pts);
    assert_eq!(
        hull,
        vec![hex[3], hex[4], hex[5], hex[0], hex[1], hex[2]]
    );
}

#[test]
fn duplicate_vertex_appears_once() {
    let pts = [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 0.0), p(0.0, 4.0), p(1.0, 1.0)];
    let hull = compute_hull(&pts);
    assert_eq!(hull, vec![p(0.0, 4.0), p(0.0, 0.0), p(4.0, 0.0)]);
}

#[test]
fn skewed_triangle_keeps_all_vertices() {
    // the middle vertex falls into two quadrant boxes at once
    let pts = [p(9.0, -3.0), p(6.0, 9.0), p(1.0, 12.0)];
    let hull = compute_hull(&pts);
    assert_eq!(hull.len(), 3);
    assert!(same_cycle(&hull, &[p(9.0, -3.0), p(6.0, 9.0), p(1.0, 12.0)]));
}

#[test]
fn collinear_boundary_points_are_not_vertices() {
    let pts = [
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(4.0, 0.0),
        p(4.0, 2.0),
        p(4.0, 4.0),
        p(2.0, 2.0),
        p(0.0, 4.0),
        p(0.0, 2.0),
    ];
    let hull = compute_hull(&pts);
    assert_eq!(
        hull,
        vec![p(0.0, 4.0), p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)]
    );
}

#[test]
fn single_precision_input() {
    let pts = [
        Point::new(0.0f32, 0.0),
        Point::new(3.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 3.0),
    ];
    let hull = compute_hull(&pts);
    assert_eq!(
        hull,
        vec![Point::new(0.0f32, 3.0), Point::new(0.0, 0.0), Point::new(3.0, 0.0)]
    );
}

#[test]
fn try_rejects_non_finite() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(f64::NAN, 1.0)];
    let err = try_compute_hull(&pts).unwrap_err();
    assert_eq!(err, HullError::NonFinite { index: 2 });
    assert_eq!(err.to_string(), "point 2 has a non-finite coordinate");
    let ok = try_compute_hull(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
    assert_eq!(ok.len(), 3);
}

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
    prop::collection::vec((-12i32..=12, -12i32..=12), 0..max_len).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_properties(pts in grid_points(48)) {
        let hull = compute_hull(&pts);
        if pts.len() < 3 {
            prop_assert_eq!(&hull, &pts);
            return Ok(());
        }
        // subset, no repeats
        for (i, h) in hull.iter().enumerate() {
            prop_assert!(pts.contains(h));
            prop_assert!(!hull[i + 1..].contains(h));
        }
        // containment
        for q in &pts {
            prop_assert!(contains(&hull, q), "{:?} outside {:?}", q, hull);
        }
        if hull.len() >= 3 {
            prop_assert!(is_strictly_convex(&hull));
            prop_assert!(signed_area(&hull) > 0.0);
        }
    }

    #[test]
    fn hull_is_idempotent(pts in grid_points(48)) {
        let hull = compute_hull(&pts);
        let again = compute_hull(&hull);
        prop_assert!(same_cycle(&hull, &again), "{:?} vs {:?}", hull, again);
    }

    #[test]
    fn input_order_does_not_change_polygon(pts in grid_points(32), shift in 0usize..32) {
        let hull = compute_hull(&pts);
        let mut rotated = pts.clone();
        if !rotated.is_empty() {
            let k = shift % rotated.len();
            rotated.rotate_left(k);
        }
        let hull_rot = compute_hull(&rotated);
        if pts.len() >= 3 {
            prop_assert!(same_cycle(&hull, &hull_rot));
        }
    }
}
