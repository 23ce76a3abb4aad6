//! Reproducible random point clouds (disk, square, regular polygon).
//!
//! Purpose
//! - Feed benchmarks, tests, and the CLI `sample` command with point sets whose
//!   hull is known or easy to check.
//!
//! Model
//! - Interior points are drawn uniformly from the shape, strictly inside it.
//!   For a regular polygon they come from its inscribed disk shrunk by 1%, so
//!   none of them can reach the boundary.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `crate::hull::compute_hull`, `crate::polygon`

use crate::hull::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

/// Region the interior points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    /// Open disk of the configured radius.
    Disk,
    /// Open axis-aligned square `(-r, r)²`.
    Square,
    /// Regular polygon with vertices on the circle of the configured radius.
    RegularPolygon { sides: usize },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: CloudShape,
    /// Number of interior points.
    pub count: usize,
    /// Circumradius (disk radius, square half-side, polygon circumradius).
    pub radius: f64,
    /// Prepend the polygon vertices (only meaningful for `RegularPolygon`).
    pub include_vertices: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: CloudShape::Disk,
            count: 100,
            radius: 1.0,
            include_vertices: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Vertices of a regular polygon, counter-clockwise from angle 0.
///
/// `sides` is clamped to at least 3.
pub fn regular_polygon(sides: usize, radius: f64) -> Vec<Point<f64>> {
    let n = sides.max(3);
    (0..n)
        .map(|k| {
            let th = TAU * (k as f64) / (n as f64);
            Point::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}

/// Draw a point cloud for `cfg`; the same `(cfg, tok)` always yields the same points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    let r = cfg.radius.abs();
    let mut out = Vec::with_capacity(cfg.count + 8);
    let interior_r = match cfg.shape {
        CloudShape::Disk | CloudShape::Square => r,
        CloudShape::RegularPolygon { sides } => {
            let n = sides.max(3);
            if cfg.include_vertices {
                out.extend(regular_polygon(n, r));
            }
            0.99 * r * (PI / n as f64).cos()
        }
    };
    for _ in 0..cfg.count {
        let p = match cfg.shape {
            CloudShape::Square => {
                // `gen` is [0, 1); keep both ends open
                let x = open_unit(&mut rng) * 2.0 - 1.0;
                let y = open_unit(&mut rng) * 2.0 - 1.0;
                Point::new(x * r, y * r)
            }
            CloudShape::Disk | CloudShape::RegularPolygon { .. } => {
                let th = rng.gen::<f64>() * TAU;
                let rad = interior_r * rng.gen::<f64>().sqrt();
                Point::new(rad * th.cos(), rad * th.sin())
            }
        };
        out.push(p);
    }
    out
}

fn open_unit<R: Rng>(rng: &mut R) -> f64 {
    loop {
        let u = rng.gen::<f64>();
        if u > 0.0 {
            return u;
        }
    }
}
