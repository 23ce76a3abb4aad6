//! Print hull sizes for a few regular-polygon clouds.
//!
//! Usage:
//!   cargo run -p octohull --example polygon_clouds -- 500
//!
//! The argument is the number of interior points per cloud (default 200). Each
//! line should report as many hull vertices as the polygon has sides.

use octohull::api::{compute_hull, stairs_len};
use octohull::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(200);
    for (i, sides) in [3usize, 5, 8, 13].into_iter().enumerate() {
        let cfg = CloudCfg {
            shape: CloudShape::RegularPolygon { sides },
            count,
            radius: 1.0,
            include_vertices: true,
        };
        let pts = draw_cloud(
            cfg,
            ReplayToken {
                seed: 2025,
                index: i as u64,
            },
        );
        let hull = compute_hull(&pts);
        println!(
            "sides={sides}: points={}, stairs={}, hull={}",
            pts.len(),
            stairs_len(&pts),
            hull.len()
        );
    }
}
