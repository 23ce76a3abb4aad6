mod points_io;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use octohull::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use octohull::polygon::{contains, is_strictly_convex, signed_area};
use octohull::try_compute_hull;
use provenance::{write_sidecar, Payload};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner and point-cloud tools")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Disk,
    Square,
    Polygon,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file (.json, .csv, .parquet)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible random point cloud
    Sample {
        #[arg(long, value_enum, default_value_t = Shape::Disk)]
        shape: Shape,
        /// Polygon side count (only for --shape polygon)
        #[arg(long, default_value_t = 6)]
        sides: usize,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Prepend the polygon vertices (only for --shape polygon)
        #[arg(long)]
        include_vertices: bool,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Verify that a hull file is a convex CCW hull of a point file
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        hull: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out } => hull(input, out, cmd.tag),
        Action::Sample {
            shape,
            sides,
            count,
            radius,
            include_vertices,
            seed,
            index,
            out,
        } => {
            let shape = match shape {
                Shape::Disk => CloudShape::Disk,
                Shape::Square => CloudShape::Square,
                Shape::Polygon => CloudShape::RegularPolygon { sides },
            };
            let cfg = CloudCfg {
                shape,
                count,
                radius,
                include_vertices,
            };
            sample(cfg, ReplayToken { seed, index }, out, cmd.tag)
        }
        Action::Check { input, hull } => check(input, hull, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "hull");
    let points = points_io::read_points(&input)?;
    let hull = try_compute_hull(&points)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    tracing::info!(
        input_points = points.len(),
        hull_points = hull.len(),
        area = signed_area(&hull),
        "hull_done"
    );
    points_io::write_points(&out, &hull)?;

    let payload = Payload::new(serde_json::json!({
        "command": "hull",
        "input": input.to_string_lossy(),
        "input_points": points.len(),
        "hull_points": hull.len()
    }))
    .with_tag(tag);
    let prov = write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(shape = ?cfg.shape, count = cfg.count, seed = tok.seed, index = tok.index, "sample");
    if !(cfg.radius.is_finite() && cfg.radius > 0.0) {
        bail!("--radius must be a positive finite number, got {}", cfg.radius);
    }
    let points = draw_cloud(cfg, tok);
    points_io::write_points(&out, &points)?;

    let payload = Payload::new(serde_json::json!({
        "command": "sample",
        "shape": format!("{:?}", cfg.shape),
        "count": cfg.count,
        "radius": cfg.radius,
        "include_vertices": cfg.include_vertices,
        "seed": tok.seed,
        "index": tok.index,
        "points": points.len()
    }))
    .with_tag(tag);
    write_sidecar(&out, payload)?;
    Ok(())
}

fn check(input: PathBuf, hull_path: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), hull = %hull_path.display(), tag = ?tag, "check");
    let points = points_io::read_points(&input)?;
    let hull = points_io::read_points(&hull_path)?;

    let outside = points.iter().filter(|p| !contains(&hull, *p)).count();
    let foreign = hull.iter().filter(|h| !points.contains(*h)).count();
    let convex = is_strictly_convex(&hull);
    let area = signed_area(&hull);
    let ccw = hull.len() < 3 || area > 0.0;
    tracing::info!(
        points = points.len(),
        hull_points = hull.len(),
        outside,
        foreign,
        convex,
        area,
        "check_summary"
    );

    let mut failures = Vec::new();
    if outside > 0 {
        failures.push(format!("{outside} input points lie outside the hull"));
    }
    if foreign > 0 {
        failures.push(format!("{foreign} hull points are not input points"));
    }
    if !convex {
        failures.push("hull is not strictly convex".to_string());
    }
    if !ccw {
        failures.push("hull is not counter-clockwise".to_string());
    }
    if !failures.is_empty() {
        for f in &failures {
            tracing::warn!(reason = %f, "check_failed");
        }
        bail!("hull check failed: {}", failures.join("; "));
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": octohull::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
