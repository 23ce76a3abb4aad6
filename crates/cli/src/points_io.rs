//! Point files: JSON, CSV, and Parquet, picked by file extension.
//!
//! - JSON: an array of `[x, y]` pairs or `{ "x": .., "y": .. }` objects.
//!   Output is always written as pairs.
//! - CSV/Parquet: columns `x` and `y`, cast to `f64`. Other columns are ignored.

use anyhow::{bail, Context, Result};
use octohull::Point;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("csv") => Ok(Format::Csv),
            Some("parquet") => Ok(Format::Parquet),
            _ => bail!(
                "unsupported point file {} (expected .json, .csv or .parquet)",
                path.display()
            ),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum PointRecord {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<PointRecord> for Point<f64> {
    fn from(r: PointRecord) -> Self {
        match r {
            PointRecord::Pair([x, y]) => Point::new(x, y),
            PointRecord::Named { x, y } => Point::new(x, y),
        }
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point<f64>>> {
    match Format::from_path(path)? {
        Format::Json => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let records: Vec<PointRecord> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing points from {}", path.display()))?;
            Ok(records.into_iter().map(Point::from).collect())
        }
        Format::Csv => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("reading {}", path.display()))?;
            frame_to_points(lf, path)
        }
        Format::Parquet => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {}", path.display()))?;
            frame_to_points(lf, path)
        }
    }
}

fn frame_to_points(lf: LazyFrame, path: &Path) -> Result<Vec<Point<f64>>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}

pub fn write_points(path: &Path, points: &[Point<f64>]) -> Result<()> {
    let format = Format::from_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Json => {
            let records: Vec<PointRecord> =
                points.iter().map(|p| PointRecord::Pair([p.x, p.y])).collect();
            std::fs::write(path, serde_json::to_vec_pretty(&records)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv | Format::Parquet => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            if format == Format::Csv {
                CsvWriter::new(&mut file).finish(&mut df)?;
            } else {
                ParquetWriter::new(&mut file).finish(&mut df)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.JSON")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("b.csv")).unwrap(), Format::Csv);
        assert_eq!(
            Format::from_path(Path::new("b.parquet")).unwrap(),
            Format::Parquet
        );
        assert!(Format::from_path(Path::new("b.txt")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn json_accepts_pairs_and_objects() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        std::fs::write(&path, r#"[[0, 0], {"x": 2.5, "y": -1}, [1e3, 4]]"#).unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.5, -1.0),
                Point::new(1000.0, 4.0)
            ]
        );
    }

    #[test]
    fn csv_written_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("hull.csv");
        let pts = vec![Point::new(0.0, 10.0), Point::new(0.0, 0.0), Point::new(10.0, 0.5)];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn csv_ignores_extra_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        std::fs::write(&path, "id,x,y\na,1,2\nb,3.5,-4\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
    }
}
