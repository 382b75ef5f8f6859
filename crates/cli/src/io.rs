//! Point-list and trace files.
//!
//! Inputs: CSV with `x`,`y` columns (read lazily with polars) or a JSON array
//! of `[x, y]` pairs. Outputs are pretty-printed JSON.

use anyhow::{anyhow, bail, Context, Result};
use hm_decomp::decomp::{Decomposition, Trace, Triangle};
use hm_decomp::geom2::{GeomCfg, Polygon};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Everything a frame exporter needs to replay a run.
#[derive(Serialize)]
pub struct TraceDoc<'a> {
    pub polygon: Vec<[f64; 2]>,
    /// True when the input was clockwise and indices refer to the reversed ring.
    pub reversed: bool,
    pub eps: f64,
    pub triangles: &'a [Triangle],
    pub trace: &'a Trace,
}

impl<'a> TraceDoc<'a> {
    pub fn new(poly: &Polygon, cfg: GeomCfg, d: &'a Decomposition) -> Self {
        Self {
            polygon: to_pairs(poly.points()),
            reversed: poly.was_reversed(),
            eps: cfg.eps,
            triangles: &d.triangles,
            trace: &d.trace,
        }
    }
}

pub fn to_pairs(points: &[Vector2<f64>]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// Read points from `.csv` or `.json` (by extension).
pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_points_csv(path),
        Some("json") => read_points_json(path),
        other => bail!("unsupported input extension {other:?} (expected .csv or .json)"),
    }
}

fn read_points_csv(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(anyhow!("row {row}: missing coordinate")),
        })
        .collect()
}

fn read_points_json(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hm_decomp::decomp::decompose;
    use tempfile::tempdir;

    #[test]
    fn json_points_roundtrip_through_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/pts.json");
        write_json(&path, &[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]).unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], Vector2::new(10.0, 10.0));
    }

    #[test]
    fn csv_points_are_read_by_column_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "y,x\n0,0\n0,10\n10,10\n10,0\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(10.0, 0.0),
                Vector2::new(10.0, 10.0),
                Vector2::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn unknown_extension_rejected() {
        assert!(read_points(Path::new("points.txt")).is_err());
    }

    #[test]
    fn trace_doc_shape() {
        let poly = Polygon::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
        let cfg = GeomCfg::default();
        let d = decompose(&poly, cfg).unwrap();
        let v = serde_json::to_value(TraceDoc::new(&poly, cfg, &d)).unwrap();
        assert_eq!(v["polygon"][1], serde_json::json!([10.0, 0.0]));
        assert_eq!(v["reversed"], false);
        assert_eq!(v["triangles"], serde_json::json!([[3, 0, 1], [1, 2, 3]]));
        assert_eq!(v["trace"]["steps"].as_array().unwrap().len(), 4);
    }
}
