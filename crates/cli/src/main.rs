use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hm_decomp::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_points, to_pairs, write_json, TraceDoc};
use provenance::{write_sidecar, RunSummary};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex decomposition runner (ear clipping + Hertel-Mehlhorn)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decompose a polygon and write its replay trace as JSON
    Decompose {
        /// Points as .csv (columns x,y) or .json ([[x, y], ...])
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Absolute orientation tolerance
        #[arg(long, conflicts_with = "scaled_eps")]
        eps: Option<f64>,
        /// Scale the tolerance to the polygon's extent
        #[arg(long)]
        scaled_eps: bool,
    },
    /// Write a random simple polygon as JSON points
    Random {
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Decompose {
            input,
            out,
            eps,
            scaled_eps,
        } => run_decompose(input, out, eps, scaled_eps),
        Action::Random {
            vertices,
            seed,
            index,
            out,
        } => run_random(vertices, seed, index, out),
        Action::Report => report(),
    }
}

fn run_decompose(input: PathBuf, out: PathBuf, eps: Option<f64>, scaled_eps: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "decompose");
    let points = read_points(&input)?;
    let poly = Polygon::new(points).context("invalid input polygon")?;
    let cfg = match eps {
        Some(e) => GeomCfg::with_eps(e)?,
        None if scaled_eps => GeomCfg::scaled_for(poly.points()),
        None => GeomCfg::default(),
    };
    let mut session = Session::new(poly, cfg);
    session.run().context("decomposition failed")?;
    let (poly, d) = session.into_parts();
    let d = d.context("session finished without a result")?;
    tracing::info!(
        triangles = d.triangles.len(),
        pieces = d.pieces().len(),
        steps = d.trace.len(),
        "trace ready"
    );
    write_json(&out, &TraceDoc::new(&poly, cfg, &d))?;
    write_sidecar(&out, &RunSummary::decompose(&input, &poly, cfg, &d))?;
    Ok(())
}

fn run_random(vertices: usize, seed: u64, index: u64, out: PathBuf) -> Result<()> {
    tracing::info!(vertices, seed, index, out = %out.display(), "random");
    let cfg = RandomPolygonCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RandomPolygonCfg::default()
    };
    let poly = draw_simple_polygon(cfg, ReplayToken { seed, index })?;
    write_json(&out, &to_pairs(poly.points()))?;
    write_sidecar(
        &out,
        &RunSummary::Random {
            vertices,
            seed,
            index,
        },
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "engine": hm_decomp::VERSION,
        "params": {
            "default_eps": hm_decomp::geom2::DEFAULT_EPS,
        },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn read_json(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn eps_flags_are_exclusive() {
        let both = Cmd::try_parse_from([
            "cli", "decompose", "--input", "a.json", "--out", "b.json", "--eps", "1e-6",
            "--scaled-eps",
        ]);
        assert!(both.is_err());
        let one = Cmd::try_parse_from([
            "cli", "decompose", "--input", "a.json", "--out", "b.json", "--scaled-eps",
        ])
        .unwrap();
        assert!(matches!(
            one.action,
            Action::Decompose {
                eps: None,
                scaled_eps: true,
                ..
            }
        ));
    }

    #[test]
    fn decompose_json_square_writes_trace_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.json");
        fs::write(&input, "[[0, 0], [10, 0], [10, 10], [0, 10]]").unwrap();
        let out = dir.path().join("out/square.trace.json");
        run_decompose(input, out.clone(), Some(1e-9), false).unwrap();

        let doc = read_json(&out);
        assert_eq!(doc["reversed"], false);
        assert_eq!(doc["eps"], 1e-9);
        assert_eq!(doc["trace"]["steps"].as_array().unwrap().len(), 4);
        assert_eq!(
            doc["trace"]["steps"][3]["label"],
            "Final Convex Decomposition"
        );

        let side = read_json(&dir.path().join("out/square.trace.provenance.json"));
        assert_eq!(side["run"]["kind"], "decompose");
        assert_eq!(side["run"]["steps"], 4);
    }

    #[test]
    fn decompose_clockwise_csv_reports_reversal() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cw.csv");
        fs::write(&input, "x,y\n0,0\n0,10\n10,10\n10,0\n").unwrap();
        let out = dir.path().join("cw.json");
        run_decompose(input, out.clone(), None, true).unwrap();

        let doc = read_json(&out);
        assert_eq!(doc["reversed"], true);
        assert_eq!(doc["polygon"][0], serde_json::json!([10.0, 0.0]));
        assert_eq!(doc["trace"]["steps"].as_array().unwrap().len(), 4);
        let side = read_json(&dir.path().join("cw.provenance.json"));
        assert_eq!(side["run"]["reversed"], true);
        assert_eq!(side["run"]["vertices"], 4);
    }

    #[test]
    fn decompose_rejects_degenerate_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("line.json");
        fs::write(&input, "[[0, 0], [1, 0]]").unwrap();
        let out = dir.path().join("line.trace.json");
        assert!(run_decompose(input, out.clone(), None, false).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn random_writes_points_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("poly.json");
        run_random(6, 3, 1, out.clone()).unwrap();
        assert_eq!(read_points(&out).unwrap().len(), 6);
        let side = read_json(&dir.path().join("poly.provenance.json"));
        assert_eq!(side["run"]["kind"], "random");
        assert_eq!(side["run"]["seed"], 3);
        assert_eq!(side["run"]["index"], 1);
    }
}
