//! `<artifact>.provenance.json` sidecars.
//!
//! Each run records what produced an artifact: code revision, engine version,
//! the CLI callsite, and a typed summary of the run.

use anyhow::Result;
use hm_decomp::decomp::Decomposition;
use hm_decomp::geom2::{GeomCfg, Polygon};
use serde::Serialize;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::io::write_json;

/// What a run did, tagged by subcommand.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunSummary {
    Decompose {
        input: String,
        eps: f64,
        vertices: usize,
        reversed: bool,
        triangles: usize,
        pieces: usize,
        steps: usize,
    },
    Random {
        vertices: usize,
        seed: u64,
        index: u64,
    },
}

impl RunSummary {
    pub fn decompose(input: &Path, poly: &Polygon, cfg: GeomCfg, d: &Decomposition) -> Self {
        Self::Decompose {
            input: input.to_string_lossy().into_owned(),
            eps: cfg.eps,
            vertices: poly.len(),
            reversed: poly.was_reversed(),
            triangles: d.triangles.len(),
            pieces: d.pieces().len(),
            steps: d.trace.len(),
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    engine: &'static str,
    callsite: Callsite,
    run: &'a RunSummary,
    outputs: Vec<String>,
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, run: &RunSummary) -> Result<PathBuf> {
    let at = Location::caller();
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        code_rev: current_git_rev(),
        engine: hm_decomp::VERSION,
        callsite: Callsite {
            file: at.file(),
            line: at.line(),
        },
        run,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    write_json(&path, &doc)?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

/// `dir/name.json` -> `dir/name.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
