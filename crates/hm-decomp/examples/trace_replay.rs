//! Print the decomposition trace of a random simple polygon.
//!
//! Usage:
//!   cargo run -p hm-decomp --example trace_replay -- 12
//!
//! Prints one line per step: label, piece count, and the tested edge.

use hm_decomp::prelude::*;

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(8);
    let cfg = RandomPolygonCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RandomPolygonCfg::default()
    };
    let poly = match draw_simple_polygon(cfg, ReplayToken { seed: 2025, index: 0 }) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("usage: trace_replay [vertices >= 3] ({e})");
            return;
        }
    };
    let mut session = Session::new(poly, GeomCfg::default());
    match session.run() {
        Ok(d) => {
            for (i, step) in d.trace.iter().enumerate() {
                let edge = step
                    .outcome
                    .map(|o| format!(" [{} {}]", o.status, o.edge))
                    .unwrap_or_default();
                println!("{i:3}: {} ({} pieces){edge}", step.label, step.pieces.len());
            }
        }
        Err(e) => eprintln!("decomposition failed: {e}"),
    }
}
