//! Replayable trace of a decomposition run and the caller-owned session.
//!
//! Step layout
//! - `"Triangulated Polygon"`: the initial triangles, no outcome.
//! - `"Testing edge: (a, b)"`: one per edge test, pieces *before* the decision.
//! - `"Step k: merged (Inessential edge)"`: after each accepted merge, same
//!   outcome as the test that triggered it.
//! - `"Final Convex Decomposition"`: terminal pieces, no outcome.
//!
//! Every snapshot is an owned clone, so steps can be rendered in any order.

use tracing::info;

use super::merge::Merger;
use super::triangulate::triangulate;
use super::types::{DecompositionStep, EdgeOutcome, EdgeStatus, Piece, Trace, Triangle};
use crate::error::Result;
use crate::geom2::{GeomCfg, Polygon};

pub const LABEL_TRIANGULATED: &str = "Triangulated Polygon";
pub const LABEL_FINAL: &str = "Final Convex Decomposition";

/// Appends steps while driving a `Merger` to completion.
#[derive(Clone, Debug)]
pub struct TraceRecorder {
    trace: Trace,
    merges: usize,
}

impl TraceRecorder {
    /// Start a trace with the triangulated snapshot.
    pub fn new(initial: &[Piece]) -> Self {
        let mut trace = Trace::default();
        trace.push(snapshot(LABEL_TRIANGULATED, initial, None));
        Self { trace, merges: 0 }
    }

    /// Run the merge loop, recording tests and merges, then the final state.
    ///
    /// Calling this again on a finished merger only appends another final step.
    pub fn record(&mut self, merger: &mut Merger<'_>) {
        loop {
            let before = merger.pieces().to_vec();
            let Some(test) = merger.step() else { break };
            let outcome = test.outcome();
            self.trace.push(DecompositionStep {
                label: format!("Testing edge: {}", test.edge),
                pieces: before,
                outcome: Some(outcome),
            });
            if test.status == EdgeStatus::Inessential {
                self.merges += 1;
                let label = format!("Step {}: merged (Inessential edge)", self.merges);
                self.trace.push(snapshot(&label, merger.pieces(), Some(outcome)));
            }
        }
        self.trace.push(snapshot(LABEL_FINAL, merger.pieces(), None));
    }

    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn finish(self) -> Trace {
        self.trace
    }
}

fn snapshot(label: &str, pieces: &[Piece], outcome: Option<EdgeOutcome>) -> DecompositionStep {
    DecompositionStep {
        label: label.to_string(),
        pieces: pieces.to_vec(),
        outcome,
    }
}

/// Output of one full decomposition.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    pub triangles: Vec<Triangle>,
    pub trace: Trace,
}

impl Decomposition {
    /// Terminal convex pieces.
    pub fn pieces(&self) -> &[Piece] {
        self.trace.final_pieces().unwrap_or(&[])
    }
}

/// Triangulate, merge, and record in one call.
pub fn decompose(poly: &Polygon, cfg: GeomCfg) -> Result<Decomposition> {
    let triangles = triangulate(poly, cfg)?;
    let mut merger = Merger::from_triangles(poly, &triangles, cfg);
    let mut recorder = TraceRecorder::new(merger.pieces());
    recorder.record(&mut merger);
    let trace = recorder.finish();
    info!(
        vertices = poly.len(),
        triangles = triangles.len(),
        tests = merger.tested_count(),
        merges = merger.merge_count(),
        pieces = merger.pieces().len(),
        steps = trace.len(),
        "decomposition done"
    );
    Ok(Decomposition { triangles, trace })
}

/// Caller-owned decomposition state: one polygon, one tolerance, one result.
#[derive(Clone, Debug)]
pub struct Session {
    polygon: Polygon,
    cfg: GeomCfg,
    result: Option<Decomposition>,
}

impl Session {
    pub fn new(polygon: Polygon, cfg: GeomCfg) -> Self {
        Self {
            polygon,
            cfg,
            result: None,
        }
    }

    /// Session with a tolerance scaled to the polygon's extent.
    pub fn scaled(polygon: Polygon) -> Self {
        let cfg = GeomCfg::scaled_for(polygon.points());
        Self::new(polygon, cfg)
    }

    /// Compute (or return the cached) decomposition.
    pub fn run(&mut self) -> Result<&Decomposition> {
        let d = match self.result.take() {
            Some(d) => d,
            None => decompose(&self.polygon, self.cfg)?,
        };
        Ok(self.result.insert(d))
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }
    #[inline]
    pub fn decomposition(&self) -> Option<&Decomposition> {
        self.result.as_ref()
    }
    pub fn trace(&self) -> Option<&Trace> {
        self.result.as_ref().map(|d| &d.trace)
    }
    /// Ear-clipping output, once `run` has succeeded.
    pub fn triangles(&self) -> Option<&[Triangle]> {
        self.result.as_ref().map(|d| d.triangles.as_slice())
    }
    pub fn final_pieces(&self) -> Option<&[Piece]> {
        self.result.as_ref().map(Decomposition::pieces)
    }

    /// Hand the results to the caller, ending the session.
    pub fn into_parts(self) -> (Polygon, Option<Decomposition>) {
        (self.polygon, self.result)
    }
}
