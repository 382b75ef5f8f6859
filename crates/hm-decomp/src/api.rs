//! Curated surface for downstream viewers and exporters.
//!
//! Re-exports only; prefer these over reaching into submodules.

// Geometry
pub use crate::geom2::{
    is_ccw, is_convex_ring, orient, point_in_triangle, signed_area, GeomCfg, Polygon,
    DEFAULT_EPS,
};
// Random polygon source
pub use crate::geom2::rand::{
    draw_simple_polygon, make_simple_polygon, RandomPolygonCfg, ReplayToken as PolygonReplay,
    VertexCount,
};
// Decomposition engine
pub use crate::decomp::{
    decompose, triangulate, Decomposition, DecompositionStep, EdgeKey, EdgeOutcome, EdgeStatus,
    EdgeTest, Merger, Piece, Session, Trace, TraceCursor, TraceRecorder, Triangle,
};

use nalgebra::Vector2;

/// Coordinates of every piece in a step, ready for filling.
pub fn step_rings(poly: &Polygon, step: &DecompositionStep) -> Vec<Vec<Vector2<f64>>> {
    step.pieces.iter().map(|p| poly.coords(p.indices())).collect()
}

/// Endpoints of the highlighted edge of a step.
///
/// `None` when the step has no outcome or its edge is out of range for `poly`.
pub fn highlighted_edge(
    poly: &Polygon,
    step: &DecompositionStep,
) -> Option<(EdgeStatus, Vector2<f64>, Vector2<f64>)> {
    let o = step.outcome?;
    let pts = poly.points();
    Some((o.status, *pts.get(o.edge.lo())?, *pts.get(o.edge.hi())?))
}
