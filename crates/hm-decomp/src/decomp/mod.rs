//! Convex decomposition: ear clipping, Hertel–Mehlhorn merging, replay trace.
//!
//! Purpose
//! - Turn a CCW simple `Polygon` into convex pieces and keep every
//!   intermediate state as an owned, seekable `Trace`.
//!
//! Flow
//! - `triangulate` → `n - 2` CCW triangles in deterministic emission order.
//! - `Merger` drops Inessential diagonals one test at a time.
//! - `TraceRecorder` snapshots the pieces around every test and merge.
//! - `Session` / `decompose` wire the three together for callers.
//!
//! Layout: `types.rs` (data), `triangulate.rs`, `merge.rs`, `trace.rs`.

mod merge;
mod trace;
mod triangulate;
mod types;

pub use merge::{EdgeTest, Merger};
pub use trace::{decompose, Decomposition, Session, TraceRecorder, LABEL_FINAL, LABEL_TRIANGULATED};
pub use triangulate::triangulate;
pub use types::{
    DecompositionStep, EdgeKey, EdgeOutcome, EdgeStatus, Piece, Trace, TraceCursor, Triangle,
};
