//! Convex decomposition of simple polygons with a replayable trace.
//!
//! Pipeline: CCW-normalized `Polygon` → ear-clipping triangulation →
//! Hertel–Mehlhorn merging → ordered, owned `Trace` of every intermediate
//! state. Rendering, UI, and animation export live outside this crate and
//! only consume `Polygon` coordinates and `Trace` steps.
//!
//! API Policy
//! - Single-threaded and synchronous; every run owns its working state, so
//!   independent runs may execute on separate threads without sharing.
//! - No global state: tolerances travel in `GeomCfg`, results in `Session`.

pub mod api;
pub mod decomp;
pub mod error;
pub mod geom2;

pub use error::{DecompError, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::decomp::{
        decompose, triangulate, Decomposition, DecompositionStep, EdgeKey, EdgeOutcome,
        EdgeStatus, Merger, Piece, Session, Trace, TraceCursor, TraceRecorder, Triangle,
    };
    pub use crate::error::{DecompError, Result};
    pub use crate::geom2::rand::{
        draw_simple_polygon, make_simple_polygon, RandomPolygonCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{GeomCfg, Polygon};
    pub use nalgebra::Vector2 as Vec2;
}
