//! Planar primitives for the decomposition engine.
//!
//! Purpose
//! - Orientation/containment/area predicates with an explicit tolerance.
//! - `Polygon`: validated, CCW-normalized, immutable vertex ring.
//! - A reproducible random source of simple polygons.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`.
//! - CCW is positive; every sign-based predicate assumes it.
//! - Tolerances travel in `GeomCfg`; nothing here reads global state.

pub mod polygon;
pub mod predicates;
pub mod rand;
mod types;

pub use polygon::Polygon;
pub use predicates::{is_ccw, is_convex_ring, orient, point_in_triangle, signed_area};
pub use types::{GeomCfg, DEFAULT_EPS, REFERENCE_EXTENT};

#[cfg(test)]
mod tests;
