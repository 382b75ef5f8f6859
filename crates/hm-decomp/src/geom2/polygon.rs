//! Simple polygon ingestion with CCW normalization.
//!
//! Invariants
//! - At least 3 vertices, all coordinates finite.
//! - Counter-clockwise: if the input's signed area is negative the vertex order
//!   is reversed once at construction and `was_reversed()` reports it.
//! - Simplicity (no self-intersections) is the caller's responsibility.
//! - Immutable after construction; pieces refer to it by index only.

use nalgebra::Vector2;

use super::predicates::signed_area;
use crate::decomp::Piece;
use crate::error::{DecompError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Vector2<f64>>,
    area: f64,
    reversed: bool,
}

impl Polygon {
    /// Validate and normalize a vertex ring.
    pub fn new(mut points: Vec<Vector2<f64>>) -> Result<Self> {
        if points.len() < 3 {
            return Err(DecompError::TooFewVertices {
                count: points.len(),
            });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(DecompError::NonFiniteCoordinate { index });
        }
        let mut area = signed_area(&points);
        let reversed = area < 0.0;
        if reversed {
            points.reverse();
            area = -area;
        }
        Ok(Self {
            points,
            area,
            reversed,
        })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false once constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    /// Vertex `i` of the normalized ring.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    #[inline]
    pub fn point(&self, i: usize) -> Vector2<f64> {
        self.points[i]
    }

    /// Unsigned area (the signed area after normalization).
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn was_reversed(&self) -> bool {
        self.reversed
    }

    /// Map a normalized index back to the caller's input index.
    #[inline]
    pub fn input_index(&self, i: usize) -> usize {
        if self.reversed {
            self.points.len() - 1 - i
        } else {
            i
        }
    }

    /// Resolve an index ring against this polygon.
    ///
    /// # Panics
    /// If any index is out of range.
    pub fn coords(&self, indices: &[usize]) -> Vec<Vector2<f64>> {
        indices.iter().map(|&i| self.points[i]).collect()
    }

    /// Boundary of a piece in CCW order, or `None` if it names a vertex this
    /// polygon does not have.
    pub fn piece_coords(&self, piece: &Piece) -> Option<Vec<Vector2<f64>>> {
        piece
            .indices()
            .iter()
            .map(|&i| self.points.get(i).copied())
            .collect()
    }
}
