//! Tolerance configuration shared by all orientation-based predicates.
//!
//! - `GeomCfg`: the single epsilon used for convexity, ear, and merge decisions.
//!
//! The default (`1e-9`, absolute) is tuned for coordinates in roughly `[0, 100]`.
//! `orient` is quadratic in length, so `scaled_for` grows/shrinks the epsilon
//! with the square of the input extent.

use nalgebra::Vector2;

use crate::error::{DecompError, Result};

/// Default absolute tolerance for `orient` comparisons.
pub const DEFAULT_EPS: f64 = 1e-9;

/// Coordinate extent the default tolerance was tuned for.
pub const REFERENCE_EXTENT: f64 = 100.0;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Values of `orient` with magnitude `<= eps` count as collinear.
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl GeomCfg {
    /// Explicit absolute tolerance. Rejects negative or non-finite values.
    pub fn with_eps(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(DecompError::InvalidTolerance { value: eps });
        }
        Ok(Self { eps })
    }

    /// Tolerance scaled to the bounding box of `points`.
    ///
    /// `eps = DEFAULT_EPS * (extent / REFERENCE_EXTENT)^2`, where `extent` is the
    /// larger bounding-box side. Falls back to the default for empty or
    /// non-finite input.
    pub fn scaled_for(points: &[Vector2<f64>]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (mut lo, mut hi) = (*first, *first);
        for p in points {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        let extent = (hi - lo).max();
        if !extent.is_finite() || extent <= 0.0 {
            return Self::default();
        }
        let ratio = extent / REFERENCE_EXTENT;
        Self {
            eps: (DEFAULT_EPS * ratio * ratio).max(f64::EPSILON),
        }
    }
}
