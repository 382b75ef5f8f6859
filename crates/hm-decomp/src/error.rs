//! Error types for the decomposition engine.

use thiserror::Error;

/// Result type alias using [`DecompError`].
pub type Result<T> = std::result::Result<T, DecompError>;

/// Errors raised by polygon ingestion, triangulation, and the random source.
///
/// Adjacency ambiguity in the merge loop is deliberately absent: a pair of
/// pieces sharing zero or several edges is simply not a merge candidate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecompError {
    /// Fewer than three input points.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of points supplied.
        count: usize,
    },

    /// An input coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Input index of the offending point.
        index: usize,
    },

    /// Tolerance must be finite and non-negative.
    #[error("invalid tolerance: {value}")]
    InvalidTolerance {
        /// The rejected value.
        value: f64,
    },

    /// A full scan of the active vertices found no ear.
    #[error("triangulation failed: no ear found with {remaining} vertices left after {clipped} clips")]
    TriangulationFailed {
        /// Active vertices left when the scan was exhausted.
        remaining: usize,
        /// Ears clipped before the failure.
        clipped: usize,
    },

    /// Random polygon source was given unusable parameters.
    #[error("invalid generator params: {reason}")]
    InvalidParams {
        /// Human-readable reason.
        reason: String,
    },
}

impl DecompError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}
