//! Data types for pieces, edges, and the replayable trace.
//!
//! Kept small and explicit so `triangulate`, `merge`, and `trace` stay readable.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A triangle as three polygon-vertex indices, CCW.
pub type Triangle = [usize; 3];

/// Undirected edge between two polygon vertices, stored sorted ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "[usize; 2]", from = "[usize; 2]")]
pub struct EdgeKey {
    lo: usize,
    hi: usize,
}

impl EdgeKey {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }
    #[inline]
    pub fn lo(&self) -> usize {
        self.lo
    }
    #[inline]
    pub fn hi(&self) -> usize {
        self.hi
    }
}

impl From<[usize; 2]> for EdgeKey {
    fn from([a, b]: [usize; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<EdgeKey> for [usize; 2] {
    fn from(e: EdgeKey) -> Self {
        [e.lo, e.hi]
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// Sub-polygon boundary as CCW polygon-vertex indices.
///
/// Never stores coordinates; resolve with `Polygon::coords(piece.indices())`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Piece(Vec<usize>);

impl Piece {
    #[inline]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Directed boundary sides `(v[k], v[k+1])`, cyclic.
    pub fn sides(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |k| (self.0[k], self.0[(k + 1) % n]))
    }

    /// Canonical keys of all boundary sides.
    pub fn edges(&self) -> BTreeSet<EdgeKey> {
        self.sides().map(|(a, b)| EdgeKey::new(a, b)).collect()
    }
}

impl From<Triangle> for Piece {
    fn from(t: Triangle) -> Self {
        Self(t.to_vec())
    }
}

/// Classification of a tested diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeStatus {
    /// Removing it would break convexity; it stays a boundary.
    Essential,
    /// Safe to remove; the two pieces were merged across it.
    Inessential,
}

impl fmt::Display for EdgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Essential => f.write_str("Essential"),
            Self::Inessential => f.write_str("Inessential"),
        }
    }
}

/// Result of one edge test, as highlighted by viewers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeOutcome {
    pub status: EdgeStatus,
    pub edge: EdgeKey,
}

/// One immutable trace entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecompositionStep {
    pub label: String,
    /// Deep copy of the piece list at this point.
    pub pieces: Vec<Piece>,
    pub outcome: Option<EdgeOutcome>,
}

/// Append-only, fully materialized sequence of steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<DecompositionStep>,
}

impl Trace {
    pub(crate) fn push(&mut self, step: DecompositionStep) {
        self.steps.push(step);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    #[inline]
    pub fn get(&self, i: usize) -> Option<&DecompositionStep> {
        self.steps.get(i)
    }
    #[inline]
    pub fn steps(&self) -> &[DecompositionStep] {
        &self.steps
    }
    pub fn iter(&self) -> std::slice::Iter<'_, DecompositionStep> {
        self.steps.iter()
    }

    /// Pieces of the last step, if any.
    pub fn final_pieces(&self) -> Option<&[Piece]> {
        self.steps.last().map(|s| s.pieces.as_slice())
    }

    /// Every edge outcome in order (test steps and merge steps alike).
    pub fn outcomes(&self) -> impl Iterator<Item = &EdgeOutcome> + '_ {
        self.steps.iter().filter_map(|s| s.outcome.as_ref())
    }

    pub fn cursor(&self) -> TraceCursor<'_> {
        TraceCursor { trace: self, pos: 0 }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a DecompositionStep;
    type IntoIter = std::slice::Iter<'a, DecompositionStep>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Random-access replay position over a `Trace`.
///
/// `forward`/`back` saturate at the ends instead of wrapping.
#[derive(Clone, Copy, Debug)]
pub struct TraceCursor<'a> {
    trace: &'a Trace,
    pos: usize,
}

impl<'a> TraceCursor<'a> {
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn current(&self) -> Option<&'a DecompositionStep> {
        self.trace.get(self.pos)
    }

    pub fn forward(&mut self) -> Option<&'a DecompositionStep> {
        if self.pos + 1 < self.trace.len() {
            self.pos += 1;
        }
        self.current()
    }

    pub fn back(&mut self) -> Option<&'a DecompositionStep> {
        self.pos = self.pos.saturating_sub(1);
        self.current()
    }

    /// Jump to `i`, clamped to the last step.
    pub fn seek(&mut self, i: usize) -> Option<&'a DecompositionStep> {
        self.pos = i.min(self.trace.len().saturating_sub(1));
        self.current()
    }
}
