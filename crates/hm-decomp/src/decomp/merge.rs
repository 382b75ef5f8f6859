//! Hertel–Mehlhorn merging of a triangulation into convex pieces.
//!
//! Model
//! - Scan unordered piece pairs `(i, j)`, `i < j`, in index order.
//! - A pair is a candidate when its boundary-edge sets share exactly one edge
//!   and that edge has not been tested in this run. Zero or several shared
//!   edges just mean "not a candidate".
//! - The candidate edge is marked tested, the two CCW boundaries are spliced
//!   across it, and the result is kept iff it passes the sign-consistency
//!   convexity scan (Inessential). Otherwise the edge is Essential and the scan
//!   resumes after the pair.
//! - After a merge indices shift, so the scan restarts at `(0, 1)`.
//!
//! Guarantees (Hertel–Mehlhorn): no merge across an Essential edge, every
//! diagonal tested at most once, every Inessential diagonal tested before the
//! loop ends, at most 4× the optimal piece count.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use super::types::{EdgeKey, EdgeOutcome, EdgeStatus, Piece, Triangle};
use crate::geom2::{is_convex_ring, GeomCfg, Polygon};

/// One performed edge test. Inessential tests have already been applied.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeTest {
    pub edge: EdgeKey,
    pub status: EdgeStatus,
    /// Piece indices at the time of the test (`pair.0 < pair.1`).
    pub pair: (usize, usize),
}

impl EdgeTest {
    #[inline]
    pub fn outcome(&self) -> EdgeOutcome {
        EdgeOutcome {
            status: self.status,
            edge: self.edge,
        }
    }
}

/// Working state of one merge run; owns the mutable piece list.
#[derive(Clone, Debug)]
pub struct Merger<'a> {
    poly: &'a Polygon,
    cfg: GeomCfg,
    pieces: Vec<Piece>,
    edges: Vec<BTreeSet<EdgeKey>>,
    tested: HashSet<EdgeKey>,
    cursor: (usize, usize),
    merges: usize,
}

impl<'a> Merger<'a> {
    pub fn new(poly: &'a Polygon, pieces: Vec<Piece>, cfg: GeomCfg) -> Self {
        let edges = pieces.iter().map(Piece::edges).collect();
        Self {
            poly,
            cfg,
            pieces,
            edges,
            tested: HashSet::new(),
            cursor: (0, 1),
            merges: 0,
        }
    }

    pub fn from_triangles(poly: &'a Polygon, tris: &[Triangle], cfg: GeomCfg) -> Self {
        Self::new(poly, tris.iter().copied().map(Piece::from).collect(), cfg)
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn into_pieces(self) -> Vec<Piece> {
        self.pieces
    }

    #[inline]
    pub fn is_tested(&self, edge: EdgeKey) -> bool {
        self.tested.contains(&edge)
    }

    #[inline]
    pub fn tested_count(&self) -> usize {
        self.tested.len()
    }

    #[inline]
    pub fn merge_count(&self) -> usize {
        self.merges
    }

    /// Perform the next edge test, applying the merge if it is Inessential.
    ///
    /// Returns `None` once a full scan finds no untested single-edge pair.
    /// Further calls keep returning `None`.
    pub fn step(&mut self) -> Option<EdgeTest> {
        let k = self.pieces.len();
        let (mut i, mut j) = self.cursor;
        while i < k {
            while j < k {
                if let Some(edge) = self.single_shared_edge(i, j) {
                    if self.tested.insert(edge) {
                        return Some(self.decide(i, j, edge));
                    }
                }
                j += 1;
            }
            i += 1;
            j = i + 1;
        }
        self.cursor = (k, k + 1);
        None
    }

    /// Drive `step` to completion; returns the number of merges performed.
    pub fn run(&mut self) -> usize {
        let before = self.merges;
        while self.step().is_some() {}
        self.merges - before
    }

    fn single_shared_edge(&self, i: usize, j: usize) -> Option<EdgeKey> {
        let mut shared = self.edges[i].intersection(&self.edges[j]);
        match (shared.next(), shared.next()) {
            (Some(&e), None) => Some(e),
            _ => None,
        }
    }

    fn decide(&mut self, i: usize, j: usize, edge: EdgeKey) -> EdgeTest {
        let merged = splice(&self.pieces[i], &self.pieces[j], edge)
            .filter(|m| is_convex_ring(&self.poly.coords(m.indices()), self.cfg.eps));
        let status = match merged {
            Some(m) => {
                self.edges[i] = m.edges();
                self.pieces[i] = m;
                self.pieces.remove(j);
                self.edges.remove(j);
                self.cursor = (0, 1);
                self.merges += 1;
                EdgeStatus::Inessential
            }
            None => {
                self.cursor = (i, j + 1);
                EdgeStatus::Essential
            }
        };
        debug!(%edge, %status, i, j, pieces = self.pieces.len(), "edge test");
        EdgeTest {
            edge,
            status,
            pair: (i, j),
        }
    }
}

/// Splice two CCW boundaries across their shared edge.
///
/// With `u → v` on `a`, `b` must traverse `v → u`. The result walks `a` from
/// `v` round to `u`, then `b` strictly between `u` and `v`. Returns `None`
/// when the windings disagree or the union pinches at a repeated vertex.
pub(crate) fn splice(a: &Piece, b: &Piece, edge: EdgeKey) -> Option<Piece> {
    let (av, bv) = (a.indices(), b.indices());
    let (la, lb) = (av.len(), bv.len());
    let k = (0..la).find(|&k| EdgeKey::new(av[k], av[(k + 1) % la]) == edge)?;
    let (u, v) = (av[k], av[(k + 1) % la]);
    let m = (0..lb).find(|&m| bv[m] == v && bv[(m + 1) % lb] == u)?;

    let mut ring = Vec::with_capacity(la + lb - 2);
    ring.extend((0..la).map(|s| av[(k + 1 + s) % la]));
    ring.extend((0..lb - 2).map(|s| bv[(m + 2 + s) % lb]));

    let distinct: HashSet<usize> = ring.iter().copied().collect();
    if distinct.len() != ring.len() {
        return None;
    }
    Some(Piece::new(ring))
}
