//! Ear-clipping triangulation with a front-restarting scan.
//!
//! The emission order is part of the output contract: after every clip the
//! scan restarts at the front of the active list, so identical input always
//! yields identical triangle order (and thus identical trace labels).
//!
//! Helpers are pure functions over the active-vertex list `active` and the
//! polygon; the loop owns and mutates `active` explicitly.

use tracing::debug;

use super::types::Triangle;
use crate::error::{DecompError, Result};
use crate::geom2::{is_ccw, point_in_triangle, GeomCfg, Polygon};

/// Triangulate a CCW simple polygon into `n - 2` CCW triangles.
pub fn triangulate(poly: &Polygon, cfg: GeomCfg) -> Result<Vec<Triangle>> {
    let mut active: Vec<usize> = (0..poly.len()).collect();
    let mut tris = Vec::with_capacity(poly.len().saturating_sub(2));
    while active.len() > 3 {
        let Some(i) = find_ear(poly, &active, cfg.eps) else {
            return Err(DecompError::TriangulationFailed {
                remaining: active.len(),
                clipped: tris.len(),
            });
        };
        let tri = corner(&active, i);
        debug!(?tri, remaining = active.len() - 1, "clip ear");
        tris.push(tri);
        active.remove(i);
    }
    tris.push([active[0], active[1], active[2]]);
    Ok(tris)
}

/// `(prev, cur, next)` around position `i` of the cyclic active list.
#[inline]
fn corner(active: &[usize], i: usize) -> Triangle {
    let n = active.len();
    [active[(i + n - 1) % n], active[i], active[(i + 1) % n]]
}

/// Strictly convex corner at position `i` (collinear counts as reflex).
pub(crate) fn is_convex_at(poly: &Polygon, active: &[usize], i: usize, eps: f64) -> bool {
    let [a, b, c] = corner(active, i);
    is_ccw(poly.point(a), poly.point(b), poly.point(c), eps)
}

/// Convex corner whose triangle holds no other active vertex, boundary included.
pub(crate) fn is_ear(poly: &Polygon, active: &[usize], i: usize, eps: f64) -> bool {
    if !is_convex_at(poly, active, i, eps) {
        return false;
    }
    let n = active.len();
    let [a, b, c] = corner(active, i);
    let (pa, pb, pc) = (poly.point(a), poly.point(b), poly.point(c));
    let (prev, next) = ((i + n - 1) % n, (i + 1) % n);
    !(0..n)
        .filter(|&j| j != prev && j != i && j != next)
        .any(|j| point_in_triangle(poly.point(active[j]), pa, pb, pc))
}

/// First ear position in scan order.
pub(crate) fn find_ear(poly: &Polygon, active: &[usize], eps: f64) -> Option<usize> {
    (0..active.len()).find(|&i| is_ear(poly, active, i, eps))
}
