//! Orientation, containment, and area primitives.
//!
//! All sign conventions assume counter-clockwise winding: a positive `orient`
//! is a left turn.

use nalgebra::Vector2;

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `c` lies left of the directed line `a → b`, negative when
/// right, near zero when collinear.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Strict left turn beyond the tolerance: `orient(a, b, c) > eps`.
#[inline]
pub fn is_ccw(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    orient(a, b, c) > eps
}

/// Inclusive point-in-triangle test.
///
/// Works for either winding of `(a, b, c)`. Points on an edge or at a corner
/// count as inside, so ears touching another active vertex are rejected.
pub fn point_in_triangle(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    let o1 = orient(a, b, p);
    let o2 = orient(b, c, p);
    let o3 = orient(c, a, p);
    (o1 >= 0.0 && o2 >= 0.0 && o3 >= 0.0) || (o1 <= 0.0 && o2 <= 0.0 && o3 <= 0.0)
}

/// Shoelace signed area; positive for CCW rings.
pub fn signed_area(ring: &[Vector2<f64>]) -> f64 {
    let n = ring.len();
    let mut twice = 0.0;
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    twice / 2.0
}

/// Sign-consistency convexity scan over a closed ring.
///
/// Turns with `|orient| <= eps` are ignored; the ring is convex when every
/// remaining turn has the same sign. Rings with no significant turn (fully
/// collinear) pass.
pub fn is_convex_ring(ring: &[Vector2<f64>], eps: f64) -> bool {
    let n = ring.len();
    let mut sign = 0.0_f64;
    for i in 0..n {
        let o = orient(ring[i], ring[(i + 1) % n], ring[(i + 2) % n]);
        if o.abs() <= eps {
            continue;
        }
        if sign == 0.0 {
            sign = o.signum();
        } else if o.signum() != sign {
            return false;
        }
    }
    true
}
