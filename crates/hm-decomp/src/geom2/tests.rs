use super::*;
use crate::decomp::Piece;
use crate::error::DecompError;
use nalgebra::{vector, Vector2};

#[test]
fn orient_signs() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!((orient(a, b, vector![0.0, 1.0]) - 1.0).abs() < 1e-12);
    assert!(orient(a, b, vector![0.0, -1.0]) < 0.0);
    assert_eq!(orient(a, b, vector![2.0, 0.0]), 0.0);
}

#[test]
fn is_ccw_respects_tolerance() {
    let a = vector![0.0, 0.0];
    let b = vector![10.0, 0.0];
    // orient = 10 * 1e-11 = 1e-10, below the default eps
    let nearly = vector![5.0, 1e-11];
    assert!(!is_ccw(a, b, nearly, DEFAULT_EPS));
    assert!(is_ccw(a, b, nearly, 0.0));
    assert!(is_ccw(a, b, vector![5.0, 1.0], DEFAULT_EPS));
}

#[test]
fn point_in_triangle_is_inclusive() {
    let (a, b, c) = (vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]);
    assert!(point_in_triangle(vector![1.0, 1.0], a, b, c));
    // edge midpoint and corner count as contained
    assert!(point_in_triangle(vector![2.0, 0.0], a, b, c));
    assert!(point_in_triangle(a, a, b, c));
    assert!(!point_in_triangle(vector![3.0, 3.0], a, b, c));
    // winding-agnostic
    assert!(point_in_triangle(vector![1.0, 1.0], a, c, b));
}

#[test]
fn signed_area_gives_winding() {
    let ccw = [vector![0.0, 0.0], vector![10.0, 0.0], vector![10.0, 10.0], vector![0.0, 10.0]];
    assert!((signed_area(&ccw) - 100.0).abs() < 1e-12);
    let mut cw = ccw;
    cw.reverse();
    assert!((signed_area(&cw) + 100.0).abs() < 1e-12);
}

#[test]
fn convex_ring_ignores_collinear_turns() {
    let square_with_midpoint = [
        vector![0.0, 0.0],
        vector![5.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ];
    assert!(is_convex_ring(&square_with_midpoint, DEFAULT_EPS));
    let notch = [
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![5.0, 2.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ];
    assert!(!is_convex_ring(&notch, DEFAULT_EPS));
}

#[test]
fn polygon_normalizes_to_ccw() {
    let cw = Polygon::from_xy(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
    assert!(cw.was_reversed());
    assert!(signed_area(cw.points()) > 0.0);
    assert!((cw.area() - 100.0).abs() < 1e-12);
    // normalized index 0 is the last input point
    assert_eq!(cw.point(0), vector![10.0, 0.0]);
    assert_eq!(cw.input_index(0), 3);

    let ccw = Polygon::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap();
    assert!(!ccw.was_reversed());
    assert_eq!(ccw.input_index(2), 2);
}

#[test]
fn piece_coords_follow_the_normalized_ring() {
    let cw = Polygon::from_xy(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
    let ring = cw.piece_coords(&Piece::from([0, 1, 2])).unwrap();
    assert_eq!(ring, vec![vector![10.0, 0.0], vector![10.0, 10.0], vector![0.0, 10.0]]);
    assert_eq!(cw.coords(&[0, 1, 2]), ring);
    assert!(cw.piece_coords(&Piece::new(vec![0, 1, 4])).is_none());
}

#[test]
fn polygon_rejects_bad_input() {
    assert_eq!(
        Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0)]),
        Err(DecompError::TooFewVertices { count: 2 })
    );
    assert_eq!(
        Polygon::from_xy(&[(0.0, 0.0), (1.0, f64::NAN), (0.0, 1.0)]),
        Err(DecompError::NonFiniteCoordinate { index: 1 })
    );
}

#[test]
fn tolerance_config() {
    assert_eq!(GeomCfg::default().eps, 1e-9);
    assert!(GeomCfg::with_eps(-1.0).is_err());
    assert!(GeomCfg::with_eps(f64::INFINITY).is_err());
    assert_eq!(GeomCfg::with_eps(0.0).unwrap().eps, 0.0);

    let unit: Vec<Vector2<f64>> = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    let big: Vec<Vector2<f64>> = unit.iter().map(|p| p * 1e4).collect();
    let reference: Vec<Vector2<f64>> = unit.iter().map(|p| p * REFERENCE_EXTENT).collect();
    assert!((GeomCfg::scaled_for(&reference).eps - DEFAULT_EPS).abs() < 1e-18);
    assert!(GeomCfg::scaled_for(&unit).eps < DEFAULT_EPS);
    assert!(GeomCfg::scaled_for(&big).eps > DEFAULT_EPS);
    assert_eq!(GeomCfg::scaled_for(&[]), GeomCfg::default());
}
