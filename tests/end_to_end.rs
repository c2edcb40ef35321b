//! Worked examples exercising the public API end to end

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::rstest;
use std::f64::consts::{FRAC_PI_2, PI};
use vector::kernel;
use vector::{Axis, Vector, VectorError};

#[rstest]
#[case(&[1.0], &[1.0, 2.0], &[2.0, 2.0])]
#[case(&[1.0, 2.0], &[1.0], &[2.0, 2.0])]
#[case(&[0.0, 2.0], &[1.0, 4.0], &[1.0, 6.0])]
#[case(&[], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])]
#[case(&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0], &[2.0, 3.0, 3.0, 4.0])]
fn addition_reconciles_dimensions(
    #[case] a: &[f64],
    #[case] b: &[f64],
    #[case] expected: &[f64],
) {
    let sum = Vector::from(a) + &Vector::from(b);
    assert_eq!(sum.as_slice(), expected);
}

#[rstest]
#[case(&[1.0, 2.0, 3.0], &[1.0, 2.0], 5.0)]
#[case(&[1.0, 2.0], &[1.0, 2.0, 3.0], 5.0)]
#[case(&[0.0, 2.0], &[2.0, 0.0], 0.0)]
#[case(&[], &[], 0.0)]
fn dot_product_zero_pads(#[case] a: &[f64], #[case] b: &[f64], #[case] expected: f64) {
    assert_eq!(kernel::dot(a, b), expected);
}

#[test]
fn sum_of_several_vectors() {
    let v = Vector::zeros(3).sum(&[Vector::from([4.0, 2.0]), Vector::from([1.0, 2.0, 4.0])]);
    assert_eq!(v, Vector::from([5.0, 4.0, 4.0]));

    let v = Vector::from([0.0, 2.0]).sum(&[[1.0, 4.0]]);
    assert_eq!(v, Vector::from([1.0, 6.0]));
}

#[test]
fn in_place_accumulation() {
    let mut result = Vector::zeros(3);
    let v1 = Vector::from([2.0, 1.0, 3.0]);
    let v2 = Vector::from([4.0, 12.0, 6.0]);

    result += &v2;
    result -= &v1;
    assert_eq!(result, Vector::from([2.0, 11.0, 3.0]));
    assert_eq!(v1, Vector::from([2.0, 1.0, 3.0]));
}

#[test]
fn scalar_results() {
    assert_relative_eq!(Vector::from([1.0, 2.0]).magnitude(), 2.23606797749979);

    let u = Vector::from([1.0, 2.0]).unit();
    assert_relative_eq!(u[0], 0.4472135954999579);
    assert_relative_eq!(u[1], 0.8944271909999159);

    let inverted = Vector::from([19.0, 0.0, 3.0]).invert();
    assert_eq!(inverted, Vector::from([-19.0, -0.0, -3.0]));

    assert_eq!(Vector::from([1.0, 2.0]).scale(2.0), Vector::from([2.0, 4.0]));
    assert!(!Vector::from([2.0, 1.0]).equal(&[1.0, 2.0]));
}

#[test]
fn cross_product_example_and_guard() {
    let c = Vector::from([0.0, 1.0, 2.0]).cross(&[3.0, 2.0, 1.0]).unwrap();
    assert_eq!(c, Vector::from([-3.0, 6.0, -3.0]));

    let err = Vector::from([1.0, 2.0])
        .cross(&[1.0, 2.0, 3.0])
        .unwrap_err();
    assert!(matches!(err, VectorError::DimensionError { left: 2, right: 3 }));
    assert!(err.to_string().contains("not 3-dimensional"));
}

#[test]
fn rotation_examples() {
    let v = Vector::from([1.0, 0.0, 0.0]).rotate_about(FRAC_PI_2, Axis::Y);
    assert_abs_diff_eq!(v[0], 6.123233995736766e-17, epsilon = 1e-15);
    assert_eq!(v[1], 0.0);
    assert_eq!(v[2], -1.0);

    // Planar rotation keeps two components
    let v = Vector::from([1.0, 2.0]).rotate(FRAC_PI_2);
    assert_eq!(v.dim(), 2);
    assert!(v.equal(&[-2.0, 1.0]));

    // Extra dimensions are dropped
    let v = Vector::from([0.0, 1.0, 0.0, 5.0]).rotate_about(PI, Axis::X);
    assert_eq!(v.dim(), 3);
    assert!(v.equal(&[0.0, -1.0, 0.0]));

    // Zero vectors stay where they are
    assert!(Vector::default().rotate(1.0).is_empty());
}

#[test]
fn angle_examples() {
    let theta = Vector::from([17.0, 4.0, 3.0])
        .angle(&[-1.0, 15.0, 7.0])
        .unwrap();
    assert_abs_diff_eq!(theta, 1.351241200672429, epsilon = 1e-12);

    assert_eq!(Vector::default().angle(Vector::default()).unwrap(), 0.0);
    assert_eq!(Vector::from([3.0]).angle(&[1.0]).unwrap(), PI);
    assert_eq!(Vector::from([3.0]).angle(&[4.0]).unwrap(), 0.0);
    assert_relative_eq!(Vector::from([0.0, 4.0]).angle(&[4.0, 0.0]).unwrap(), -FRAC_PI_2);

    let err = Vector::from([0.0, 4.0]).angle(Axis::X).unwrap_err();
    assert_eq!(err, VectorError::DimensionMismatch { left: 2, right: 3 });
    assert!(err.to_string().contains("not equally dimensioned"));
}

#[test]
fn swizzle_examples() {
    let v = Vector::from([1.0, 12.0, 73.2, 99.0]);
    assert_eq!(
        v.swizzle(&[3, 0, 1, 2]).unwrap(),
        Vector::from([99.0, 1.0, 12.0, 73.2])
    );
    assert!(v.swizzle(&[]).unwrap().is_empty());

    let err = Vector::from([1.0, 2.0, 19.0]).swizzle(&[10]).unwrap_err();
    assert_eq!(err, VectorError::IndexOutOfRange { index: 10, len: 3 });
}

#[test]
fn non_finite_values_propagate() {
    let v = Vector::from([f64::NAN, 1.0]) + &Vector::from([1.0, f64::INFINITY]);
    assert!(v[0].is_nan());
    assert!(v[1].is_infinite());
    assert!(Vector::from([f64::NAN, 0.0, 0.0]).magnitude().is_nan());
}
