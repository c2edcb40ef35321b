//! # Scalar Kernel
//!
//! Elementwise operations over run-time sized `f64` buffers.
//!
//! Mutating operations work in place on the receiver and hand it back so
//! calls can be chained. Operand dimensions are reconciled as described in
//! [`reconcile`](super::reconcile): addition and subtraction grow the
//! receiver, the dot product reads the shorter operand as zero padded, and
//! everything else works over the receiver's own dimension.
//!
//! Two and three component buffers take slice-pattern fast paths; the results
//! are identical to the general loops.

use super::reconcile::{self, Policy};
use crate::constants::TOLERANCE;

/// Adds `b` to `a` componentwise, growing `a` with zeros if `b` is longer
///
/// # Examples
///
/// ```rust
/// use vector::kernel::scalar::add;
///
/// let mut a = vec![1.0];
/// add(&mut a, &[1.0, 2.0]);
/// assert_eq!(a, vec![2.0, 2.0]);
///
/// let mut b = vec![1.0, 2.0];
/// add(&mut b, &[1.0]);
/// assert_eq!(b, vec![2.0, 2.0]);
/// ```
pub fn add<'a>(a: &'a mut Vec<f64>, b: &[f64]) -> &'a mut Vec<f64> {
    match (a.as_mut_slice(), b) {
        ([ax, ay], [bx, by]) => {
            *ax += bx;
            *ay += by;
        }
        ([ax, ay, az], [bx, by, bz]) => {
            *ax += bx;
            *ay += by;
            *az += bz;
        }
        _ => {
            reconcile::apply(a, b.len(), Policy::Grow);
            a.iter_mut().zip(b).for_each(|(ai, bi)| *ai += bi);
        }
    }
    a
}

/// Subtracts `b` from `a` componentwise, growing `a` with zeros if `b` is longer
///
/// # Examples
///
/// ```rust
/// use vector::kernel::scalar::subtract;
///
/// let mut a = vec![1.0, 4.0];
/// subtract(&mut a, &[0.0, 2.0]);
/// assert_eq!(a, vec![1.0, 2.0]);
///
/// let mut b = vec![1.0];
/// subtract(&mut b, &[0.0, 2.0]);
/// assert_eq!(b, vec![1.0, -2.0]);
/// ```
pub fn subtract<'a>(a: &'a mut Vec<f64>, b: &[f64]) -> &'a mut Vec<f64> {
    match (a.as_mut_slice(), b) {
        ([ax, ay], [bx, by]) => {
            *ax -= bx;
            *ay -= by;
        }
        ([ax, ay, az], [bx, by, bz]) => {
            *ax -= bx;
            *ay -= by;
            *az -= bz;
        }
        _ => {
            reconcile::apply(a, b.len(), Policy::Grow);
            a.iter_mut().zip(b).for_each(|(ai, bi)| *ai -= bi);
        }
    }
    a
}

/// Adds every vector in `vectors` to `a`, in order
///
/// # Examples
///
/// ```rust
/// use vector::kernel::scalar::sum;
///
/// let mut a = vec![0.0; 3];
/// sum(&mut a, &[vec![4.0, 2.0], vec![1.0, 2.0, 4.0]]);
/// assert_eq!(a, vec![5.0, 4.0, 4.0]);
/// ```
pub fn sum<'a, V: AsRef<[f64]>>(a: &'a mut Vec<f64>, vectors: &[V]) -> &'a mut Vec<f64> {
    for b in vectors {
        add(a, b.as_ref());
    }
    a
}

/// Multiplies every component of `a` by `size`
pub fn scale(a: &mut [f64], size: f64) -> &mut [f64] {
    match a {
        [ax, ay] => {
            *ax *= size;
            *ay *= size;
        }
        [ax, ay, az] => {
            *ax *= size;
            *ay *= size;
            *az *= size;
        }
        _ => a.iter_mut().for_each(|ai| *ai *= size),
    }
    a
}

/// Negates every component of `a`
pub fn invert(a: &mut [f64]) -> &mut [f64] {
    a.iter_mut().for_each(|ai| *ai = -*ai);
    a
}

/// Returns `true` when `a` and `b` have the same dimension and every pair of
/// components differs by less than [`TOLERANCE`]
///
/// # Examples
///
/// ```rust
/// use vector::kernel::scalar::equal;
///
/// assert!(equal(&[1.0, 2.0], &[1.0 + 1e-10, 2.0]));
/// assert!(!equal(&[2.0, 1.0], &[1.0, 2.0]));
/// assert!(!equal(&[1.0, 2.0], &[1.0, 2.0, 0.0]));
/// ```
pub fn equal(a: &[f64], b: &[f64]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    match (a, b) {
        ([ax, ay], [bx, by]) => (ax - bx).abs() < TOLERANCE && (ay - by).abs() < TOLERANCE,
        ([ax, ay, az], [bx, by, bz]) => {
            (ax - bx).abs() < TOLERANCE
                && (ay - by).abs() < TOLERANCE
                && (az - bz).abs() < TOLERANCE
        }
        _ => a.iter().zip(b).all(|(ai, bi)| (ai - bi).abs() < TOLERANCE),
    }
}

/// Euclidean norm of `a`
///
/// # Mathematical Formula
///
/// `magnitude = sqrt(a₀² + a₁² + ... + aₙ²)`
pub fn magnitude(a: &[f64]) -> f64 {
    match a {
        [ax] => ax.abs(),
        [ax, ay] => (ax * ax + ay * ay).sqrt(),
        [ax, ay, az] => (ax * ax + ay * ay + az * az).sqrt(),
        _ => a.iter().map(|ai| ai * ai).sum::<f64>().sqrt(),
    }
}

/// Dot product of `a` and `b`, reading the shorter operand as zero padded
///
/// The result is not clamped. Callers feeding the dot product of unit
/// vectors to `acos` clamp it to `[-1, 1]` themselves.
///
/// # Examples
///
/// ```rust
/// use vector::kernel::scalar::dot;
///
/// assert_eq!(dot(&[0.0, 2.0], &[2.0, 0.0]), 0.0);
/// // 1*1 + 2*2 + 3*0
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[1.0, 2.0]), 5.0);
/// ```
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    match (a, b) {
        ([ax, ay], [bx, by]) => ax * bx + ay * by,
        ([ax, ay, az], [bx, by, bz]) => ax * bx + ay * by + az * bz,
        // Padding contributes nothing to the sum, so the common prefix is all
        // that needs visiting.
        _ => a.iter().zip(b).map(|(ai, bi)| ai * bi).sum(),
    }
}
