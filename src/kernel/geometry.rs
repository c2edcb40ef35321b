//! # Geometry Kernel
//!
//! Cross product, normalization, rotation and angles over run-time sized
//! buffers, built on the [scalar kernel](super::scalar).
//!
//! ## Rotation
//!
//! [`rotate`] turns a vector around an axis by an angle in radians. Vectors
//! of dimension 1 or 2 rotated around the canonical Z axis stay planar, and
//! 3-component vectors rotated around a canonical axis use the single-axis
//! rotation formulas. Every other case goes through Rodrigues' rotation
//! formula on three components:
//!
//! ```text
//! a' = a·cos(θ) + (k × a)·sin(θ) + k·(k · a)·(1 − cos(θ))
//! ```
//!
//! where `k` is the normalized axis. Inputs are truncated or zero padded to
//! three components first, so the result of the general case always has
//! exactly three.
//!
//! ## Angles
//!
//! [`angle`] requires both vectors to share a dimension and returns:
//! - `0` for empty vectors
//! - `π` or `0` on a line, depending on whether `b` lies below `a`
//! - the signed planar angle from `a` to `b` in two dimensions
//! - the unsigned angle from the spherical law of cosines otherwise

use std::f64::consts::PI;

use nalgebra::Vector3;

use super::scalar::{dot, equal, magnitude};
use crate::constants::{TOLERANCE, X, Y, Z};
use crate::errors::{Result, VectorError};

/// Cross product of two 3-component vectors
///
/// # Errors
///
/// [`VectorError::DimensionError`] if either operand does not have exactly
/// three components.
///
/// # Examples
///
/// ```rust
/// use vector::kernel::geometry::cross;
///
/// let c = cross(&[0.0, 1.0, 2.0], &[3.0, 2.0, 1.0]).unwrap();
/// assert_eq!(c, vec![-3.0, 6.0, -3.0]);
///
/// assert!(cross(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
/// ```
pub fn cross(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    match (a, b) {
        ([ax, ay, az], [bx, by, bz]) => Ok(vec![
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ]),
        _ => Err(VectorError::DimensionError {
            left: a.len(),
            right: b.len(),
        }),
    }
}

/// Scales `a` to unit length
///
/// Vectors shorter than [`TOLERANCE`] have no meaningful direction and are
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// use vector::kernel::geometry::unit;
///
/// let mut a = vec![3.0, 4.0];
/// unit(&mut a);
/// assert_eq!(a, vec![0.6, 0.8]);
///
/// let mut zero = vec![0.0, 0.0, 0.0];
/// unit(&mut zero);
/// assert_eq!(zero, vec![0.0, 0.0, 0.0]);
/// ```
pub fn unit(a: &mut [f64]) -> &mut [f64] {
    let length = magnitude(a);
    if length < TOLERANCE {
        log::debug!("not normalizing vector with magnitude {length:e}");
        return a;
    }
    a.iter_mut().for_each(|ai| *ai /= length);
    a
}

/// Rotates `a` in place by `angle` radians around `axis`
///
/// The axis does not need to be normalized. A dimension 0 vector is left
/// untouched. The dimension of the result follows these rules:
///
/// - dimension 1 or 2 around the canonical Z axis: 2 components
/// - anything else: exactly 3 components, truncating or zero padding the input
///
/// An axis shorter than [`TOLERANCE`] describes no rotation; the vector is
/// only reshaped.
///
/// # Examples
///
/// ```rust
/// use std::f64::consts::PI;
/// use vector::constants::{Y, Z};
/// use vector::kernel::geometry::rotate;
///
/// let mut a = vec![1.0, 0.0, 0.0];
/// rotate(&mut a, PI / 2.0, &Y);
/// assert!(a[0].abs() < 1e-15);
/// assert_eq!(a[2], -1.0);
///
/// let mut planar = vec![1.0];
/// rotate(&mut planar, PI, &Z);
/// assert_eq!(planar.len(), 2);
/// assert!((planar[0] + 1.0).abs() < 1e-15);
/// ```
pub fn rotate<'a>(a: &'a mut Vec<f64>, angle: f64, axis: &[f64]) -> &'a mut Vec<f64> {
    let dim = a.len();
    if dim == 0 {
        return a;
    }

    let (sin, cos) = angle.sin_cos();
    let around_z = equal(axis, &Z);

    if dim <= 2 && around_z {
        a.resize(2, 0.0);
        rotate_plane(a, 0, 1, sin, cos);
        return a;
    }

    if dim == 3 {
        if around_z {
            rotate_plane(a, 0, 1, sin, cos);
            return a;
        }
        if equal(axis, &X) {
            rotate_plane(a, 1, 2, sin, cos);
            return a;
        }
        if equal(axis, &Y) {
            rotate_plane(a, 2, 0, sin, cos);
            return a;
        }
    }

    if dim > 3 {
        log::debug!("rotation truncates a {dim}-dimensional vector to 3 components");
    }
    a.resize(3, 0.0);

    let k = first_three(axis);
    let length = k.norm();
    if length < TOLERANCE {
        log::debug!("rotation axis has magnitude {length:e}; leaving vector unrotated");
        return a;
    }

    let k = k / length;
    let v = first_three(a);
    let rotated = v * cos + k.cross(&v) * sin + k * (k.dot(&v) * (1.0 - cos));
    a.copy_from_slice(rotated.as_slice());
    a
}

/// Angle in radians from `a` to `b`
///
/// # Errors
///
/// [`VectorError::DimensionMismatch`] if `a` and `b` differ in dimension.
///
/// # Examples
///
/// ```rust
/// use std::f64::consts::PI;
/// use vector::kernel::geometry::angle;
///
/// assert_eq!(angle(&[], &[]).unwrap(), 0.0);
/// assert_eq!(angle(&[2.0], &[-1.0]).unwrap(), PI);
/// assert!((angle(&[1.0, 0.0], &[0.0, 1.0]).unwrap() - PI / 2.0).abs() < 1e-15);
///
/// let theta = angle(&[17.0, 4.0, 3.0], &[-1.0, 15.0, 7.0]).unwrap();
/// assert!((theta - 1.351241200672429).abs() < 1e-12);
///
/// assert!(angle(&[1.0, 0.0], &[1.0, 0.0, 0.0]).is_err());
/// ```
pub fn angle(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let theta = match (a, b) {
        ([], []) => 0.0,
        ([ax], [bx]) => {
            if bx < ax {
                PI
            } else {
                0.0
            }
        }
        ([ax, ay], [bx, by]) => by.atan2(*bx) - ay.atan2(*ax),
        _ => {
            let mut ua = a.to_vec();
            let mut ub = b.to_vec();
            unit(&mut ua);
            unit(&mut ub);
            // Unit vectors can overshoot [-1, 1] by an ulp.
            dot(&ua, &ub).clamp(-1.0, 1.0).acos()
        }
    };

    Ok(theta)
}

/// Rotates the plane spanned by components `i` and `j`, from `i` toward `j`
fn rotate_plane(a: &mut [f64], i: usize, j: usize, sin: f64, cos: f64) {
    let (ai, aj) = (a[i], a[j]);
    a[i] = ai * cos - aj * sin;
    a[j] = ai * sin + aj * cos;
}

/// First three components of `v`, zero padded
fn first_three(v: &[f64]) -> Vector3<f64> {
    Vector3::from_fn(|i, _| v.get(i).copied().unwrap_or(0.0))
}
