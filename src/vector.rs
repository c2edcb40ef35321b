//! # Vector Module
//!
//! This module provides [`Vector`], an owned sequence of `f64` components
//! whose dimension is decided at run time and may change as a side effect of
//! some operations.
//!
//! ## Ownership
//!
//! There is one vector type and one set of kernel operations. Where the
//! result goes is decided at the call site:
//!
//! - Consuming methods (`sum`, `scale`, `invert`, `unit`, `rotate`,
//!   `rotate_about`) mutate the vector's own buffer and hand it back, so
//!   they chain without allocating. Call `clone()` first to keep the original.
//! - `*_in_place` methods mutate an existing binding through `&mut self` and
//!   return `&mut Self` for chaining.
//! - Operators follow the same split: `a + &b` consumes `a`, `&a + &b`
//!   clones, `a += &b` works in place.
//!
//! ## Dimension Rules
//!
//! Addition and subtraction grow the receiver with zeros when the operand is
//! longer. The dot product reads the shorter operand as zero padded. See
//! [`kernel::reconcile`](crate::kernel::reconcile).
//!
//! ## Examples
//!
//! ```rust
//! use vector::{Axis, Vector};
//!
//! let a = Vector::from([1.0, 2.0]);
//! let b = Vector::from([2.0, 6.0]);
//!
//! // Copying arithmetic
//! let c = &a + &b;
//! assert_eq!(c, Vector::from([3.0, 8.0]));
//!
//! // In place on an existing binding
//! let mut result = Vector::zeros(3);
//! result
//!     .add_in_place([4.0, 12.0, 6.0])
//!     .sub_in_place([2.0, 1.0, 3.0]);
//! assert_eq!(result, Vector::from([2.0, 11.0, 3.0]));
//!
//! // Chained on an owned value
//! let turned = a.clone().scale(2.0).rotate_about(std::f64::consts::PI, Axis::Z);
//! assert!(turned.equal(&[-2.0, -4.0]));
//! ```

use std::ops::{Add, AddAssign, Deref, DerefMut, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{DVector, Vector3};
use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::constants::{X_INDEX, Y_INDEX, Z_INDEX};
use crate::errors::Result;
use crate::kernel::{geometry, scalar, swizzle};

/// Run-time sized vector of `f64` components
///
/// Serializes as a plain sequence of numbers. `==` compares components
/// exactly; use [`Vector::equal`] for the tolerant comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Creates a vector from its components
    pub fn new(components: Vec<f64>) -> Self {
        Vector(components)
    }

    /// Creates a vector of `dim` zero components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector::Vector;
    ///
    /// let v = Vector::zeros(3);
    /// assert_eq!(v.dim(), 3);
    /// assert_eq!(v.magnitude(), 0.0);
    /// ```
    pub fn zeros(dim: usize) -> Self {
        Vector(vec![0.0; dim])
    }

    /// Number of components
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Components as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Unwraps the backing buffer
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// First component, or `0.0` if the vector has none
    pub fn x(&self) -> f64 {
        self.component(X_INDEX)
    }

    /// Second component, or `0.0` if the vector has fewer than two
    pub fn y(&self) -> f64 {
        self.component(Y_INDEX)
    }

    /// Third component, or `0.0` if the vector has fewer than three
    pub fn z(&self) -> f64 {
        self.component(Z_INDEX)
    }

    fn component(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    // In-place operations on an existing binding

    /// Adds `other` componentwise, growing this vector if `other` is longer
    pub fn add_in_place(&mut self, other: impl AsRef<[f64]>) -> &mut Self {
        scalar::add(&mut self.0, other.as_ref());
        self
    }

    /// Subtracts `other` componentwise, growing this vector if `other` is longer
    pub fn sub_in_place(&mut self, other: impl AsRef<[f64]>) -> &mut Self {
        scalar::subtract(&mut self.0, other.as_ref());
        self
    }

    /// Adds every vector in `vectors`, in order
    pub fn sum_in_place<V: AsRef<[f64]>>(&mut self, vectors: &[V]) -> &mut Self {
        scalar::sum(&mut self.0, vectors);
        self
    }

    /// Multiplies every component by `size`
    pub fn scale_in_place(&mut self, size: f64) -> &mut Self {
        scalar::scale(&mut self.0, size);
        self
    }

    /// Negates every component
    pub fn invert_in_place(&mut self) -> &mut Self {
        scalar::invert(&mut self.0);
        self
    }

    /// Scales to unit length, leaving near-zero vectors unchanged
    pub fn unit_in_place(&mut self) -> &mut Self {
        geometry::unit(&mut self.0);
        self
    }

    /// Rotates by `angle` radians around `axis`
    ///
    /// See [`kernel::rotate`](crate::kernel::rotate) for how the dimension
    /// of the result is decided.
    pub fn rotate_in_place(&mut self, angle: f64, axis: impl AsRef<[f64]>) -> &mut Self {
        geometry::rotate(&mut self.0, angle, axis.as_ref());
        self
    }

    // Consuming operations that reuse the buffer

    /// Adds every vector in `vectors`, in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector::Vector;
    ///
    /// let v = Vector::zeros(3).sum(&[vec![4.0, 2.0], vec![1.0, 2.0, 4.0]]);
    /// assert_eq!(v, Vector::from([5.0, 4.0, 4.0]));
    /// ```
    pub fn sum<V: AsRef<[f64]>>(mut self, vectors: &[V]) -> Self {
        self.sum_in_place(vectors);
        self
    }

    /// Multiplies every component by `size`
    pub fn scale(mut self, size: f64) -> Self {
        self.scale_in_place(size);
        self
    }

    /// Negates every component
    pub fn invert(mut self) -> Self {
        self.invert_in_place();
        self
    }

    /// Returns the vector scaled to unit length
    ///
    /// Vectors with a magnitude below [`TOLERANCE`](crate::constants::TOLERANCE)
    /// come back unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector::Vector;
    ///
    /// let u = Vector::from([3.0, 4.0]).unit();
    /// assert_eq!(u, Vector::from([0.6, 0.8]));
    /// ```
    pub fn unit(mut self) -> Self {
        self.unit_in_place();
        self
    }

    /// Rotates by `angle` radians around the Z axis
    pub fn rotate(self, angle: f64) -> Self {
        self.rotate_about(angle, Axis::Z)
    }

    /// Rotates by `angle` radians around `axis`
    ///
    /// Vectors with more than three components come back with exactly three.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::f64::consts::FRAC_PI_2;
    /// use vector::{Axis, Vector};
    ///
    /// let v = Vector::from([1.0, 0.0, 0.0]).rotate_about(FRAC_PI_2, Axis::Y);
    /// assert!(v.equal(&[0.0, 0.0, -1.0]));
    /// ```
    pub fn rotate_about(mut self, angle: f64, axis: impl AsRef<[f64]>) -> Self {
        self.rotate_in_place(angle, axis);
        self
    }

    // Queries

    /// `true` if both vectors have the same dimension and all components are
    /// within [`TOLERANCE`](crate::constants::TOLERANCE) of each other
    pub fn equal(&self, other: impl AsRef<[f64]>) -> bool {
        scalar::equal(&self.0, other.as_ref())
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        scalar::magnitude(&self.0)
    }

    /// Dot product, reading the shorter operand as zero padded
    pub fn dot(&self, other: impl AsRef<[f64]>) -> f64 {
        scalar::dot(&self.0, other.as_ref())
    }

    /// Cross product of two 3-component vectors
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionError`](crate::VectorError::DimensionError) if
    /// either vector does not have exactly three components.
    pub fn cross(&self, other: impl AsRef<[f64]>) -> Result<Vector> {
        geometry::cross(&self.0, other.as_ref()).map(Vector)
    }

    /// Angle in radians from this vector to `other`
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`](crate::VectorError::DimensionMismatch)
    /// if the dimensions differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector::Vector;
    ///
    /// let a = Vector::from([17.0, 4.0, 3.0]);
    /// let theta = a.angle(&[-1.0, 15.0, 7.0]).unwrap();
    /// assert!((theta - 1.351241200672429).abs() < 1e-12);
    /// ```
    pub fn angle(&self, other: impl AsRef<[f64]>) -> Result<f64> {
        geometry::angle(&self.0, other.as_ref())
    }

    /// New vector gathered from this one at `indices`
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`](crate::VectorError::IndexOutOfRange)
    /// if an index is not below [`dim`](Vector::dim).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector::Vector;
    ///
    /// let v = Vector::from([1.0, 3.0, 9.0]);
    /// assert_eq!(v.swizzle(&[2, 1, 2, 0]).unwrap(), Vector::from([9.0, 3.0, 9.0, 1.0]));
    /// ```
    pub fn swizzle(&self, indices: &[usize]) -> Result<Vector> {
        swizzle::swizzle(&self.0, indices).map(Vector)
    }

    // nalgebra interop

    /// Converts to a nalgebra `Vector3`, if this vector has exactly three components
    pub fn to_vector3(&self) -> Option<Vector3<f64>> {
        match self.0.as_slice() {
            [x, y, z] => Some(Vector3::new(*x, *y, *z)),
            _ => None,
        }
    }

    /// Converts to a nalgebra `DVector`
    pub fn to_dvector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.0)
    }
}

impl Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl DerefMut for Vector {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

// Conversions

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Vector(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Vector(components.to_vec())
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Vector(components.to_vec())
    }
}

impl From<Axis> for Vector {
    fn from(axis: Axis) -> Self {
        Vector::from(axis.components())
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(vec: Vector3<f64>) -> Self {
        Vector(vec.as_slice().to_vec())
    }
}

impl From<DVector<f64>> for Vector {
    fn from(vec: DVector<f64>) -> Self {
        Vector(vec.as_slice().to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Arithmetic operators

impl Add<&Vector> for Vector {
    type Output = Vector;

    fn add(mut self, other: &Vector) -> Vector {
        self.add_in_place(other);
        self
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        self + &other
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        self.clone() + other
    }
}

impl Sub<&Vector> for Vector {
    type Output = Vector;

    fn sub(mut self, other: &Vector) -> Vector {
        self.sub_in_place(other);
        self
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        self - &other
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, other: &Vector) -> Vector {
        self.clone() - other
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, other: &Vector) {
        self.add_in_place(other);
    }
}

impl SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, other: &Vector) {
        self.sub_in_place(other);
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.clone().scale(scalar)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale_in_place(scalar);
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.invert()
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.clone().invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VectorError;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.dim(), 3);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(v[1], 2.0);

        assert_eq!(Vector::from([1.0, 2.0]), Vector::from(vec![1.0, 2.0]));
        assert_eq!(Vector::from(&[1.0, 2.0][..]), Vector::from([1.0, 2.0]));
        assert_eq!((0..3).map(f64::from).collect::<Vector>(), Vector::from([0.0, 1.0, 2.0]));
        assert_eq!(Vector::from(Axis::X), Vector::from([1.0, 0.0, 0.0]));
        assert!(Vector::default().is_empty());
    }

    #[test]
    fn test_named_components_default_to_zero() {
        let v = Vector::from([4.0, 2.0]);
        assert_eq!(v.x(), 4.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 0.0);

        let empty = Vector::default();
        assert_eq!(empty.x(), 0.0);
        assert_eq!(empty.y(), 0.0);
        assert_eq!(empty.z(), 0.0);

        let long = Vector::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(long.z(), 3.0);
    }

    #[test]
    fn test_component_mutation_through_deref() {
        let mut v = Vector::zeros(2);
        v[0] = 3.0;
        v.iter_mut().for_each(|c| *c += 1.0);
        assert_eq!(v, Vector::from([4.0, 1.0]));
    }

    #[test]
    fn test_consuming_methods_leave_clones_untouched() {
        let a = Vector::from([1.0, 2.0]);
        let scaled = a.clone().scale(2.0);
        assert_eq!(scaled, Vector::from([2.0, 4.0]));
        assert_eq!(a, Vector::from([1.0, 2.0]));

        let inverted = a.clone().invert();
        assert_eq!(inverted, Vector::from([-1.0, -2.0]));

        let unit = a.clone().unit();
        assert_relative_eq!(unit[0], 0.4472135954999579);
        assert_relative_eq!(unit[1], 0.8944271909999159);
        assert_eq!(a, Vector::from([1.0, 2.0]));
    }

    #[test]
    fn test_in_place_chain() {
        let mut result = Vector::zeros(3);
        result
            .add_in_place(Vector::from([4.0, 12.0, 6.0]))
            .sub_in_place([2.0, 1.0, 3.0]);
        assert_eq!(result, Vector::from([2.0, 11.0, 3.0]));

        result.scale_in_place(0.5).invert_in_place();
        assert_eq!(result, Vector::from([-1.0, -5.5, -1.5]));

        let mut grown = Vector::from([1.0]);
        grown.add_in_place([1.0, 2.0]);
        assert_eq!(grown, Vector::from([2.0, 2.0]));
    }

    #[test]
    fn test_operators() {
        let a = Vector::from([0.0, 2.0]);
        let b = Vector::from([1.0, 4.0]);

        assert_eq!(&a + &b, Vector::from([1.0, 6.0]));
        assert_eq!(&b - &a, Vector::from([1.0, 2.0]));
        assert_eq!(a.clone() + b.clone(), &b + &a);
        assert_eq!(&a * 2.0, Vector::from([0.0, 4.0]));
        assert_eq!(-&b, Vector::from([-1.0, -4.0]));

        let mut c = Vector::from([1.0]);
        c += &b;
        assert_eq!(c, Vector::from([2.0, 4.0]));
        c -= &a;
        assert_eq!(c, Vector::from([2.0, 2.0]));
        c *= 3.0;
        assert_eq!(c, Vector::from([6.0, 6.0]));
        assert_eq!(-c, Vector::from([-6.0, -6.0]));
    }

    #[test]
    fn test_queries() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!(a.dot(&[1.0, 2.0]), 5.0);
        assert!(a.equal(&a));
        assert!(!a.equal(&[1.0, 2.0]));
        assert_relative_eq!(Vector::from([1.0, 2.0]).magnitude(), 2.23606797749979);

        let c = Vector::from([0.0, 1.0, 2.0]).cross(&[3.0, 2.0, 1.0]).unwrap();
        assert_eq!(c, Vector::from([-3.0, 6.0, -3.0]));
        assert_eq!(
            Vector::from([1.0, 2.0]).cross(&a),
            Err(VectorError::DimensionError { left: 2, right: 3 })
        );

        assert_relative_eq!(Vector::from(Axis::X).angle(Axis::Y).unwrap(), FRAC_PI_2);
        assert!(Vector::from([1.0, 2.0]).angle(&a).is_err());
    }

    #[test]
    fn test_rotation_defaults_to_z() {
        let v = Vector::from([1.0, 0.0]).rotate(FRAC_PI_2);
        assert!(v.equal(&[0.0, 1.0]));

        let v = Vector::from([1.0, 0.0, 0.0]).rotate_about(PI, [0.0, 1.0, 0.0]);
        assert!(v.equal(&[-1.0, 0.0, 0.0]));

        let mut v = Vector::from([1.0, 2.0, 3.0, 4.0]);
        v.rotate_in_place(0.0, Axis::X);
        assert_eq!(v, Vector::from([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_swizzle() {
        let v = Vector::from([1.0, 12.0, 73.2, 99.0]);
        assert_eq!(
            v.swizzle(&[3, 0, 1, 2]).unwrap(),
            Vector::from([99.0, 1.0, 12.0, 73.2])
        );
        assert_eq!(
            Vector::from([1.0, 2.0, 3.0]).swizzle(&[10]),
            Err(VectorError::IndexOutOfRange { index: 10, len: 3 })
        );
    }

    #[test]
    fn test_nalgebra_conversions() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        let v3 = v.to_vector3().unwrap();
        assert_eq!(v3, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector::from(v3), v);
        assert!(Vector::from([1.0, 2.0]).to_vector3().is_none());

        let long = Vector::from([1.0, 2.0, 3.0, 4.0, 5.0]);
        let dv = long.to_dvector();
        assert_eq!(dv.len(), 5);
        assert_eq!(dv.dot(&dv), long.dot(&long));
        assert_eq!(Vector::from(dv), long);
    }

    #[test]
    fn test_serde_as_plain_sequence() {
        let v = Vector::from([1.0, -2.5, 3.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,-2.5,3.0]");

        let back: Vector = serde_json::from_str("[0.5, 4]").unwrap();
        assert_eq!(back, Vector::from([0.5, 4.0]));
    }
}
