//! Vector: variable-dimension vector arithmetic
//!
//! This crate represents a vector as an ordered sequence of `f64` components
//! whose length is decided at run time, and provides the usual algebra over
//! it: addition, subtraction, scaling, dot and cross products,
//! normalization, rotation, angles and swizzling.
//!
//! Operands of different dimension are reconciled rather than rejected
//! wherever the operation allows it: addition grows the receiver, the dot
//! product zero pads. Operations that cannot be reconciled (cross products,
//! angles, out-of-range swizzles) return a [`VectorError`].
//!
//! ```rust
//! use std::f64::consts::FRAC_PI_2;
//! use vector::{Axis, Vector};
//!
//! let a = Vector::from([1.0]);
//! let b = Vector::from([1.0, 2.0]);
//! assert_eq!(&a + &b, Vector::from([2.0, 2.0]));
//!
//! let c = Vector::from([0.0, 1.0, 2.0]).cross(&[3.0, 2.0, 1.0])?;
//! assert_eq!(c, Vector::from([-3.0, 6.0, -3.0]));
//!
//! let r = Vector::from([1.0, 0.0, 0.0]).rotate_about(FRAC_PI_2, Axis::Y);
//! assert!(r.equal(&[0.0, 0.0, -1.0]));
//! # Ok::<(), vector::VectorError>(())
//! ```

pub mod axis;
pub mod constants;
pub mod errors;
pub mod kernel;
pub mod vector;

// Re-export commonly used types
pub use axis::Axis;
pub use errors::{Result, VectorError};
pub use vector::Vector;
