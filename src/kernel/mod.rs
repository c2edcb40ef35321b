//! Arithmetic and geometry kernel over run-time sized `f64` buffers
//!
//! The functions in this module know nothing about ownership: mutating
//! operations take the receiver by `&mut` and return it for chaining, and
//! operands are borrowed slices. [`Vector`](crate::Vector) layers owned,
//! chainable methods on top.
//!
//! # Main Components
//!
//! - `reconcile`: how operands of unequal dimension are matched up
//! - `scalar`: add, subtract, sum, scale, invert, equal, magnitude, dot
//! - `geometry`: cross, unit, rotate, angle
//! - `swizzle`: bounds-checked index gathering

pub mod geometry;
pub mod reconcile;
pub mod scalar;
pub mod swizzle;

// Re-export the operations for convenience
pub use self::geometry::{angle, cross, rotate, unit};
pub use self::reconcile::{reconcile, Policy, Reconciliation};
pub use self::scalar::{add, dot, equal, invert, magnitude, scale, subtract, sum};
pub use self::swizzle::swizzle;
