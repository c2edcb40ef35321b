//! Error types for vector operations
//!
//! Every failure is a local, recoverable value. Numeric oddities such as NaN
//! or infinities are never reported here; they propagate through arithmetic.

use thiserror::Error;

/// Main error type for the vector kernel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// An operation defined only for 3-component vectors got something else
    #[error("vector is not 3-dimensional (got {left} and {right} components)")]
    DimensionError {
        /// Dimension of the receiver
        left: usize,
        /// Dimension of the operand
        right: usize,
    },

    /// Two vectors were required to share a dimension and did not
    #[error("vectors not equally dimensioned ({left} vs {right})")]
    DimensionMismatch {
        /// Dimension of the receiver
        left: usize,
        /// Dimension of the operand
        right: usize,
    },

    /// A swizzle index fell outside the source vector
    #[error("swizzle index {index} is out of range for a vector of dimension {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Dimension of the source vector
        len: usize,
    },
}

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;
