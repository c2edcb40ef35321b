//! Bounds-checked index gathering ("swizzling")

use crate::errors::{Result, VectorError};

/// Builds a new vector whose `i`-th component is `a[indices[i]]`
///
/// Indices may repeat and appear in any order. An empty index list gives an
/// empty vector. The source is never modified.
///
/// # Errors
///
/// [`VectorError::IndexOutOfRange`] for the first index that is not below
/// `a.len()`.
///
/// # Examples
///
/// ```rust
/// use vector::kernel::swizzle::swizzle;
///
/// let v = [1.0, 12.0, 73.2, 99.0];
/// assert_eq!(swizzle(&v, &[3, 0, 1, 2]).unwrap(), vec![99.0, 1.0, 12.0, 73.2]);
/// assert_eq!(swizzle(&v, &[1, 1]).unwrap(), vec![12.0, 12.0]);
/// assert!(swizzle(&v, &[10]).is_err());
/// ```
pub fn swizzle(a: &[f64], indices: &[usize]) -> Result<Vec<f64>> {
    indices
        .iter()
        .map(|&index| {
            a.get(index).copied().ok_or(VectorError::IndexOutOfRange {
                index,
                len: a.len(),
            })
        })
        .collect()
}
