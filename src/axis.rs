//! Canonical rotation and reference axes

use crate::constants;

/// One of the three canonical unit directions
///
/// Anything that accepts an axis takes `impl AsRef<[f64]>`, so an `Axis`, a
/// [`Vector`](crate::Vector), an array or a slice all work. `Z` is the
/// default rotation axis.
///
/// # Examples
///
/// ```rust
/// use vector::Axis;
///
/// assert_eq!(Axis::Y.components(), [0.0, 1.0, 0.0]);
/// assert_eq!(Axis::default(), Axis::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// `(1, 0, 0)`
    X,
    /// `(0, 1, 0)`
    Y,
    /// `(0, 0, 1)`
    #[default]
    Z,
}

impl Axis {
    /// Components of the axis as a unit 3-vector
    pub const fn components(self) -> [f64; 3] {
        match self {
            Axis::X => constants::X,
            Axis::Y => constants::Y,
            Axis::Z => constants::Z,
        }
    }
}

impl AsRef<[f64]> for Axis {
    fn as_ref(&self) -> &[f64] {
        match self {
            Axis::X => &constants::X,
            Axis::Y => &constants::Y,
            Axis::Z => &constants::Z,
        }
    }
}
