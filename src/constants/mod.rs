//! Constants module for vector arithmetic

// Tolerances
/// Absolute difference below which two scalars compare equal, and magnitude
/// below which a vector is treated as having no direction
pub const TOLERANCE: f64 = 1e-8;

// Component positions
/// Index of the first (x) component
pub const X_INDEX: usize = 0;
/// Index of the second (y) component
pub const Y_INDEX: usize = 1;
/// Index of the third (z) component
pub const Z_INDEX: usize = 2;

// Canonical axes
/// Unit axis along the first component
pub const X: [f64; 3] = [1.0, 0.0, 0.0];
/// Unit axis along the second component
pub const Y: [f64; 3] = [0.0, 1.0, 0.0];
/// Unit axis along the third component, the default rotation axis
pub const Z: [f64; 3] = [0.0, 0.0, 1.0];
