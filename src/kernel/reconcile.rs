//! # Dimension Reconciliation
//!
//! Binary operations may be handed operands of different dimensions. This
//! module decides how many components take part and whether the receiver
//! has to grow first.
//!
//! ## Policies
//!
//! - [`Policy::Truncate`]: only the first `min(m, n)` components participate
//!   and the receiver keeps its dimension.
//! - [`Policy::Grow`]: a receiver shorter than the operand is extended with
//!   zeros, so `max(m, n)` components participate.
//! - [`Policy::ZeroPad`]: neither side is modified; the shorter operand is
//!   read as if padded with zeros. Used by read-only operations such as
//!   [`dot`](crate::kernel::scalar::dot).
//!
//! Addition and subtraction use [`Policy::Grow`], so
//! `[1] + [1, 2] == [2, 2]`.

/// Rule deciding which components of two operands take part in an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Operate over the shorter length, never resize
    Truncate,
    /// Extend the receiver with zeros up to the operand's length
    Grow,
    /// Operate over the longer length, reading missing components as zero
    ZeroPad,
}

/// Outcome of reconciling a receiver against an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// Number of leading components that take part in the operation
    pub len: usize,
    /// New receiver dimension, when the receiver has to grow
    pub grow_to: Option<usize>,
}

/// Reconciles a receiver of dimension `receiver` with an operand of
/// dimension `operand` under `policy`
///
/// # Examples
///
/// ```rust
/// use vector::kernel::reconcile::{reconcile, Policy, Reconciliation};
///
/// assert_eq!(
///     reconcile(1, 2, Policy::Grow),
///     Reconciliation { len: 2, grow_to: Some(2) }
/// );
/// assert_eq!(
///     reconcile(3, 2, Policy::Grow),
///     Reconciliation { len: 3, grow_to: None }
/// );
/// assert_eq!(reconcile(3, 2, Policy::Truncate).len, 2);
/// assert_eq!(reconcile(3, 2, Policy::ZeroPad).len, 3);
/// ```
pub fn reconcile(receiver: usize, operand: usize, policy: Policy) -> Reconciliation {
    match policy {
        Policy::Truncate => Reconciliation {
            len: receiver.min(operand),
            grow_to: None,
        },
        Policy::Grow => Reconciliation {
            len: receiver.max(operand),
            grow_to: (operand > receiver).then_some(operand),
        },
        Policy::ZeroPad => Reconciliation {
            len: receiver.max(operand),
            grow_to: None,
        },
    }
}

/// Reconciles `receiver` against an operand of length `operand`, resizing the
/// receiver when the policy asks for it
///
/// Returns the number of leading components that take part.
pub fn apply(receiver: &mut Vec<f64>, operand: usize, policy: Policy) -> usize {
    let plan = reconcile(receiver.len(), operand, policy);
    if let Some(dim) = plan.grow_to {
        log::trace!("growing receiver from {} to {} components", receiver.len(), dim);
        receiver.resize(dim, 0.0);
    }
    plan.len
}
