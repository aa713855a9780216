//! Quantity construction and arithmetic errors.

use super::Quantity;
use thiserror::Error;

/// Errors raised when a value cannot be represented as a [`Quantity`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// The source value was below zero
    #[error("Negative magnitude {0} cannot be represented")]
    Negative(String),

    /// The source value was infinite or NaN
    #[error("Non-finite magnitude {0} cannot be represented")]
    NonFinite(String),

    /// A coefficient no longer fits in a `u64`
    #[error("Coefficient overflow: {0}")]
    Overflow(String),

    /// Subtraction would produce a negative magnitude
    #[error("Subtraction underflow: {lhs} - {rhs} is negative")]
    Underflow { lhs: Quantity, rhs: Quantity },

    /// Normalising or multiplying pushed the exponent out of range
    #[error("Exponent overflow: {coefficient}×10^{exponent} is out of range")]
    ExponentOverflow { coefficient: u64, exponent: i64 },
}
