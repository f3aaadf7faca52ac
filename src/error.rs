//! Error taxonomy shared by the calculator and the pair table.

use thiserror::Error;

/// Errors reported by the position sizer and the pair registry.
///
/// A caller can always distinguish a valid zero-valued result from a
/// failure; nothing is swallowed or retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizingError {
    /// A field was non-finite or outside its allowed range.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// A divisor field was exactly zero.
    #[error("division by zero: {field} is zero")]
    DivisionByZero { field: &'static str },

    /// The requested pair name is not in the table.
    #[error("unknown currency pair: {0}")]
    UnknownCurrencyPair(String),
}
