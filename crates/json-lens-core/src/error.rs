//! Error types for value construction.

use thiserror::Error;

/// Errors raised when building a [`Value`](crate::Value) from untrusted numbers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// NaN and the infinities have no JSON representation.
    #[error("INVALID_NUMBER")]
    InvalidNumber(f64),
    /// A `serde_json` number that does not convert to `f64`.
    #[error("UNREPRESENTABLE_NUMBER")]
    UnrepresentableNumber(String),
}
