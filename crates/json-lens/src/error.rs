//! Error types for the lens layer.

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum LensError {
    /// A path pattern that is not a valid regular expression.
    #[error("INVALID_PATTERN: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
