use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValueError;

/// A finite JSON number.
///
/// NaN and the infinities are rejected at construction, so equality is total
/// and `-0` equals `0` for both `==` and hashing.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JNumber(f64);

impl JNumber {
    /// # Errors
    ///
    /// `ValueError::InvalidNumber` when `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ValueError::InvalidNumber(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the number has no fractional part.
    pub fn is_integral(self) -> bool {
        self.0.fract() == 0.0
    }
}

impl Eq for JNumber {}

impl Hash for JNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = if self.0 == 0.0 { 0.0f64 } else { self.0 };
        normalized.to_bits().hash(state);
    }
}

impl TryFrom<f64> for JNumber {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<i32> for JNumber {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for JNumber {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for JNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug output is the shortest round-tripping form and switches to
        // exponent notation for very large or small magnitudes.
        let text = format!("{:?}", self.0);
        f.write_str(text.strip_suffix(".0").unwrap_or(&text))
    }
}
