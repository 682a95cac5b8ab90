//! Short constructors for building documents in code.
//!
//! ```
//! use json_lens_core::builders::{jarray, jnull, jobject, jpair};
//! use json_lens_core::parse_value;
//!
//! let doc = jobject([
//!     jpair("itemCount", 2),
//!     jpair("items", jarray([jobject([jpair("qty", 1)]), jnull()])),
//! ]);
//! assert_eq!(Some(doc), parse_value(r#"{"items":[{"qty":1},null],"itemCount":2}"#));
//! ```

use crate::value::{make_array, make_object, make_string_from_escaped, Value};

pub fn jobject<I: IntoIterator<Item = (String, Value)>>(pairs: I) -> Value {
    make_object(pairs)
}

pub fn jpair(key: impl Into<String>, value: impl Into<Value>) -> (String, Value) {
    (key.into(), value.into())
}

pub fn jarray<I: IntoIterator<Item = Value>>(items: I) -> Value {
    make_array(items)
}

/// String from raw text.
pub fn jstring(raw: &str) -> Value {
    Value::string(raw)
}

/// String from JSON-escaped text.
pub fn jstring_escaped(wire: &str) -> Value {
    make_string_from_escaped(wire)
}

/// # Panics
///
/// When `value` is NaN or infinite.
pub fn jnumber(value: f64) -> Value {
    Value::number(value)
}

pub fn jboolean(value: bool) -> Value {
    Value::from(value)
}

pub fn jnull() -> Value {
    Value::NULL
}
