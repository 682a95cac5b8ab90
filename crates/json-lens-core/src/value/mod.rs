//! The immutable JSON value model.

mod array;
mod number;
mod object;
mod string;

pub use array::JArray;
pub use number::JNumber;
pub use object::JObject;
pub use string::JString;

use crate::error::ValueError;

/// A JSON value.
///
/// Values are immutable. Containers hold their children behind `Arc`, so
/// cloning is cheap and "updating" a document builds a new spine that shares
/// every untouched subtree with the old one. Equality and hashing are
/// structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Object(JObject),
    Array(JArray),
    String(JString),
    Number(JNumber),
    Boolean(bool),
    Null,
}

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);
    pub const NULL: Value = Value::Null;

    /// Number from a known-finite `f64`.
    ///
    /// # Panics
    ///
    /// When `value` is NaN or infinite. Use [`make_number`] for untrusted input.
    pub fn number(value: f64) -> Self {
        match JNumber::new(value) {
            Ok(n) => Value::Number(n),
            Err(err) => panic!("{err}: {value}"),
        }
    }

    /// String from raw (unescaped) text.
    pub fn string(raw: &str) -> Self {
        Value::String(JString::from_raw(raw))
    }

    /// Exhaustive dispatch on the variant.
    ///
    /// # Example
    ///
    /// ```
    /// use json_lens_core::Value;
    ///
    /// let describe = |v: &Value| {
    ///     v.match_with(
    ///         |o| format!("object of {}", o.len()),
    ///         |a| format!("array of {}", a.len()),
    ///         |s| format!("string {}", s.unescaped()),
    ///         |n| format!("number {n}"),
    ///         |b| format!("boolean {b}"),
    ///         || "null".to_string(),
    ///     )
    /// };
    /// assert_eq!(describe(&Value::from(3)), "number 3");
    /// assert_eq!(describe(&Value::NULL), "null");
    /// ```
    pub fn match_with<R>(
        &self,
        object_f: impl FnOnce(&JObject) -> R,
        array_f: impl FnOnce(&JArray) -> R,
        string_f: impl FnOnce(&JString) -> R,
        number_f: impl FnOnce(f64) -> R,
        bool_f: impl FnOnce(bool) -> R,
        null_f: impl FnOnce() -> R,
    ) -> R {
        match self {
            Value::Object(o) => object_f(o),
            Value::Array(a) => array_f(a),
            Value::String(s) => string_f(s),
            Value::Number(n) => number_f(n.value()),
            Value::Boolean(b) => bool_f(*b),
            Value::Null => null_f(),
        }
    }

    pub fn as_object(&self) -> Option<&JObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_jstring(&self) -> Option<&JString> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The escaped wire text of a string value, backslash sequences and all.
    ///
    /// Use [`Value::as_string`] for the text itself.
    pub fn as_escaped_str(&self) -> Option<&str> {
        self.as_jstring().map(JString::escaped)
    }

    /// The unescaped text of a string value.
    pub fn as_string(&self) -> Option<String> {
        self.as_jstring().map(JString::unescaped)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.value()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }
}

/// Object from `(raw key, value)` pairs; the last duplicate key wins.
pub fn make_object<I, K>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    Value::Object(JObject::new(entries))
}

pub fn make_array<I: IntoIterator<Item = Value>>(items: I) -> Value {
    Value::Array(JArray::new(items))
}

/// String from raw text, escaping it.
pub fn make_string(raw: &str) -> Value {
    Value::string(raw)
}

/// String from JSON wire text (the part between the quotes).
pub fn make_string_from_escaped(wire: &str) -> Value {
    Value::String(JString::from_escaped(wire))
}

/// # Errors
///
/// `ValueError::InvalidNumber` for NaN and the infinities.
pub fn make_number(value: f64) -> Result<Value, ValueError> {
    JNumber::new(value).map(Value::Number)
}

pub fn make_boolean(value: bool) -> Value {
    if value {
        Value::TRUE
    } else {
        Value::FALSE
    }
}

pub fn make_null() -> Value {
    Value::NULL
}

impl From<JObject> for Value {
    fn from(value: JObject) -> Self {
        Value::Object(value)
    }
}

impl From<JArray> for Value {
    fn from(value: JArray) -> Self {
        Value::Array(value)
    }
}

impl From<JString> for Value {
    fn from(value: JString) -> Self {
        Value::String(value)
    }
}

impl From<JNumber> for Value {
    fn from(value: JNumber) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        make_boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(JNumber::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(JNumber::from(value))
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::string(raw)
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Value::string(&raw)
    }
}

impl TryFrom<f64> for Value {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        make_number(value)
    }
}
