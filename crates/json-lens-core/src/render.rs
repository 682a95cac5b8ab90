//! Compact and indented serialization.
//!
//! Object keys are always written in sorted order, so equal values render
//! to the same text.

use std::fmt;

use json_lens_util::strings::escape;

use crate::value::{JArray, JObject, Value};

/// Compact form: no inserted whitespace, keys sorted.
///
/// # Example
///
/// ```
/// use json_lens_core::{parse_value, render};
///
/// let value = parse_value(r#"{ "b": [1, 2.5], "a": "\/x" }"#).unwrap();
/// assert_eq!(render(&value), r#"{"a":"/x","b":[1,2.5]}"#);
/// ```
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_compact(value, &mut out);
    out
}

/// Indented form. Each nesting level adds two spaces to `prefix`; non-empty
/// containers open with `"{ "` or `"[ "`, separate members with a comma and a
/// newline, and close with `" }"` or `" ]"`.
///
/// # Example
///
/// ```
/// use json_lens_core::{parse_value, render_indented};
///
/// let value = parse_value(r#"{"a": 1, "b": [true, null], "c": {}}"#).unwrap();
/// assert_eq!(
///     render_indented(&value, ""),
///     "{ \"a\": 1,\n  \"b\": [ true,\n    null ],\n  \"c\": {} }"
/// );
/// ```
pub fn render_indented(value: &Value, prefix: &str) -> String {
    let mut out = String::new();
    write_indented(value, prefix, &mut out);
    out
}

impl Value {
    /// [`render_indented`] with an empty prefix.
    pub fn to_indented_string(&self) -> String {
        render_indented(self, "")
    }
}

fn write_key(key: &str, out: &mut String) {
    out.push('"');
    out.push_str(&escape(key));
    out.push('"');
}

fn write_compact(value: &Value, out: &mut String) {
    match value {
        Value::Object(obj) => {
            out.push('{');
            for (i, (key, child)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_key(key, out);
                out.push(':');
                write_compact(child, out);
            }
            out.push('}');
        }
        Value::Array(arr) => {
            out.push('[');
            for (i, child) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_compact(child, out);
            }
            out.push(']');
        }
        Value::String(s) => {
            out.push('"');
            out.push_str(s.escaped());
            out.push('"');
        }
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Null => out.push_str("null"),
    }
}

fn write_indented(value: &Value, prefix: &str, out: &mut String) {
    match value {
        Value::Object(obj) if !obj.is_empty() => {
            let next = format!("{prefix}  ");
            out.push_str("{ ");
            for (i, (key, child)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                    out.push_str(&next);
                }
                write_key(key, out);
                out.push_str(": ");
                write_indented(child, &next, out);
            }
            out.push_str(" }");
        }
        Value::Array(arr) if !arr.is_empty() => {
            let next = format!("{prefix}  ");
            out.push_str("[ ");
            for (i, child) in arr.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                    out.push_str(&next);
                }
                write_indented(child, &next, out);
            }
            out.push_str(" ]");
        }
        _ => write_compact(value, out),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for JObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_compact(&Value::Object(self.clone()), &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for JArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_compact(&Value::Array(self.clone()), &mut out);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{make_array, make_object, make_string};

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&Value::NULL), "null");
        assert_eq!(render(&Value::TRUE), "true");
        assert_eq!(render(&Value::FALSE), "false");
        assert_eq!(render(&Value::from(12)), "12");
        assert_eq!(render(&Value::number(-0.5)), "-0.5");
        assert_eq!(render(&make_string("q\"")), r#""q\"""#);
    }

    #[test]
    fn test_render_empty_containers() {
        let empty_obj = make_object(Vec::<(String, Value)>::new());
        assert_eq!(render(&empty_obj), "{}");
        assert_eq!(render(&make_array([])), "[]");
        assert_eq!(render_indented(&empty_obj, ""), "{}");
        assert_eq!(render_indented(&make_array([]), "    "), "[]");
    }

    #[test]
    fn test_render_sorts_and_escapes_keys() {
        let value = make_object([("z", Value::NULL), ("a\nb", Value::from(1))]);
        assert_eq!(render(&value), r#"{"a\nb":1,"z":null}"#);
    }

    #[test]
    fn test_render_indented_nested() {
        let value = make_object([
            ("items", make_array([make_object([("qty", Value::from(1))]), Value::from(2)])),
            ("n", Value::from(0)),
        ]);
        let expected = "{ \"items\": [ { \"qty\": 1 },\n    2 ],\n  \"n\": 0 }";
        assert_eq!(render_indented(&value, ""), expected);
        assert_eq!(value.to_indented_string(), expected);
    }

    #[test]
    fn test_render_indented_prefix() {
        let value = make_array([Value::from(1), Value::from(2)]);
        assert_eq!(render_indented(&value, "  "), "[ 1,\n    2 ]");
    }

    #[test]
    fn test_display_matches_render() {
        let value = make_object([("k", make_array([Value::TRUE]))]);
        assert_eq!(value.to_string(), render(&value));
        assert_eq!(value.as_object().map(ToString::to_string), Some(r#"{"k":[true]}"#.to_string()));
    }
}
