//! JSON tokenizer, recursive-descent parser and immutable value model.
//!
//! # Example
//!
//! ```
//! use json_lens_core::{parse_value, render, render_indented, Value};
//!
//! let doc = parse_value(r#"{ "b": [1, 2], "a": "x" }"#).unwrap();
//! assert_eq!(render(&doc), r#"{"a":"x","b":[1,2]}"#);
//! assert_eq!(parse_value(&render_indented(&doc, "")), Some(doc.clone()));
//!
//! let a = doc.as_object().and_then(|o| o.get("a")).and_then(Value::as_string);
//! assert_eq!(a.as_deref(), Some("x"));
//! ```

pub mod builders;
mod convert;
pub mod error;
pub mod limits;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod token;
pub mod value;

pub use error::ValueError;
pub use limits::{ParseLimits, DEFAULT_MAX_DEPTH};
pub use parser::{
    parse_array, parse_array_with, parse_object, parse_object_with, parse_value, parse_value_with,
};
pub use render::{render, render_indented};
pub use scanner::{scan, Scanner};
pub use token::{Token, TokenKind};
pub use value::{
    make_array, make_boolean, make_null, make_number, make_object, make_string,
    make_string_from_escaped, JArray, JNumber, JObject, JString, Value,
};
