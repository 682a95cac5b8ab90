//! Functional lenses over immutable JSON values.
//!
//! Paths read and rewrite nested documents without mutation; predicate and
//! regex searches find every path that matches a per-level pattern.
//!
//! # Example
//!
//! ```
//! use json_lens::{get_path, parse_value, regex_matching_paths, update_path, Value};
//!
//! let doc = parse_value(r#"{"itemCount":2,"items":[{"qty":1},{"qty":2}]}"#).unwrap();
//! assert_eq!(get_path(&doc, "items/1/qty"), Some(Value::from(2)));
//!
//! let cleared = update_path(&doc, "items/0", |_| None).unwrap();
//! assert_eq!(get_path(&cleared, "items/0/qty"), Some(Value::from(2)));
//!
//! let qty_paths = regex_matching_paths(&doc, ["items", "[0-9]+", "qty"]).unwrap();
//! assert_eq!(qty_paths.len(), 2);
//! ```

pub mod error;
pub mod lens;
pub mod path;
pub mod pattern;
pub mod search;

pub use error::LensError;
pub use lens::{Lens, MonoLens};
pub use path::{
    array_index, format_path, get_path, get_path_array, get_path_bool, get_path_number,
    get_path_string, path_lens, split_path, step_lens, update_path, IntoPath, LensExt, Path,
    PathStep, ValueLens,
};
pub use pattern::{
    regex_matching_paths, regex_to_predicate, update_values_matching_regex, values_matching_regex,
};
pub use search::{lenses_matching, paths_matching, update_values_matching_paths, values_matching_paths};

// Re-export the document model
pub use json_lens_core::builders;
pub use json_lens_core::{
    make_array, make_boolean, make_null, make_number, make_object, make_string,
    make_string_from_escaped, parse_array, parse_array_with, parse_object, parse_object_with,
    parse_value, parse_value_with, render, render_indented, scan, JArray, JNumber, JObject,
    JString, ParseLimits, Scanner, Token, TokenKind, Value, ValueError,
};
