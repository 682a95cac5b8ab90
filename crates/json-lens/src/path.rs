//! Path lenses over optional JSON values.
//!
//! A path is a sequence of segments. Against an object a segment is a key;
//! against an array it is a base-10 index. Lenses work on `Option<Value>` so
//! that `None` can stand for "absent": getting a missing path yields `None`,
//! setting `None` deletes, and setting through a missing parent creates
//! single-key objects on the way down.

use json_lens_core::{JArray, JObject, Value};

use crate::lens::{Lens, MonoLens};

/// One step of a path.
pub type PathStep = String;

/// A sequence of path steps.
pub type Path = Vec<PathStep>;

/// The lens type used throughout the crate: optional value in, optional value out.
pub type ValueLens = MonoLens<Option<Value>>;

/// Anything that names a path: a slash-delimited `&str` or a segment sequence.
///
/// Keys containing `/` can only be addressed through the sequence forms.
pub trait IntoPath {
    fn into_path(self) -> Path;
}

impl IntoPath for &str {
    fn into_path(self) -> Path {
        split_path(self)
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Path {
        split_path(self)
    }
}

impl IntoPath for Path {
    fn into_path(self) -> Path {
        self
    }
}

impl IntoPath for &[String] {
    fn into_path(self) -> Path {
        self.to_vec()
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Path {
        self.clone()
    }
}

impl IntoPath for &[&str] {
    fn into_path(self) -> Path {
        self.iter().map(|s| (*s).to_owned()).collect()
    }
}

impl<const N: usize> IntoPath for [&str; N] {
    fn into_path(self) -> Path {
        self.iter().map(|s| (*s).to_owned()).collect()
    }
}

/// Split a slash-delimited path.
///
/// Inner empty segments are kept and trailing ones dropped, so `"a//b"` has
/// three segments, `"a/"` is just `["a"]` and `"/"` is the empty path. The
/// empty string is the single empty key.
///
/// # Example
///
/// ```
/// use json_lens::split_path;
///
/// assert_eq!(split_path("items/0/qty"), vec!["items", "0", "qty"]);
/// assert_eq!(split_path("items/"), vec!["items"]);
/// assert_eq!(split_path(""), vec![""]);
/// ```
pub fn split_path(path: &str) -> Path {
    if path.is_empty() {
        return vec![String::new()];
    }
    let mut segments: Path = path.split('/').map(str::to_owned).collect();
    while segments.last().is_some_and(String::is_empty) {
        segments.pop();
    }
    segments
}

/// Join segments back into slash-delimited form.
pub fn format_path(path: &[String]) -> String {
    path.join("/")
}

/// Parse a segment as an array index. Anything but a non-negative base-10
/// integer is not an index.
pub fn array_index(segment: &str) -> Option<usize> {
    segment.parse::<usize>().ok()
}

/// Lens focusing on one key or index of the current value.
pub fn step_lens(segment: &str) -> ValueLens {
    let get_key = segment.to_owned();
    let set_key = segment.to_owned();
    Lens::new(
        move |whole: &Option<Value>| {
            whole.as_ref().and_then(|value| {
                value.match_with(
                    |obj| obj.get(&get_key).cloned(),
                    |arr| array_index(&get_key).and_then(|i| arr.get(i).cloned()),
                    |_| None,
                    |_| None,
                    |_| None,
                    || None,
                )
            })
        },
        move |whole: &Option<Value>, focus: Option<Value>| set_step(whole, &set_key, focus),
    )
}

fn set_step(whole: &Option<Value>, segment: &str, focus: Option<Value>) -> Option<Value> {
    match whole {
        None => focus.map(|v| Value::Object(JObject::new([(segment, v)]))),
        Some(Value::Object(obj)) => Some(Value::Object(obj.update_key(segment, focus))),
        Some(Value::Array(arr)) => Some(Value::Array(set_index(arr, segment, focus))),
        Some(scalar) => Some(scalar.clone()),
    }
}

fn set_index(arr: &JArray, segment: &str, focus: Option<Value>) -> JArray {
    match array_index(segment) {
        Some(index) => arr.update_index(index, focus),
        None => arr.clone(),
    }
}

/// Lens for a whole path: the identity lens composed with one
/// [`step_lens`] per segment, left to right.
///
/// # Example
///
/// ```
/// use json_lens::{parse_value, path_lens, Value};
///
/// let doc = parse_value(r#"{"items":[{"qty":1},{"qty":2}]}"#);
/// let qty = path_lens("items/1/qty");
/// assert_eq!(qty.get(&doc), Some(Value::from(2)));
///
/// let updated = qty.set(&doc, Some(Value::from(7)));
/// assert_eq!(updated, parse_value(r#"{"items":[{"qty":1},{"qty":7}]}"#));
/// ```
pub fn path_lens(path: impl IntoPath) -> ValueLens {
    path.into_path()
        .iter()
        .fold(ValueLens::identity(), |lens, segment| lens.and_then(&step_lens(segment)))
}

/// The value at `path`, if present.
///
/// # Example
///
/// ```
/// use json_lens::{get_path, parse_value, Value};
///
/// let doc = parse_value(r#"{"a":{"b/c":[true]}}"#).unwrap();
/// assert_eq!(get_path(&doc, ["a", "b/c", "0"]), Some(Value::TRUE));
/// assert_eq!(get_path(&doc, "a/b/c/0"), None);
/// ```
pub fn get_path(value: &Value, path: impl IntoPath) -> Option<Value> {
    path_lens(path).get(&Some(value.clone()))
}

/// Replace the value at `path` with `f` applied to the current one.
///
/// `f` receives `None` when nothing is there and may return `None` to delete.
/// The result is `None` only when the update removed the whole document.
///
/// # Example
///
/// ```
/// use json_lens::{parse_value, update_path, Value};
///
/// let doc = parse_value(r#"{"itemCount":2,"items":[{"qty":1},{"qty":2}]}"#).unwrap();
/// let plus_ten = update_path(&doc, "items/0/qty", |qty| {
///     qty.and_then(|v| v.as_number()).map(|n| Value::number(n + 10.0))
/// });
/// assert_eq!(plus_ten, parse_value(r#"{"itemCount":2,"items":[{"qty":11},{"qty":2}]}"#));
/// ```
pub fn update_path<F>(value: &Value, path: impl IntoPath, f: F) -> Option<Value>
where
    F: FnOnce(Option<Value>) -> Option<Value>,
{
    path_lens(path).update(&Some(value.clone()), f)
}

/// Unescaped string at `path`.
pub fn get_path_string(value: &Value, path: impl IntoPath) -> Option<String> {
    get_path(value, path).as_ref().and_then(Value::as_string)
}

pub fn get_path_number(value: &Value, path: impl IntoPath) -> Option<f64> {
    get_path(value, path).as_ref().and_then(Value::as_number)
}

pub fn get_path_bool(value: &Value, path: impl IntoPath) -> Option<bool> {
    get_path(value, path).as_ref().and_then(Value::as_bool)
}

pub fn get_path_array(value: &Value, path: impl IntoPath) -> Option<JArray> {
    match get_path(value, path)? {
        Value::Array(arr) => Some(arr),
        _ => None,
    }
}

/// Lens operations as methods on [`Value`].
pub trait LensExt {
    fn lens_get(&self, lens: &ValueLens) -> Option<Value>;
    fn lens_set(&self, lens: &ValueLens, focus: Option<Value>) -> Option<Value>;
    fn lens_update<F>(&self, lens: &ValueLens, f: F) -> Option<Value>
    where
        F: FnOnce(Option<Value>) -> Option<Value>;
}

impl LensExt for Value {
    fn lens_get(&self, lens: &ValueLens) -> Option<Value> {
        lens.get(&Some(self.clone()))
    }

    fn lens_set(&self, lens: &ValueLens, focus: Option<Value>) -> Option<Value> {
        lens.set(&Some(self.clone()), focus)
    }

    fn lens_update<F>(&self, lens: &ValueLens, f: F) -> Option<Value>
    where
        F: FnOnce(Option<Value>) -> Option<Value>,
    {
        lens.update(&Some(self.clone()), f)
    }
}
