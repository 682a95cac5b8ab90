//! Predicate-driven multi-path search.
//!
//! A search is a list of predicates, one per level. At each level the
//! current predicate is tested against every object key (in sorted order) or
//! every stringified array index (in index order), and matching children are
//! searched with the remaining predicates. Scalars never match a predicate.

use json_lens_core::Value;

use crate::path::{path_lens, Path, ValueLens};

/// Every path whose segments satisfy `predicates` level by level.
///
/// An empty predicate list matches exactly one path: the empty one.
///
/// # Example
///
/// ```
/// use json_lens::{parse_value, paths_matching};
///
/// let doc = parse_value(r#"{"a":[10,20],"b":{"c":1}}"#).unwrap();
/// let any = |_: &str| true;
/// assert_eq!(paths_matching(&doc, &[any, any]), vec![vec!["a", "0"], vec!["a", "1"], vec!["b", "c"]]);
/// ```
pub fn paths_matching<P>(value: &Value, predicates: &[P]) -> Vec<Path>
where
    P: Fn(&str) -> bool,
{
    let mut out = Vec::new();
    let mut prefix = Vec::with_capacity(predicates.len());
    collect_paths(value, predicates, &mut prefix, &mut out);
    out
}

fn collect_paths<P>(value: &Value, predicates: &[P], prefix: &mut Path, out: &mut Vec<Path>)
where
    P: Fn(&str) -> bool,
{
    let Some((head, tail)) = predicates.split_first() else {
        out.push(prefix.clone());
        return;
    };
    let entries = match value {
        Value::Object(obj) => obj.entries(),
        Value::Array(arr) => arr.entries(),
        _ => return,
    };
    for (key, child) in entries {
        if head(key) {
            prefix.push(key.clone());
            collect_paths(child, tail, prefix, out);
            prefix.pop();
        }
    }
}

/// One [`path_lens`] per matching path.
pub fn lenses_matching<P>(value: &Value, predicates: &[P]) -> Vec<ValueLens>
where
    P: Fn(&str) -> bool,
{
    paths_matching(value, predicates)
        .into_iter()
        .map(path_lens)
        .collect()
}

/// The values at every matching path.
pub fn values_matching_paths<P>(value: &Value, predicates: &[P]) -> Vec<Value>
where
    P: Fn(&str) -> bool,
{
    let whole = Some(value.clone());
    lenses_matching(value, predicates)
        .iter()
        .filter_map(|lens| lens.get(&whole))
        .collect()
}

/// Apply `f` at every matching path, folding the updates left to right.
///
/// Paths are computed once, against the original value. A deletion inside
/// an array shifts later indices, so later matches in that array then see
/// the shifted items.
///
/// # Example
///
/// ```
/// use json_lens::{parse_value, update_values_matching_paths, Value};
///
/// let doc = parse_value(r#"{"items":[{"qty":1},{"qty":2}]}"#).unwrap();
/// let qty = |k: &str| k == "qty";
/// let any = |_: &str| true;
/// let preds: [&dyn Fn(&str) -> bool; 3] = [&any, &any, &qty];
/// let doubled = update_values_matching_paths(&doc, &preds, |v| {
///     v.and_then(|v| v.as_number()).map(|n| Value::number(n * 2.0))
/// });
/// assert_eq!(doubled, parse_value(r#"{"items":[{"qty":2},{"qty":4}]}"#));
/// ```
pub fn update_values_matching_paths<P, F>(value: &Value, predicates: &[P], f: F) -> Option<Value>
where
    P: Fn(&str) -> bool,
    F: Fn(Option<Value>) -> Option<Value>,
{
    lenses_matching(value, predicates)
        .iter()
        .fold(Some(value.clone()), |acc, lens| lens.update(&acc, &f))
}
