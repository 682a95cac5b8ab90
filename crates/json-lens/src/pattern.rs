//! Regular-expression forms of the multi-path search.
//!
//! Patterns must match a whole key: `"qty"` does not match `"qty2"`.

use json_lens_core::Value;
use regex::Regex;

use crate::error::LensError;
use crate::path::Path;
use crate::search::{paths_matching, update_values_matching_paths, values_matching_paths};

/// Compile `pattern` into a full-match predicate over keys.
///
/// # Errors
///
/// `LensError::InvalidPattern` when `pattern` is not a valid regex.
///
/// # Example
///
/// ```
/// use json_lens::regex_to_predicate;
///
/// let digit = regex_to_predicate("[0-9]").unwrap();
/// assert!(digit("7"));
/// assert!(!digit("17"));
/// assert!(regex_to_predicate("(").is_err());
/// ```
pub fn regex_to_predicate(pattern: &str) -> Result<impl Fn(&str) -> bool + Clone + Send + Sync, LensError> {
    let anchored = format!("^(?:{pattern})$");
    let re = Regex::new(&anchored).map_err(|source| LensError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })?;
    Ok(move |key: &str| re.is_match(key))
}

fn compile<I, S>(patterns: I) -> Result<Vec<impl Fn(&str) -> bool>, LensError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| regex_to_predicate(p.as_ref()))
        .collect()
}

/// [`paths_matching`] with one regex per level.
///
/// # Example
///
/// ```
/// use json_lens::{parse_value, regex_matching_paths};
///
/// let doc = parse_value(r#"{"itemCount":2,"items":[{"qty":1},{"qty":2}]}"#).unwrap();
/// let paths = regex_matching_paths(&doc, [".*", "[123456789]", "qty"]).unwrap();
/// assert_eq!(paths, vec![vec!["items", "1", "qty"]]);
/// ```
pub fn regex_matching_paths<I, S>(value: &Value, patterns: I) -> Result<Vec<Path>, LensError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(paths_matching(value, &compile(patterns)?))
}

/// [`values_matching_paths`] with one regex per level.
pub fn values_matching_regex<I, S>(value: &Value, patterns: I) -> Result<Vec<Value>, LensError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(values_matching_paths(value, &compile(patterns)?))
}

/// [`update_values_matching_paths`] with one regex per level.
pub fn update_values_matching_regex<I, S, F>(
    value: &Value,
    patterns: I,
    f: F,
) -> Result<Option<Value>, LensError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(Option<Value>) -> Option<Value>,
{
    Ok(update_values_matching_paths(value, &compile(patterns)?, f))
}
