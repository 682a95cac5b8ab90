use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use super::Value;

/// An immutable JSON array.
///
/// Besides positional access, an array exposes the same `(key, value)` entry
/// view as [`JObject`](super::JObject), keyed by the decimal index, so path
/// code can treat both containers alike. That view is memoized.
#[derive(Clone, Default)]
pub struct JArray {
    items: Arc<Vec<Value>>,
    indexed: Arc<OnceLock<Vec<(String, Value)>>>,
}

impl JArray {
    pub fn new<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::from_vec(items.into_iter().collect())
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        Self {
            items: Arc::new(items),
            indexed: Arc::new(OnceLock::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// `("0", first), ("1", second), ...`
    pub fn entries(&self) -> &[(String, Value)] {
        self.indexed.get_or_init(|| {
            self.items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect()
        })
    }

    /// Entries whose stringified index satisfies `predicate`, in index order.
    pub fn matching<P>(&self, predicate: P) -> Vec<(&str, &Value)>
    where
        P: Fn(&str) -> bool,
    {
        self.entries()
            .iter()
            .filter(|(k, _)| predicate(k))
            .map(|(k, v)| (k.as_str(), v))
            .collect()
    }

    /// A copy with the item at `index` replaced, or removed when `value` is
    /// `None`; later items shift down. An index past the end leaves the array
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use json_lens_core::{JArray, Value};
    ///
    /// let arr = JArray::new([Value::from(1), Value::from(2), Value::from(3)]);
    /// assert_eq!(arr.update_index(1, None), JArray::new([Value::from(1), Value::from(3)]));
    /// assert_eq!(arr.update_index(7, Some(Value::NULL)), arr);
    /// ```
    pub fn update_index(&self, index: usize, value: Option<Value>) -> Self {
        if index >= self.items.len() {
            return self.clone();
        }
        let mut items = (*self.items).clone();
        match value {
            Some(value) => items[index] = value,
            None => {
                items.remove(index);
            }
        }
        Self::from_vec(items)
    }
}

impl PartialEq for JArray {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items) || self.items == other.items
    }
}

impl Eq for JArray {}

impl Hash for JArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl fmt::Debug for JArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl FromIterator<Value> for JArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a JArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
