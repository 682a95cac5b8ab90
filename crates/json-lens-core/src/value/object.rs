use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use super::Value;

/// An immutable JSON object keyed by unescaped strings.
///
/// Clones share the underlying map. The key-sorted entry list used for
/// iteration, rendering and hashing is built on first use and memoized for
/// every clone of the same instance.
#[derive(Clone, Default)]
pub struct JObject {
    map: Arc<HashMap<String, Value>>,
    sorted: Arc<OnceLock<Vec<(String, Value)>>>,
}

impl JObject {
    /// Build an object from key/value pairs. A repeated key keeps its last value.
    ///
    /// # Example
    ///
    /// ```
    /// use json_lens_core::{JObject, Value};
    ///
    /// let obj = JObject::new([("b", Value::from(1)), ("a", Value::from(2)), ("b", Value::from(3))]);
    /// assert_eq!(obj.len(), 2);
    /// assert_eq!(obj.get("b"), Some(&Value::from(3)));
    /// assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    /// ```
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::from_map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn from_map(map: HashMap<String, Value>) -> Self {
        Self {
            map: Arc::new(map),
            sorted: Arc::new(OnceLock::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.map
    }

    /// Entries in ascending key order.
    pub fn entries(&self) -> &[(String, Value)] {
        self.sorted.get_or_init(|| {
            let mut entries: Vec<(String, Value)> = self
                .map
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            entries
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries().iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries().iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries().iter().map(|(_, v)| v)
    }

    /// Entries whose key satisfies `predicate`, in key order.
    pub fn matching<P>(&self, predicate: P) -> Vec<(&str, &Value)>
    where
        P: Fn(&str) -> bool,
    {
        self.iter().filter(|(k, _)| predicate(k)).collect()
    }

    /// A copy with `key` bound to `value`, or with `key` removed when `value`
    /// is `None`. Values of the other keys are shared, not copied.
    ///
    /// # Example
    ///
    /// ```
    /// use json_lens_core::{JObject, Value};
    ///
    /// let obj = JObject::new([("a", Value::from(1))]);
    /// let added = obj.update_key("b", Some(Value::from(2)));
    /// assert_eq!(added.len(), 2);
    /// assert_eq!(added.update_key("b", None), obj);
    /// assert_eq!(obj.len(), 1);
    /// ```
    pub fn update_key(&self, key: &str, value: Option<Value>) -> Self {
        let mut map = (*self.map).clone();
        match value {
            Some(value) => {
                map.insert(key.to_owned(), value);
            }
            None => {
                if map.remove(key).is_none() {
                    return self.clone();
                }
            }
        }
        Self::from_map(map)
    }
}

impl PartialEq for JObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.map, &other.map) || self.map == other.map
    }
}

impl Eq for JObject {}

impl Hash for JObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.entries() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl fmt::Debug for JObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for JObject {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(obj: &JObject) -> u64 {
        let mut h = DefaultHasher::new();
        obj.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_last_duplicate_wins() {
        let obj = JObject::new([("k", Value::from(1)), ("k", Value::from(2))]);
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("k"), Some(&Value::from(2)));
    }

    #[test]
    fn test_entries_sorted_and_memoized() {
        let obj = JObject::new([("z", Value::NULL), ("a", Value::TRUE), ("m", Value::FALSE)]);
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "m", "z"]);
        let first = obj.entries().as_ptr();
        let clone = obj.clone();
        assert_eq!(clone.entries().as_ptr(), first);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = JObject::new([("x", Value::from(1)), ("y", Value::from(2))]);
        let b = JObject::new([("y", Value::from(2)), ("x", Value::from(1))]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_update_key_shares_children() {
        let child = Value::from(JObject::new([("deep", Value::from(1))]));
        let obj = JObject::new([("child", child), ("n", Value::from(0))]);
        let updated = obj.update_key("n", Some(Value::from(5)));
        match (obj.get("child"), updated.get("child")) {
            (Some(Value::Object(before)), Some(Value::Object(after))) => {
                assert!(Arc::ptr_eq(&before.map, &after.map));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(obj.get("n"), Some(&Value::from(0)));
        assert_eq!(updated.get("n"), Some(&Value::from(5)));
    }

    #[test]
    fn test_update_key_remove_missing_is_noop() {
        let obj = JObject::new([("a", Value::NULL)]);
        let same = obj.update_key("b", None);
        assert!(Arc::ptr_eq(&obj.map, &same.map));
    }

    #[test]
    fn test_matching() {
        let obj = JObject::new([("qty", Value::from(1)), ("price", Value::from(2)), ("quota", Value::from(3))]);
        let keys: Vec<&str> = obj.matching(|k| k.starts_with('q')).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["qty", "quota"]);
    }
}
