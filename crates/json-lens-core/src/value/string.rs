use std::fmt;
use std::sync::Arc;

use json_lens_util::strings::{escape, unescape};

/// A JSON string, stored in its canonical escaped form.
///
/// Both constructors normalize, so the same text always has the same stored
/// form: `"/"` and `"\/"` are equal, as are `"\u00e9"` and `"é"`.
///
/// # Example
///
/// ```
/// use json_lens_core::JString;
///
/// assert_eq!(JString::from_escaped(r"\/"), JString::from_raw("/"));
/// assert_eq!(JString::from_raw("a\"b").escaped(), r#"a\"b"#);
/// assert_eq!(JString::from_escaped(r"\u0041").unescaped(), "A");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JString {
    escaped: Arc<str>,
}

impl JString {
    /// Build from raw text, escaping it.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            escaped: escape(raw).into(),
        }
    }

    /// Build from text as it appears between the quotes of a JSON document.
    pub fn from_escaped(wire: &str) -> Self {
        Self::from_raw(&unescape(wire))
    }

    pub fn escaped(&self) -> &str {
        &self.escaped
    }

    pub fn unescaped(&self) -> String {
        unescape(&self.escaped)
    }
}

impl fmt::Debug for JString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JString").field(&&*self.escaped).finish()
    }
}

impl fmt::Display for JString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.escaped)
    }
}

impl From<&str> for JString {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<String> for JString {
    fn from(raw: String) -> Self {
        Self::from_raw(&raw)
    }
}
