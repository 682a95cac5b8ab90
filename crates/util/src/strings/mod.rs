//! String utilities.
//!
//! Provides JSON string escaping, unescaping and character classes used by
//! the tokenizer.

mod escape;
mod unescape;
mod util;

pub use escape::escape;
pub use unescape::unescape;
pub use util::{is_boundary, is_json_whitespace, is_word_char, CharPredicate};
