//! json-lens-util - Utility functions for json-lens
//!
//! This crate provides the JSON string escaping helpers and character
//! classes shared by the tokenizer and the value model.

pub mod strings;

// Re-exports for convenience
pub use strings::{escape, is_boundary, is_json_whitespace, is_word_char, unescape, CharPredicate};
