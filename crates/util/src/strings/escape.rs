use std::fmt::Write;

/// Escape special characters in a string for JSON serialization.
///
/// This function escapes:
/// - Double quote and backslash
/// - The short-form control characters (`\b`, `\t`, `\n`, `\f`, `\r`)
/// - Every other control character (C0, DEL and C1) as a lowercase `\uXXXX`
///
/// Forward slashes and non-ASCII text are left untouched, so the output is
/// the canonical escaped form used by `JString`.
///
/// # Examples
///
/// ```
/// use json_lens_util::strings::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// assert_eq!(escape("a/b"), "a/b");
/// ```
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let short = match ch {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\u{0008}' => Some("\\b"),
            '\t' => Some("\\t"),
            '\n' => Some("\\n"),
            '\u{000C}' => Some("\\f"),
            '\r' => Some("\\r"),
            _ => None,
        };

        if short.is_none() && !ch.is_control() {
            continue;
        }

        result.push_str(&s[last..i]);
        match short {
            Some(esc) => result.push_str(esc),
            None => {
                // Writing into a String cannot fail.
                let _ = write!(result, "\\u{:04x}", ch as u32);
            }
        }
        last = i + ch.len_utf8();
    }

    result.push_str(&s[last..]);
    result
}
