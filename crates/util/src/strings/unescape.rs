/// Resolve JSON backslash escapes into the characters they stand for.
///
/// Recognizes `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t` and `\uXXXX`,
/// combining UTF-16 surrogate pairs. A lone surrogate cannot live in a Rust
/// string and becomes U+FFFD. Anything that is not a well-formed escape is
/// copied through verbatim, backslash included, so the function is total.
///
/// # Examples
///
/// ```
/// use json_lens_util::strings::unescape;
///
/// assert_eq!(unescape("a\\nb"), "a\nb");
/// assert_eq!(unescape("\\/images"), "/images");
/// assert_eq!(unescape("\\u00e9t\\u00e9"), "été");
/// assert_eq!(unescape("\\ud83d\\ude00"), "😀");
/// ```
pub fn unescape(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let mut chars = tail.chars();
        let consumed = match chars.next() {
            Some('"') => push(&mut out, '"'),
            Some('\\') => push(&mut out, '\\'),
            Some('/') => push(&mut out, '/'),
            Some('b') => push(&mut out, '\u{0008}'),
            Some('f') => push(&mut out, '\u{000C}'),
            Some('n') => push(&mut out, '\n'),
            Some('r') => push(&mut out, '\r'),
            Some('t') => push(&mut out, '\t'),
            Some('u') => match read_hex4(&tail[1..]) {
                Some(unit) => 1 + 4 + unicode_escape(&mut out, unit, &tail[5..]),
                None => {
                    out.push('\\');
                    0
                }
            },
            _ => {
                out.push('\\');
                0
            }
        };
        rest = &tail[consumed..];
    }

    out.push_str(rest);
    out
}

fn push(out: &mut String, ch: char) -> usize {
    out.push(ch);
    1
}

/// Decodes the code unit `unit` (already consumed) and, for a high surrogate,
/// tries to pair it with a `\uXXXX` low surrogate at the start of `after`.
/// Returns how many extra bytes of `after` were consumed.
fn unicode_escape(out: &mut String, unit: u16, after: &str) -> usize {
    if (0xD800..0xDC00).contains(&unit) {
        if let Some(low) = after.strip_prefix("\\u").and_then(read_hex4) {
            if (0xDC00..0xE000).contains(&low) {
                let code = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                return 6;
            }
        }
    }
    out.push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
    0
}

fn read_hex4(s: &str) -> Option<u16> {
    let digits = s.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::escape;

    #[test]
    fn test_unescape_plain() {
        assert_eq!(unescape("hello"), "hello");
        assert_eq!(unescape(""), "");
    }

    #[test]
    fn test_unescape_short_forms() {
        assert_eq!(unescape("\\\"\\\\\\/\\b\\f\\n\\r\\t"), "\"\\/\u{8}\u{c}\n\r\t");
    }

    #[test]
    fn test_unescape_unicode() {
        assert_eq!(unescape("\\u0041"), "A");
        assert_eq!(unescape("\\u00E9"), "é");
        assert_eq!(unescape("x\\u0000y"), "x\0y");
    }

    #[test]
    fn test_unescape_surrogate_pair() {
        assert_eq!(unescape("\\uD83D\\uDE00!"), "😀!");
    }

    #[test]
    fn test_unescape_lone_surrogate() {
        assert_eq!(unescape("\\ud800"), "\u{FFFD}");
        assert_eq!(unescape("\\udc00x"), "\u{FFFD}x");
        assert_eq!(unescape("\\ud800\\u0041"), "\u{FFFD}A");
    }

    #[test]
    fn test_unescape_malformed_is_verbatim() {
        assert_eq!(unescape("a\\qb"), "a\\qb");
        assert_eq!(unescape("trailing\\"), "trailing\\");
        assert_eq!(unescape("\\u12"), "\\u12");
        assert_eq!(unescape("\\u12zz"), "\\u12zz");
    }

    #[test]
    fn test_escape_then_unescape_is_identity() {
        for s in ["", "plain", "quote\"", "back\\slash", "ctl\u{1}\u{7f}\u{85}", "日本語 😀", "\\u0041"] {
            assert_eq!(unescape(&escape(s)), s);
        }
    }
}
