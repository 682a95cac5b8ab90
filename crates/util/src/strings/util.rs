/// A predicate function for checking character properties.
pub type CharPredicate = fn(char) -> bool;

/// Check if a character continues a word: a letter, a digit or `_`.
///
/// Number and keyword tokens must not be followed by a word character.
///
/// # Examples
///
/// ```
/// use json_lens_util::strings::is_word_char;
///
/// assert!(is_word_char('a'));
/// assert!(is_word_char('5'));
/// assert!(is_word_char('_'));
/// assert!(!is_word_char(','));
/// assert!(!is_word_char(' '));
/// ```
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Check if a character is insignificant JSON whitespace.
///
/// Only space, tab, line feed and carriage return qualify; other Unicode
/// spaces are not whitespace in JSON text.
///
/// # Examples
///
/// ```
/// use json_lens_util::strings::is_json_whitespace;
///
/// assert!(is_json_whitespace(' '));
/// assert!(is_json_whitespace('\r'));
/// assert!(!is_json_whitespace('\u{00a0}'));
/// ```
pub fn is_json_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Check if a character is a token boundary (not part of a word).
pub fn is_boundary(ch: char) -> bool {
    !is_word_char(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_word_char_ascii() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('0'));
        assert!(is_word_char('_'));
    }

    #[test]
    fn test_is_word_char_unicode() {
        assert!(is_word_char('日'));
        assert!(is_word_char('α'));
    }

    #[test]
    fn test_is_word_char_not() {
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('}'));
    }

    #[test]
    fn test_is_json_whitespace() {
        for ch in [' ', '\t', '\n', '\r'] {
            assert!(is_json_whitespace(ch));
        }
        assert!(!is_json_whitespace('\u{000b}'));
        assert!(!is_json_whitespace('\u{000c}'));
        assert!(!is_json_whitespace('\u{2003}'));
    }

    #[test]
    fn test_is_boundary() {
        assert!(is_boundary(','));
        assert!(is_boundary(']'));
        assert!(!is_boundary('1'));
    }

    #[test]
    fn test_char_predicate_type() {
        let pred: CharPredicate = is_json_whitespace;
        assert!(pred('\n'));
    }
}
