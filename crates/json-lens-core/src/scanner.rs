//! Lexical scanner: raw JSON text to a lazy sequence of [`Token`]s.
//!
//! The scanner never returns an error. When it meets text that is not a
//! token it yields a single [`TokenKind::Fail`] token with empty text and the
//! sequence ends there.

use crate::token::{Token, TokenKind};
use json_lens_util::strings::{is_boundary, is_json_whitespace};

/// Scan `input` into tokens, skipping whitespace.
///
/// # Example
///
/// ```
/// use json_lens_core::{scan, TokenKind};
///
/// let kinds: Vec<TokenKind> = scan("[1, true]").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::OpenBracket, TokenKind::Number, TokenKind::Comma, TokenKind::True, TokenKind::CloseBracket]
/// );
///
/// let tokens: Vec<_> = scan("{ @").collect();
/// assert_eq!(tokens.last().map(|t| (t.kind, t.text)), Some((TokenKind::Fail, "")));
/// ```
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// Iterator over the tokens of a JSON text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    keep_whitespace: bool,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            keep_whitespace: false,
            done: false,
        }
    }

    /// Also yield [`TokenKind::Whitespace`] tokens.
    pub fn with_whitespace(mut self) -> Self {
        self.keep_whitespace = true;
        self
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn next_raw(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }
        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;

        let matched = match first {
            '{' => Some((TokenKind::OpenBrace, 1)),
            '}' => Some((TokenKind::CloseBrace, 1)),
            '[' => Some((TokenKind::OpenBracket, 1)),
            ']' => Some((TokenKind::CloseBracket, 1)),
            ':' => Some((TokenKind::Colon, 1)),
            ',' => Some((TokenKind::Comma, 1)),
            '"' => string_len(rest).map(|len| (TokenKind::String, len)),
            '-' | '0'..='9' => number_len(rest).map(|len| (TokenKind::Number, len)),
            't' => keyword_len(rest, "true").map(|len| (TokenKind::True, len)),
            'f' => keyword_len(rest, "false").map(|len| (TokenKind::False, len)),
            'n' => keyword_len(rest, "null").map(|len| (TokenKind::Null, len)),
            c if is_json_whitespace(c) => {
                let len = rest.find(|c: char| !is_json_whitespace(c)).unwrap_or(rest.len());
                Some((TokenKind::Whitespace, len))
            }
            _ => None,
        };

        let Some((kind, len)) = matched else {
            self.done = true;
            return Some(Token::new(TokenKind::Fail, ""));
        };

        self.pos += len;
        let text = match kind {
            TokenKind::String => &rest[1..len - 1],
            _ => &rest[..len],
        };
        Some(Token::new(kind, text))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let token = self.next_raw()?;
            if self.keep_whitespace || token.kind != TokenKind::Whitespace {
                return Some(token);
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Length in bytes of the string literal at the start of `rest`, quotes included.
fn string_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => return Some(i + 1),
            '\\' => match chars.next()?.1 {
                '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' => {}
                'u' => {
                    for _ in 0..4 {
                        if !chars.next()?.1.is_ascii_hexdigit() {
                            return None;
                        }
                    }
                }
                _ => return None,
            },
            c if c.is_ascii_control() => return None,
            _ => {}
        }
    }
    None
}

/// Length of the number literal at the start of `rest`.
///
/// The fraction and exponent are optional and only consumed when complete;
/// the literal must end at a token boundary.
fn number_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i += 1 + digits(&bytes[i + 1..]),
        _ => return None,
    }
    if bytes.get(i) == Some(&b'.') {
        let n = digits(&bytes[i + 1..]);
        if n > 0 {
            i += 1 + n;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let n = digits(&bytes[j..]);
        if n > 0 {
            i = j + n;
        }
    }
    at_boundary(&rest[i..]).then_some(i)
}

fn keyword_len(rest: &str, word: &str) -> Option<usize> {
    let tail = rest.strip_prefix(word)?;
    at_boundary(tail).then_some(word.len())
}

fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn at_boundary(tail: &str) -> bool {
    tail.chars().next().map_or(true, is_boundary)
}
