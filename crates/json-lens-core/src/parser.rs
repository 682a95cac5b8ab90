//! Recursive-descent parser over the scanner's tokens.
//!
//! Every production takes a token slice and returns the parsed value plus the
//! unconsumed remainder, or `None`. There is no error recovery: malformed
//! input simply yields `None` from the public entry points.

use json_lens_util::strings::unescape;

use crate::limits::ParseLimits;
use crate::scanner::scan;
use crate::token::{Token, TokenKind};
use crate::value::{JArray, JNumber, JObject, JString, Value};

type Parsed<'t, 'a, T> = Option<(T, &'t [Token<'a>])>;

/// Parse any JSON value. Trailing tokens make the parse fail.
///
/// # Example
///
/// ```
/// use json_lens_core::{make_array, parse_value, Value};
///
/// assert_eq!(parse_value(" [1, true] "), Some(make_array([Value::from(1), Value::TRUE])));
/// assert_eq!(parse_value("[1, 2,]"), None);
/// assert_eq!(parse_value("true false"), None);
/// ```
pub fn parse_value(text: &str) -> Option<Value> {
    parse_value_with(text, &ParseLimits::default())
}

/// [`parse_value`] with explicit limits.
pub fn parse_value_with(text: &str, limits: &ParseLimits) -> Option<Value> {
    if text.len() > limits.max_input_size {
        return None;
    }
    let tokens: Vec<Token<'_>> = scan(text).collect();
    let (value, rest) = Parser { limits }.value(&tokens, 0)?;
    rest.is_empty().then_some(value)
}

/// Parse a document that must be an object.
pub fn parse_object(text: &str) -> Option<JObject> {
    parse_object_with(text, &ParseLimits::default())
}

pub fn parse_object_with(text: &str, limits: &ParseLimits) -> Option<JObject> {
    match parse_value_with(text, limits)? {
        Value::Object(obj) => Some(obj),
        _ => None,
    }
}

/// Parse a document that must be an array.
pub fn parse_array(text: &str) -> Option<JArray> {
    parse_array_with(text, &ParseLimits::default())
}

pub fn parse_array_with(text: &str, limits: &ParseLimits) -> Option<JArray> {
    match parse_value_with(text, limits)? {
        Value::Array(arr) => Some(arr),
        _ => None,
    }
}

struct Parser<'l> {
    limits: &'l ParseLimits,
}

impl Parser<'_> {
    /// Try every value production. The grammar is unambiguous, so two
    /// successes mean a broken production.
    fn value<'t, 'a>(&self, tokens: &'t [Token<'a>], depth: usize) -> Parsed<'t, 'a, Value> {
        let attempts = [
            string(tokens),
            number(tokens),
            self.object(tokens, depth),
            self.array(tokens, depth),
            literal(tokens, TokenKind::True, Value::TRUE),
            literal(tokens, TokenKind::False, Value::FALSE),
            literal(tokens, TokenKind::Null, Value::NULL),
        ];
        let mut successes = attempts.into_iter().flatten();
        let first = successes.next()?;
        if successes.next().is_some() {
            panic!("ambiguous JSON grammar: more than one value production matched");
        }
        Some(first)
    }

    fn object<'t, 'a>(&self, tokens: &'t [Token<'a>], depth: usize) -> Parsed<'t, 'a, Value> {
        let rest = expect(tokens, TokenKind::OpenBrace)?;
        if depth >= self.limits.max_depth {
            return None;
        }
        let (entries, rest) = separated(rest, TokenKind::CloseBrace, |tokens| {
            self.key_value(tokens, depth + 1)
        })?;
        Some((Value::Object(JObject::new(entries)), rest))
    }

    fn key_value<'t, 'a>(
        &self,
        tokens: &'t [Token<'a>],
        depth: usize,
    ) -> Parsed<'t, 'a, (String, Value)> {
        let (key, rest) = tokens.split_first()?;
        if key.kind != TokenKind::String {
            return None;
        }
        let rest = expect(rest, TokenKind::Colon)?;
        let (value, rest) = self.value(rest, depth)?;
        Some(((unescape(key.text), value), rest))
    }

    fn array<'t, 'a>(&self, tokens: &'t [Token<'a>], depth: usize) -> Parsed<'t, 'a, Value> {
        let rest = expect(tokens, TokenKind::OpenBracket)?;
        if depth >= self.limits.max_depth {
            return None;
        }
        let (items, rest) = separated(rest, TokenKind::CloseBracket, |tokens| {
            self.value(tokens, depth + 1)
        })?;
        Some((Value::Array(JArray::from_vec(items)), rest))
    }
}

fn string<'t, 'a>(tokens: &'t [Token<'a>]) -> Parsed<'t, 'a, Value> {
    let (token, rest) = tokens.split_first()?;
    (token.kind == TokenKind::String).then(|| (Value::String(JString::from_escaped(token.text)), rest))
}

/// Literals that overflow `f64` are rejected.
fn number<'t, 'a>(tokens: &'t [Token<'a>]) -> Parsed<'t, 'a, Value> {
    let (token, rest) = tokens.split_first()?;
    if token.kind != TokenKind::Number {
        return None;
    }
    let n = JNumber::new(token.text.parse::<f64>().ok()?).ok()?;
    Some((Value::Number(n), rest))
}

fn literal<'t, 'a>(tokens: &'t [Token<'a>], kind: TokenKind, value: Value) -> Parsed<'t, 'a, Value> {
    let rest = expect(tokens, kind)?;
    Some((value, rest))
}

fn expect<'t, 'a>(tokens: &'t [Token<'a>], kind: TokenKind) -> Option<&'t [Token<'a>]> {
    match tokens.split_first() {
        Some((token, rest)) if token.kind == kind => Some(rest),
        _ => None,
    }
}

/// `item (',' item)* close`, or just `close`.
///
/// A separator is required before every item except the first and is not
/// allowed before the first, so `[1,2,]`, `[,1]` and `[1 2]` all fail.
fn separated<'t, 'a, T>(
    tokens: &'t [Token<'a>],
    close: TokenKind,
    mut item: impl FnMut(&'t [Token<'a>]) -> Parsed<'t, 'a, T>,
) -> Parsed<'t, 'a, Vec<T>> {
    let mut items = Vec::new();
    let mut rest = tokens;
    loop {
        let next = rest.first()?;
        if next.kind == close {
            return Some((items, &rest[1..]));
        }
        if !items.is_empty() {
            rest = expect(rest, TokenKind::Comma)?;
        }
        let (parsed, after) = item(rest)?;
        items.push(parsed);
        rest = after;
    }
}
