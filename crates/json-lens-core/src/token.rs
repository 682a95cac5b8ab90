//! Token types produced by the scanner.

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// String literal; the token text excludes the quotes and keeps escapes verbatim.
    String,
    /// Number literal, text exactly as written.
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// A run of insignificant whitespace. Never reaches the parser.
    Whitespace,
    /// Lexical failure. Always the last token of a sequence, with empty text.
    Fail,
}

/// A token: its kind plus the slice of input it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn is_fail(&self) -> bool {
        self.kind == TokenKind::Fail
    }
}
