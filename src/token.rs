//! Defines the `Token` and `TokenKind` types.
//!
//! These are the intermediate representation between the `Lexer` and the
//! `Parser`. A token only lives in the parser's `current`/`peek` slots and is
//! dropped as soon as the parser advances past it.

use std::fmt;

/// The specific kind of a `Token`, with its decoded payload where one exists.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind<'a> {
    /// End of input. Returned forever once the buffer is exhausted.
    Eof,
    /// A run of digits, e.g. `123`.
    Number(i64),
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A quoted string. The payload is the raw text between the quotes.
    String(&'a str),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Anything the lexer could not classify: a stray character, an
    /// unterminated string or a number that does not fit in an `i64`.
    Unknown(&'a str),
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::LeftBrace => f.write_str("'{'"),
            TokenKind::RightBrace => f.write_str("'}'"),
            TokenKind::LeftBracket => f.write_str("'['"),
            TokenKind::RightBracket => f.write_str("']'"),
            TokenKind::LeftParen => f.write_str("'('"),
            TokenKind::RightParen => f.write_str("')'"),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::True => f.write_str("true"),
            TokenKind::False => f.write_str("false"),
            TokenKind::Null => f.write_str("null"),
            TokenKind::Unknown(s) => write!(f, "'{}'", s),
        }
    }
}

/// A single token produced by the `Lexer`.
///
/// It carries the `TokenKind` and the position (line and column) where the
/// token starts, which is what error reporting points at.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    /// The kind of the token.
    pub kind: TokenKind<'a>,
    /// The 1-indexed line number where the token starts.
    pub line: usize,
    /// The 1-indexed column number where the token starts.
    pub column: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind<'a>, line: usize, column: usize) -> Self {
        Token { kind, line, column }
    }
}
