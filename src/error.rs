//! Contains the primary `ParseError` type for the library.
use thiserror::Error;

/// Which expectation the input violated.
///
/// Variants that carry a `String` hold the rendering of the token that was
/// actually found, e.g. `'}'` or `"key"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A token appeared where no production expects it.
    #[error("Unexpected token {0}")]
    UnexpectedToken(String),
    /// The input ended where a value was expected (including empty input).
    #[error("Unexpected end of input, expected a value")]
    UnexpectedEof,
    #[error("Expected a string key, found {0}")]
    ExpectedKey(String),
    #[error("Expected ':', found {0}")]
    ExpectedColon(String),
    #[error("Expected ',' or '}}', found {0}")]
    ExpectedCommaOrBrace(String),
    #[error("Expected ',' or ']', found {0}")]
    ExpectedCommaOrBracket(String),
    /// An object or array closed right after a comma.
    #[error("Trailing comma before closing delimiter")]
    TrailingComma,
    #[error("Maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),
    /// Something followed a complete top-level value.
    #[error("Unexpected trailing token {0}")]
    TrailingToken(String),
    #[error("Input of {len} bytes exceeds the {limit} byte limit")]
    InputTooLarge { len: usize, limit: usize },
}

/// The error type for all parsing operations.
///
/// It pairs the violated expectation with the location (line and column)
/// of the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {kind} at line {line}, column {column}.")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The line number (1-indexed) where the error was detected.
    pub line: usize,
    /// The column number (1-indexed) where the error was detected.
    pub column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, line: usize, column: usize) -> Self {
        ParseError { kind, line, column }
    }
}
