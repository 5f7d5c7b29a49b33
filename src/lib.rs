//! # json-check
//!
//! `json-check` is a small, strict JSON validator built from a pull-based
//! lexer and a recursive-descent parser.
//!
//! ## Key Features
//!
//! * **Never panics on bad input:** every rejection is a [`ParseError`] that
//!   names the violated expectation and the line/column of the offending token.
//! * **One token of lookahead:** the [`Parser`] holds a `current` and a `peek`
//!   token and never backtracks.
//! * **Bounded recursion:** nesting deeper than [`Options::max_depth`] is
//!   rejected instead of growing the call stack.
//! * **Order-preserving objects:** keys keep their first-seen order; a
//!   duplicate key overwrites the earlier value.
//!
//! ## Supported grammar
//!
//! Objects, arrays, `true`, `false`, `null`, quoted strings (kept verbatim,
//! escapes are not decoded) and non-negative integers. Negative integers can
//! be enabled with [`NumberGrammar::Signed`].
//!
//! ## Quick Start
//!
//! ```
//! use json_check::{validate_or_parse, ErrorKind, Value};
//!
//! let value = validate_or_parse(r#"{"name": "Bob", "age": 30}"#).unwrap();
//! assert_eq!(value.get("age"), Some(&Value::Number(30)));
//!
//! let err = validate_or_parse(r#"{"a": 1,}"#).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::TrailingComma);
//! ```

/// Contains the `ParseError` and `ErrorKind` types.
pub mod error;
/// Directory-driven pass/fail runner built on top of the core.
pub mod harness;
/// The pull-based lexer.
pub mod lexer;
/// Grammar and resource settings.
pub mod options;
/// The recursive-descent parser.
pub mod parser;
/// Contains the `Token` and `TokenKind` types.
pub mod token;
/// Contains the `Value` tree.
pub mod value;

pub use error::{ErrorKind, ParseError};
pub use lexer::Lexer;
pub use options::{LiteralMatch, NumberGrammar, Options};
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use value::Value;

use tracing::debug;

/// Validates `input` with the default options and returns its value tree.
///
/// # Errors
/// Returns a `ParseError` for empty input, any grammar violation, nesting
/// deeper than 100 levels, input over 10MB, or tokens after the value.
///
/// # Examples
/// ```
/// use json_check::{validate_or_parse, Value};
///
/// let value = validate_or_parse("[1, 2, 3]").unwrap();
/// assert_eq!(value, Value::Array(vec![Value::Number(1), Value::Number(2), Value::Number(3)]));
/// ```
pub fn validate_or_parse(input: &str) -> Result<Value, ParseError> {
    validate_or_parse_with(input, Options::default())
}

/// Validates `input` using `options`.
///
/// Each call builds its own `Lexer` and `Parser`, so concurrent calls share
/// nothing.
///
/// # Errors
/// See [`validate_or_parse`]; the limits come from `options`.
pub fn validate_or_parse_with(input: &str, options: Options) -> Result<Value, ParseError> {
    if input.len() > options.max_input_bytes {
        return Err(ParseError::new(
            ErrorKind::InputTooLarge {
                len: input.len(),
                limit: options.max_input_bytes,
            },
            1,
            1,
        ));
    }

    let lexer = Lexer::with_options(input, options);
    let result = Parser::new(lexer)
        .with_max_depth(options.max_depth)
        .parse_document();

    if let Err(err) = &result {
        debug!(line = err.line, column = err.column, error = %err.kind, "rejected input");
    }
    result
}

/// Returns `true` if `input` is a valid document under the default options.
pub fn is_valid(input: &str) -> bool {
    validate_or_parse(input).is_ok()
}
