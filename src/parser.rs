//! Contains the recursive-descent `Parser`.
//!
//! The parser keeps a `current` token and a one-token `peek` lookahead, both
//! pulled from the `Lexer`. There is one method per grammar production
//! (`parse_value`, `parse_object`, `parse_array`) and no backtracking: every
//! decision is made from `current`, and `parse_array` also looks at `peek`.

use crate::error::{ErrorKind, ParseError};
use crate::lexer::Lexer;
use crate::options::DEFAULT_MAX_DEPTH;
use crate::token::{Token, TokenKind};
use crate::value::Value;
use indexmap::IndexMap;
use tracing::trace;

/// The recursive-descent JSON parser.
pub struct Parser<'a> {
    /// The lexer that feeds `peek`.
    lexer: Lexer<'a>,
    /// The token being examined.
    current: Token<'a>,
    /// The next token, not yet consumed.
    peek: Token<'a>,
    /// The maximum allowed nesting depth.
    max_depth: usize,
    /// The current nesting depth.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Binds a parser to `lexer` and primes the lookahead.
    ///
    /// Nothing has been consumed yet: the first call to `parse_value`
    /// advances onto the first token.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let peek = lexer.next_token();
        Parser {
            lexer,
            current: Token::new(TokenKind::Eof, 1, 1),
            peek,
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
        }
    }

    /// Sets the maximum nesting depth of objects and arrays.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses one value and requires the input to end right after it.
    pub fn parse_document(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;
        self.advance();
        match self.current.kind {
            TokenKind::Eof => Ok(value),
            kind => Err(self.error(ErrorKind::TrailingToken(kind.to_string()))),
        }
    }

    /// Advances, then parses the value starting at the new current token.
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.advance();
        match self.current.kind {
            TokenKind::String(s) => Ok(Value::String(s.to_string())),
            TokenKind::True => Ok(Value::Boolean(true)),
            TokenKind::False => Ok(Value::Boolean(false)),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::Number(n) => Ok(Value::Number(n)),
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::Eof => Err(self.error(ErrorKind::UnexpectedEof)),
            kind => Err(self.error(ErrorKind::UnexpectedToken(kind.to_string()))),
        }
    }

    /// Parses an object. `current` is the opening `{`.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut members = IndexMap::new();
        let mut comma_pending = false;

        loop {
            self.advance();
            let key = match self.current.kind {
                TokenKind::RightBrace if comma_pending => {
                    return Err(self.error(ErrorKind::TrailingComma));
                }
                TokenKind::RightBrace => break,
                TokenKind::String(key) => key,
                kind => return Err(self.error(ErrorKind::ExpectedKey(kind.to_string()))),
            };

            self.advance();
            if self.current.kind != TokenKind::Colon {
                return Err(self.error(ErrorKind::ExpectedColon(self.current.kind.to_string())));
            }

            let value = self.parse_value()?;
            // Duplicate keys: the later value wins, the first position is kept.
            members.insert(key.to_string(), value);

            self.advance();
            match self.current.kind {
                TokenKind::RightBrace => break,
                TokenKind::Comma => comma_pending = true,
                kind => {
                    return Err(self.error(ErrorKind::ExpectedCommaOrBrace(kind.to_string())));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }

    /// Parses an array. `current` is the opening `[`.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut items = Vec::new();
        let mut comma_pending = false;

        loop {
            if self.peek.kind == TokenKind::RightBracket {
                self.advance();
                if comma_pending {
                    return Err(self.error(ErrorKind::TrailingComma));
                }
                break;
            }

            items.push(self.parse_value()?);

            self.advance();
            match self.current.kind {
                TokenKind::RightBracket => break,
                TokenKind::Comma => comma_pending = true,
                kind => {
                    return Err(self.error(ErrorKind::ExpectedCommaOrBracket(kind.to_string())));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek` from the lexer.
    #[inline]
    fn advance(&mut self) {
        self.current = self.peek;
        self.peek = self.lexer.next_token();
    }

    /// Enters a container, failing at its opening token if that would go
    /// past the depth limit.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ErrorKind::MaxDepthExceeded(self.max_depth)));
        }
        self.depth += 1;
        trace!(depth = self.depth, line = self.current.line, "entering container");
        Ok(())
    }

    /// Builds a `ParseError` located at the current token.
    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.current.line, self.current.column)
    }
}
