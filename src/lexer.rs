//! The pull-based, byte-oriented lexer.
//!
//! The `Lexer` scans a borrowed `&str` one token at a time, on demand. It never
//! fails: anything it cannot classify comes back as `TokenKind::Unknown` and
//! the parser decides what to do with it.

use crate::options::{LiteralMatch, NumberGrammar, Options};
use crate::token::{Token, TokenKind};
use memchr::memchr;

// --- The Lookup Table (LUT) ---
// One entry per byte value; classifies the byte that starts a token.
const W: u8 = 1; // Whitespace
const S: u8 = 2; // Structural
const L: u8 = 3; // Literal
const D: u8 = 4; // Digit
const Q: u8 = 5; // Quote
const M: u8 = 6; // Minus

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;

    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b'[' as usize] = S;
    table[b']' as usize] = S;
    table[b'(' as usize] = S;
    table[b')' as usize] = S;
    table[b':' as usize] = S;
    table[b',' as usize] = S;

    table[b't' as usize] = L;
    table[b'f' as usize] = L;
    table[b'n' as usize] = L;

    table[b'"' as usize] = Q;
    table[b'-' as usize] = M;

    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = D;
        digit += 1;
    }

    // 0: everything else starts an unknown token
    table
};

/// The lexer. Holds the scan cursor and the position used for error reporting.
pub struct Lexer<'a> {
    /// The input, borrowed read-only for the lifetime of the tokens.
    input: &'a str,
    /// The same input as raw bytes.
    bytes: &'a [u8],
    /// Byte offset of the next unread byte. Always on a char boundary
    /// between tokens.
    cursor: usize,
    /// The current line number (1-indexed).
    line: usize,
    /// The current column number (1-indexed, counted in chars).
    column: usize,
    literals: LiteralMatch,
    numbers: NumberGrammar,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default (strict) grammar.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, Options::default())
    }

    /// Creates a lexer using the grammar settings from `options`.
    pub fn with_options(input: &'a str, options: Options) -> Self {
        Lexer {
            input,
            bytes: input.as_bytes(),
            cursor: 0,
            line: 1,
            column: 1,
            literals: options.literals,
            numbers: options.numbers,
        }
    }

    /// Returns the next token and moves the cursor past it.
    ///
    /// Once the input is exhausted this keeps returning `TokenKind::Eof`.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let byte = match self.bytes.get(self.cursor) {
            Some(&b) => b,
            None => return Token::new(TokenKind::Eof, line, column),
        };

        let kind = match BYTE_PROPERTIES[byte as usize] {
            S => {
                self.advance_byte();
                match byte {
                    b'{' => TokenKind::LeftBrace,
                    b'}' => TokenKind::RightBrace,
                    b'[' => TokenKind::LeftBracket,
                    b']' => TokenKind::RightBracket,
                    b'(' => TokenKind::LeftParen,
                    b')' => TokenKind::RightParen,
                    b':' => TokenKind::Colon,
                    _ => TokenKind::Comma,
                }
            }
            L => match byte {
                b't' => self.lex_literal("true", TokenKind::True),
                b'f' => self.lex_literal("false", TokenKind::False),
                _ => self.lex_literal("null", TokenKind::Null),
            },
            D => self.lex_number(),
            M if self.numbers == NumberGrammar::Signed && self.next_is_digit() => {
                self.lex_number()
            }
            Q => self.lex_string(),
            _ => self.lex_unknown_char(),
        };

        Token::new(kind, line, column)
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.bytes.get(self.cursor) {
            if BYTE_PROPERTIES[byte as usize] != W {
                break;
            }
            self.advance_byte();
        }
    }

    /// Advances the cursor by one byte, updating line/col.
    /// Assumes the cursor is not at the end.
    #[inline]
    fn advance_byte(&mut self) {
        let byte = self.bytes[self.cursor];
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if byte & 0xC0 != 0x80 {
            // UTF-8 continuation bytes don't start a new column.
            self.column += 1;
        }
        self.cursor += 1;
    }

    /// Advances the cursor up to (but not past) byte offset `end`.
    #[inline]
    fn advance_to(&mut self, end: usize) {
        while self.cursor < end {
            self.advance_byte();
        }
    }

    #[inline]
    fn next_is_digit(&self) -> bool {
        matches!(self.bytes.get(self.cursor + 1), Some(b) if b.is_ascii_digit())
    }

    /// Lexes `true`, `false` or `null` according to the literal policy.
    fn lex_literal(&mut self, expected: &'static str, kind: TokenKind<'a>) -> TokenKind<'a> {
        match self.literals {
            LiteralMatch::Exact => {
                if self.input[self.cursor..].starts_with(expected) {
                    self.advance_to(self.cursor + expected.len());
                    kind
                } else {
                    self.lex_unknown_char()
                }
            }
            LiteralMatch::Loose => {
                // Skip the literal's length in chars, stopping at end of input.
                let end = self.input[self.cursor..]
                    .char_indices()
                    .nth(expected.len())
                    .map_or(self.bytes.len(), |(offset, _)| self.cursor + offset);
                self.advance_to(end);
                kind
            }
        }
    }

    /// Lexes a quoted string without decoding escapes.
    ///
    /// The closing quote is the first `"` preceded by an even number of
    /// backslashes. Uses `memchr` to jump between candidate quotes.
    fn lex_string(&mut self) -> TokenKind<'a> {
        let open = self.cursor;
        self.advance_byte(); // Consume opening '"'
        let content_start = self.cursor;

        let mut search_from = content_start;
        let close = loop {
            match memchr(b'"', &self.bytes[search_from..]) {
                Some(i) => {
                    let quote = search_from + i;
                    let backslashes = self.bytes[content_start..quote]
                        .iter()
                        .rev()
                        .take_while(|&&b| b == b'\\')
                        .count();
                    if backslashes % 2 == 0 {
                        break Some(quote);
                    }
                    search_from = quote + 1;
                }
                None => break None,
            }
        };

        match close {
            Some(quote) => {
                self.advance_to(quote + 1);
                TokenKind::String(&self.input[content_start..quote])
            }
            None => {
                // Unterminated: hand the whole tail to the parser as unknown.
                self.advance_to(self.bytes.len());
                TokenKind::Unknown(&self.input[open..])
            }
        }
    }

    /// Lexes a greedy run of digits, with a leading `-` when the grammar is
    /// signed. Values that do not fit in an `i64` come back as unknown.
    fn lex_number(&mut self) -> TokenKind<'a> {
        let start = self.cursor;
        let negative = self.bytes[start] == b'-';
        if negative {
            self.advance_byte();
        }

        let mut value: Option<i64> = Some(0);
        while let Some(&byte) = self.bytes.get(self.cursor) {
            if BYTE_PROPERTIES[byte as usize] != D {
                break;
            }
            let digit = i64::from(byte - b'0');
            value = value.and_then(|v| v.checked_mul(10)).and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            });
            self.advance_byte();
        }

        match value {
            Some(n) => TokenKind::Number(n),
            None => TokenKind::Unknown(&self.input[start..self.cursor]),
        }
    }

    /// Consumes a single (possibly multi-byte) character as an unknown token.
    fn lex_unknown_char(&mut self) -> TokenKind<'a> {
        let start = self.cursor;
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.advance_to(start + width);
        TokenKind::Unknown(&self.input[start..start + width])
    }
}
