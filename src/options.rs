//! Grammar and resource settings shared by the `Lexer` and `Parser`.

/// The default maximum nesting depth (e.g., `[[[]]]`) to prevent stack overflows.
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// The default maximum input size (10MB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// How the lexer recognizes the `true`, `false` and `null` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralMatch {
    /// The whole literal must be present. Anything else is an unknown token.
    #[default]
    Exact,
    /// The leading character decides and the literal's length is skipped
    /// without looking at the remaining characters, so `txyz` lexes as `true`.
    Loose,
}

/// Which integer literals the lexer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberGrammar {
    /// Digits only: no sign, no fraction, no exponent.
    #[default]
    Unsigned,
    /// Digits with an optional leading `-`.
    Signed,
}

/// Settings for a single validation pass.
///
/// `Options` is `Copy`; every `Lexer`/`Parser` gets its own.
///
/// # Examples
/// ```
/// use json_check::{validate_or_parse_with, Options, NumberGrammar};
///
/// let options = Options::default()
///     .with_max_depth(8)
///     .with_numbers(NumberGrammar::Signed);
/// assert!(validate_or_parse_with("[-1, 2]", options).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest allowed nesting of objects and arrays.
    pub max_depth: usize,
    /// Inputs longer than this many bytes are rejected before lexing.
    pub max_input_bytes: usize,
    /// Keyword recognition policy.
    pub literals: LiteralMatch,
    /// Numeric literal grammar.
    pub numbers: NumberGrammar,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            literals: LiteralMatch::default(),
            numbers: NumberGrammar::default(),
        }
    }
}

impl Options {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    pub fn with_literals(mut self, literals: LiteralMatch) -> Self {
        self.literals = literals;
        self
    }

    pub fn with_numbers(mut self, numbers: NumberGrammar) -> Self {
        self.numbers = numbers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let options = Options::default();
        assert_eq!(options.max_depth, 100);
        assert_eq!(options.max_input_bytes, 10 * 1024 * 1024);
        assert_eq!(options.literals, LiteralMatch::Exact);
        assert_eq!(options.numbers, NumberGrammar::Unsigned);
    }

    #[test]
    fn test_builder_overrides() {
        let options = Options::default()
            .with_max_depth(3)
            .with_max_input_bytes(64)
            .with_literals(LiteralMatch::Loose)
            .with_numbers(NumberGrammar::Signed);
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.max_input_bytes, 64);
        assert_eq!(options.literals, LiteralMatch::Loose);
        assert_eq!(options.numbers, NumberGrammar::Signed);
    }
}
