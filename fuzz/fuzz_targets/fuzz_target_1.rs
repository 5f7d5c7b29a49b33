#![no_main]
use libfuzzer_sys::fuzz_target;

use json_check::{validate_or_parse_with, LiteralMatch, NumberGrammar, Options};

fuzz_target!(|data: &[u8]| {
    // Only UTF-8 input reaches the validator.
    if let Ok(s) = std::str::from_utf8(data) {
        // Looking for panics: both grammars, any outcome is fine.
        let _ = validate_or_parse_with(s, Options::default());

        let relaxed = Options::default()
            .with_literals(LiteralMatch::Loose)
            .with_numbers(NumberGrammar::Signed);
        let _ = validate_or_parse_with(s, relaxed);
    }
});
