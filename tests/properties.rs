//! Property-based tests for the validator.
//!
//! Documents are generated from the supported grammar, rendered to text and
//! fed back through `validate_or_parse`. `serde_json` serves as the reference
//! parser for the same text.

use json_check::{validate_or_parse, ErrorKind, Value as JsonValue};
use proptest::prelude::*;
use std::fmt::Write;

fn arb_value() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Boolean),
        (0..=i64::MAX).prop_map(JsonValue::Number),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..8)
                .prop_map(|members| JsonValue::Object(members.into_iter().collect())),
        ]
    })
}

/// Renders a value as JSON text, with `sep` between every token.
fn render(value: &JsonValue, sep: &str, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Boolean(b) => write!(out, "{}", b).unwrap(),
        JsonValue::Number(n) => write!(out, "{}", n).unwrap(),
        JsonValue::String(s) => write!(out, "\"{}\"", s).unwrap(),
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(sep);
                    out.push(',');
                }
                out.push_str(sep);
                render(item, sep, out);
            }
            out.push_str(sep);
            out.push(']');
        }
        JsonValue::Object(members) => {
            out.push('{');
            for (i, (key, item)) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(sep);
                    out.push(',');
                }
                write!(out, "{}\"{}\"{}:", sep, key, sep).unwrap();
                out.push_str(sep);
                render(item, sep, out);
            }
            out.push_str(sep);
            out.push('}');
        }
    }
}

fn to_text(value: &JsonValue, sep: &str) -> String {
    let mut out = String::new();
    render(value, sep, &mut out);
    out
}

fn from_serde(value: serde_json::Value) -> JsonValue {
    match value {
        serde_json::Value::Null => JsonValue::Null,
        serde_json::Value::Bool(b) => JsonValue::Boolean(b),
        serde_json::Value::Number(n) => {
            JsonValue::Number(n.as_i64().expect("generated numbers fit in i64"))
        }
        serde_json::Value::String(s) => JsonValue::String(s),
        serde_json::Value::Array(items) => {
            JsonValue::Array(items.into_iter().map(from_serde).collect())
        }
        serde_json::Value::Object(members) => JsonValue::Object(
            members
                .into_iter()
                .map(|(k, v)| (k, from_serde(v)))
                .collect(),
        ),
    }
}

proptest! {
    #[test]
    fn parsed_tree_mirrors_generated_tree(value in arb_value()) {
        let text = to_text(&value, "");
        prop_assert_eq!(validate_or_parse(&text).unwrap(), value);
    }

    #[test]
    fn whitespace_between_tokens_is_insignificant(
        value in arb_value(),
        sep in "[ \t\r\n]{0,3}",
    ) {
        let compact = validate_or_parse(&to_text(&value, "")).unwrap();
        let spaced = validate_or_parse(&to_text(&value, &sep)).unwrap();
        prop_assert_eq!(compact, spaced);
    }

    #[test]
    fn parsing_is_idempotent(value in arb_value()) {
        let text = to_text(&value, " ");
        prop_assert_eq!(validate_or_parse(&text), validate_or_parse(&text));
    }

    #[test]
    fn agrees_with_serde_json(value in arb_value()) {
        let text = to_text(&value, "");
        let reference: serde_json::Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(validate_or_parse(&text).unwrap(), from_serde(reference));
    }

    #[test]
    fn trailing_comma_in_array_is_rejected(items in prop::collection::vec(0..1000i64, 1..6)) {
        let body: Vec<String> = items.iter().map(i64::to_string).collect();
        let text = format!("[{},]", body.join(","));
        prop_assert_eq!(validate_or_parse(&text).unwrap_err().kind, ErrorKind::TrailingComma);
    }

    #[test]
    fn trailing_comma_in_object_is_rejected(keys in prop::collection::vec("[a-z]{1,4}", 1..6)) {
        let body: Vec<String> = keys.iter().map(|k| format!("\"{}\":null", k)).collect();
        let text = format!("{{{},}}", body.join(","));
        prop_assert_eq!(validate_or_parse(&text).unwrap_err().kind, ErrorKind::TrailingComma);
    }

    #[test]
    fn non_string_keys_are_rejected(key in 0..1000i64) {
        let text = format!("{{{}:1}}", key);
        prop_assert_eq!(
            validate_or_parse(&text).unwrap_err().kind,
            ErrorKind::ExpectedKey(key.to_string())
        );
    }

    #[test]
    fn never_panics_on_arbitrary_text(text in "\\PC{0,64}") {
        let _ = validate_or_parse(&text);
    }

    #[test]
    fn accepted_text_is_accepted_by_serde_json(text in "[\\[\\]{}:, 0-9a-z\"]{0,24}") {
        // The supported grammar is a subset of JSON, apart from leading zeros.
        if let Ok(value) = validate_or_parse(&text) {
            let has_leading_zero = text
                .as_bytes()
                .windows(2)
                .enumerate()
                .any(|(i, w)| {
                    w[0] == b'0'
                        && w[1].is_ascii_digit()
                        && (i == 0 || !text.as_bytes()[i - 1].is_ascii_digit())
                });
            if !has_leading_zero {
                let reference: serde_json::Value = serde_json::from_str(&text).unwrap();
                prop_assert_eq!(value, from_serde(reference));
            }
        }
    }
}
