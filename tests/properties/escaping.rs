//! Property tests for string-literal escaping.

use proptest::prelude::*;

use css2cpp::{escape_c_string, Minified};

/// True when every `"` in `s` is preceded by exactly one introduced `\`.
fn quotes_are_escaped(original: &str, escaped: &str) -> bool {
    escaped.replace("\\\"", "\"") == original
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the number of `\"` introduced equals the number of `"` in the input.
    #[test]
    fn property_escaped_quote_count_matches(
        s in "[a-z{}:;\" ]{0,128}"
    ) {
        let escaped = escape_c_string(&Minified::Text(s.clone()));
        prop_assert_eq!(escaped.matches("\\\"").count(), s.matches('"').count());
        prop_assert_eq!(escaped.len(), s.len() + s.matches('"').count());
    }

    /// PROPERTY: removing the introduced backslashes gives back the input.
    #[test]
    fn property_escaping_only_adds_backslashes(
        s in "[a-z{}:;\"' ]{0,128}"
    ) {
        let escaped = escape_c_string(&Minified::Text(s.clone()));
        prop_assert!(quotes_are_escaped(&s, &escaped));
    }

    /// PROPERTY: text without quotes passes through unchanged.
    #[test]
    fn property_quote_free_text_is_identity(
        s in "[^\"]{0,128}"
    ) {
        prop_assert_eq!(escape_c_string(&Minified::Text(s.clone())), s);
    }

    /// PROPERTY: escaping never panics on arbitrary input.
    #[test]
    fn property_escape_never_panics(
        s in "(?s).{0,256}"
    ) {
        let _ = escape_c_string(&Minified::Text(s));
    }
}

#[test]
fn absent_text_escapes_to_empty() {
    assert_eq!(escape_c_string(&Minified::Absent), "");
}
