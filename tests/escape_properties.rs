//! Property-based tests for the escaper
//!
//! These tests use proptest to verify the escaping invariants across many randomly generated
//! inputs, catching edge cases that hand-written tests might miss.

use kindred::prelude::*;
use proptest::prelude::*;

// Strategy for strings drawn from the never-escaped alphabet.
fn safe_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 :_@#~,;=<>'\"/!&]*").expect("valid strategy regex")
}

// Strategy over every non-string kind.
fn non_string_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        proptest::collection::vec(any::<i64>().prop_map(Value::from), 0..4).prop_map(Value::Array),
        any::<i64>().prop_map(Value::Date),
        "[a-z]{0,8}".prop_map(Value::regexp),
        "[a-z]{0,8}".prop_map(Value::symbol),
        "[a-z]{1,8}".prop_map(Value::function),
    ]
}

proptest! {
    /// Property: every non-string value passes through unchanged, kind included.
    #[test]
    fn non_strings_pass_through(value in non_string_value()) {
        // NaN never equals itself, so compare NaN-carrying numbers by bits.
        let out = escape(value.clone());
        match (&out, &value) {
            (Value::Number(a), Value::Number(b)) => {
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
            _ => {
                prop_assert_eq!(&out, &value);
            }
        }
        prop_assert_eq!(kind_of(&out), kind_of(&value));
    }

    /// Property: strings without metacharacters are content-equal after escaping.
    #[test]
    fn safe_strings_are_unchanged(text in safe_text()) {
        prop_assert_eq!(escape_str(&text), text);
    }

    /// Property: output length grows by exactly one per metacharacter occurrence.
    #[test]
    fn one_backslash_per_metacharacter(text in ".*") {
        let metachars = text.chars().filter(|&c| is_metacharacter(c)).count();
        let escaped = escape_str(&text);
        prop_assert_eq!(escaped.chars().count(), text.chars().count() + metachars);
    }

    /// Property: in the output, every metacharacter is preceded by a backslash, and every
    /// backslash is followed by a metacharacter (single pass never double-escapes).
    #[test]
    fn escapes_are_well_formed(text in ".*") {
        let escaped: Vec<char> = escape_str(&text).chars().collect();
        let mut i = 0;
        while i < escaped.len() {
            if escaped[i] == '\\' {
                prop_assert!(i + 1 < escaped.len(), "trailing lone backslash");
                prop_assert!(is_metacharacter(escaped[i + 1]));
                i += 2;
            } else {
                prop_assert!(!is_metacharacter(escaped[i]), "unescaped {:?}", escaped[i]);
                i += 1;
            }
        }
    }

    /// Property: escaped text always matches its source literally when compiled.
    #[test]
    fn escaped_text_matches_itself(text in ".{0,40}") {
        let pattern = format!("^{}$", escape_str(&text));
        let re = regex::Regex::new(&pattern).expect("escaped text compiles");
        prop_assert!(re.is_match(&text));
    }
}

#[test]
fn known_vectors() {
    assert_eq!(escape_str("[foo]"), "\\[foo\\]");
    assert_eq!(
        escape_str("([1-2 * foo.bar + ${0} ? 4 || 5 : 4 ^ 5])"),
        "\\(\\[1\\-2 \\* foo\\.bar \\+ \\$\\{0\\} \\? 4 \\|\\| 5 : 4 \\^ 5\\]\\)"
    );
    assert_eq!(escape_str(""), "");
}

#[test]
fn alias_and_canonical_are_one_function() {
    let canonical: fn(Value) -> Value = escape;
    let alias: fn(Value) -> Value = escape_regx;
    assert!(std::ptr::fn_addr_eq(canonical, alias));
}

#[test]
fn value_level_escape_only_touches_strings() {
    assert_eq!(escape(Value::str("a|b")), Value::str("a\\|b"));
    assert_eq!(escape(Value::Bool(true)), Value::Bool(true));
    assert_eq!(escape(Value::Number(7.0)), Value::Number(7.0));
    assert_eq!(escape(Value::Null), Value::Null);
    assert_eq!(escape(Value::Undefined), Value::Undefined);
}
