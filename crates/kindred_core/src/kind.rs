//! Kind vocabulary and the value classifier.
//!
//! This registry defines the closed set of kinds a [`Value`] can classify to, together with
//! canonical spellings + metadata for docs and tooling.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Aliases exist for ergonomics (e.g. `"regex"` is accepted for `"regexp"`).
//! - Classification is total: [`kind_of`] maps every value to exactly one kind, reading the
//!   variant discriminant only. A shape that merely *looks* like another kind (an object with a
//!   `"length"` key, say) classifies by what it is, not what it resembles.
//!
//! ## Examples
//! ```rust
//! use kindred_core::kind::{self, Kind};
//! use kindred_core::Value;
//!
//! assert_eq!(kind::from_str("regexp"), Some(Kind::RegExp));
//! assert_eq!(kind::from_str("regex"), Some(Kind::RegExp));
//! assert_eq!(kind::as_str(Kind::RegExp), "regexp");
//! assert_eq!(kind::kind_of(&Value::Number(f64::NAN)), Kind::Number);
//! ```

use std::fmt;

use crate::value::Value;

/// Stable identifier for a value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Array,
    Boolean,
    Date,
    Function,
    Map,
    Null,
    Number,
    Object,
    RegExp,
    Set,
    String,
    Symbol,
    Undefined,
}

/// Metadata for a kind.
///
/// ## Notes
/// - `canonical` is the spelling used in docs, error messages and the CLI.
/// - `aliases` are additional spellings accepted by [`from_str`].
#[derive(Debug, Clone, Copy)]
pub struct KindInfo {
    pub id: Kind,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of all kinds. Closed: classification never yields anything outside this table.
pub const KINDS: &[KindInfo] = &[
    info(Kind::Array, "array", &["arr"], "Sequential container of values."),
    info(Kind::Boolean, "boolean", &["bool"], "The two truth values."),
    info(
        Kind::Date,
        "date",
        &[],
        "Calendar timestamp (milliseconds since the Unix epoch).",
    ),
    info(Kind::Function, "function", &["fn"], "Named callable reference."),
    info(Kind::Map, "map", &[], "Insertion-ordered key/value container."),
    info(Kind::Null, "null", &[], "The deliberate absence-of-value sentinel."),
    info(
        Kind::Number,
        "number",
        &["num"],
        "IEEE double, including NaN and the infinities.",
    ),
    info(
        Kind::Object,
        "object",
        &["obj"],
        "Structural string-keyed record.",
    ),
    info(
        Kind::RegExp,
        "regexp",
        &["regex"],
        "Regular-expression pattern source.",
    ),
    info(Kind::Set, "set", &[], "Insertion-ordered container of members."),
    info(Kind::String, "string", &["str"], "UTF-8 text."),
    info(Kind::Symbol, "symbol", &[], "Described unique marker."),
    info(
        Kind::Undefined,
        "undefined",
        &[],
        "The not-assigned absence-of-value sentinel.",
    ),
];

/// Classify a value.
///
/// ## Returns
/// - (`Kind`): exactly one kind per value; pure and deterministic, never fails.
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Undefined => Kind::Undefined,
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::Str(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
        Value::Date(_) => Kind::Date,
        Value::Regexp(_) => Kind::RegExp,
        Value::Map(_) => Kind::Map,
        Value::Set(_) => Kind::Set,
        Value::Symbol(_) => Kind::Symbol,
        Value::Function(_) => Kind::Function,
    }
}

/// Return the canonical spelling for a kind.
pub fn as_str(id: Kind) -> &'static str {
    info_for(id).canonical
}

/// Return the accepted aliases for a kind.
pub fn aliases(id: Kind) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Return the full metadata entry for a kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: Kind) -> &'static KindInfo {
    KINDS.iter().find(|k| k.id == id).expect("kind info missing")
}

/// Resolve a spelling to a kind.
///
/// ## Returns
/// - `Some(Kind)` if `name` matches a canonical spelling or alias.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(name: &str) -> Option<Kind> {
    if let Some(k) = KINDS.iter().find(|k| k.canonical == name) {
        return Some(k.id);
    }
    KINDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&name)
        })
        .map(|k| k.id)
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn info(
    id: Kind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> KindInfo {
    KindInfo {
        id,
        canonical,
        aliases,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn one_of_each() -> Vec<(Value, Kind)> {
        vec![
            (Value::Undefined, Kind::Undefined),
            (Value::Null, Kind::Null),
            (Value::Bool(true), Kind::Boolean),
            (Value::Number(0.0), Kind::Number),
            (Value::str(""), Kind::String),
            (Value::Array(vec![]), Kind::Array),
            (Value::Object(BTreeMap::new()), Kind::Object),
            (Value::Date(0), Kind::Date),
            (Value::regexp("a"), Kind::RegExp),
            (Value::Map(vec![]), Kind::Map),
            (Value::Set(vec![]), Kind::Set),
            (Value::symbol("s"), Kind::Symbol),
            (Value::function("f"), Kind::Function),
        ]
    }

    #[test]
    fn every_variant_classifies_to_its_kind() {
        for (value, expected) in one_of_each() {
            assert_eq!(kind_of(&value), expected, "value {value:?}");
            // Repeated classification is deterministic.
            assert_eq!(kind_of(&value), kind_of(&value));
        }
    }

    #[test]
    fn non_finite_numbers_are_still_numbers() {
        assert_eq!(kind_of(&Value::Number(f64::NAN)), Kind::Number);
        assert_eq!(kind_of(&Value::Number(f64::INFINITY)), Kind::Number);
        assert_eq!(kind_of(&Value::Number(f64::NEG_INFINITY)), Kind::Number);
    }

    #[test]
    fn array_like_object_is_an_object() {
        let shaped = Value::object([
            ("length".to_string(), Value::Number(2.0)),
            ("0".to_string(), Value::str("a")),
            ("1".to_string(), Value::str("b")),
        ]);
        assert_eq!(kind_of(&shaped), Kind::Object);
    }

    #[test]
    fn canonical_spellings_round_trip() {
        for entry in KINDS {
            assert_eq!(from_str(entry.canonical), Some(entry.id));
            for alias in entry.aliases {
                assert_eq!(from_str(alias), Some(entry.id));
            }
        }
        assert_eq!(from_str("no-such-kind"), None);
        // Case-sensitive.
        assert_eq!(from_str("Array"), None);
    }

    #[test]
    fn registry_covers_every_value() {
        // One table entry per variant; the classifier test above proves totality.
        assert_eq!(KINDS.len(), one_of_each().len());
    }
}
