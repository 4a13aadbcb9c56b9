//! Value ⇄ JSON bridge.
//!
//! Serialization is total: kinds JSON cannot carry degrade rather than fail. Non-finite
//! numbers, symbols and functions render as `null`; dates render as ISO-8601 strings; patterns
//! render as their source text; maps become objects keyed by their keys' textual form; sets
//! become arrays. Parsing maps JSON's own types straight onto the value model, so a parsed
//! value never contains the degraded kinds.

use chrono::{DateTime, SecondsFormat};
use kindred_core::Value;

use crate::errors::JsonError;

/// Render `value` as compact JSON text.
pub fn to_json(value: &Value) -> String {
    to_serde(value).to_string()
}

/// Parse JSON text into a value.
pub fn from_json(text: &str) -> Result<Value, JsonError> {
    let parsed: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_serde(parsed))
}

fn to_serde(value: &Value) -> serde_json::Value {
    match value {
        Value::Undefined | Value::Null | Value::Symbol(_) | Value::Function(_) => {
            serde_json::Value::Null
        }
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde).collect()),
        Value::Object(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, val)| (key.clone(), to_serde(val)))
                .collect(),
        ),
        Value::Date(ms) => match DateTime::from_timestamp_millis(*ms) {
            Some(dt) => {
                serde_json::Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serde_json::Value::Null,
        },
        Value::Regexp(source) => serde_json::Value::String(source.clone()),
        Value::Map(pairs) => serde_json::Value::Object(
            pairs
                .iter()
                .map(|(key, val)| (key.to_string(), to_serde(val)))
                .collect(),
        ),
        Value::Set(members) => {
            serde_json::Value::Array(members.iter().map(to_serde).collect())
        }
    }
}

fn from_serde(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_serde).collect())
        }
        serde_json::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, val)| (key, from_serde(val)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structures_round_trip() {
        let value = Value::object([
            ("flag".to_string(), Value::Bool(true)),
            ("items".to_string(), Value::array([Value::Number(1.0), Value::str("two")])),
            ("nothing".to_string(), Value::Null),
        ]);
        let text = to_json(&value);
        assert_eq!(from_json(&text).expect("own output parses"), value);
    }

    #[test]
    fn unrepresentable_kinds_degrade_to_null() {
        assert_eq!(to_json(&Value::Number(f64::NAN)), "null");
        assert_eq!(to_json(&Value::symbol("marker")), "null");
        assert_eq!(to_json(&Value::function("f")), "null");
        assert_eq!(to_json(&Value::Undefined), "null");
    }

    #[test]
    fn dates_render_as_iso_strings() {
        assert_eq!(to_json(&Value::Date(0)), "\"1970-01-01T00:00:00.000Z\"");
    }

    #[test]
    fn maps_and_sets_use_json_containers() {
        let map = Value::Map(vec![(Value::str("k"), Value::Number(1.0))]);
        assert_eq!(to_json(&map), r#"{"k":1.0}"#);
        let set = Value::Set(vec![Value::str("a"), Value::str("b")]);
        assert_eq!(to_json(&set), r#"["a","b"]"#);
    }

    #[test]
    fn parse_failures_surface_the_cause() {
        let err = from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON:"));
    }
}
