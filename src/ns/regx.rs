//! Pattern helpers (`RegX` namespace).
//!
//! Owns the metacharacter escaper plus operations over pattern values. Patterns are stored as
//! uncompiled source ([`Value::Regexp`]) and compiled with the `regex` crate at call time.

use kindred_core::Value;
use kindred_core::escape::escape_str;
use regex::Regex;

use super::{arg_str, expect_args, receiver_regexp};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

/// Escape regex metacharacters so a string matches itself literally inside a pattern.
///
/// Non-string input is returned unchanged — the absence sentinels, booleans, numbers and every
/// other kind pass through exactly as received, with no coercion. String input gets every
/// metacharacter in the fixed escape set preceded by a single backslash; whitespace and digits
/// are never escaped.
///
/// Escaping is **not** idempotent: applying it to an already-escaped string double-escapes the
/// introduced backslashes. Escape once, at the boundary where literal text meets a pattern.
///
/// ## Examples
/// ```rust
/// use kindred::ns::regx::escape;
/// use kindred_core::Value;
///
/// assert_eq!(escape(Value::str("[foo]")), Value::str("\\[foo\\]"));
/// assert_eq!(escape(Value::Null), Value::Null);
/// ```
pub fn escape(value: Value) -> Value {
    match value {
        Value::Str(s) => Value::Str(escape_str(&s)),
        other => other,
    }
}

/// Second binding to the same function item as [`escape`]; a re-export, not a reimplementation.
pub use escape as escape_regx;

/// Compile a pattern source, naming the operation on failure.
fn compile(op_name: &'static str, source: &str) -> Result<Regex, OpError> {
    Regex::new(source).map_err(|err| OpError::BadPattern {
        op: op_name,
        message: err.to_string(),
    })
}

/// Whether `pattern` matches anywhere in `text`.
pub fn test(op_name: &'static str, pattern: &str, text: &str) -> Result<bool, OpError> {
    Ok(compile(op_name, pattern)?.is_match(text))
}

/// Character index of the first match of `pattern` in `text`, if any.
pub fn find(op_name: &'static str, pattern: &str, text: &str) -> Result<Option<usize>, OpError> {
    let found = compile(op_name, pattern)?
        .find(text)
        .map(|m| text[..m.start()].chars().count());
    Ok(found)
}

pub static REGX: Namespace = Namespace {
    canonical: "RegX",
    aliases: &["regx", "regexp"],
    description: "Pattern operations: literal-text escaping, matching, sources.",
    ops: &[
        op(
            "escape",
            &["escapeRegX"],
            "Escape metacharacters in a string; every other kind passes through unchanged.",
            ops::escape,
        ),
        op("source", &[], "The pattern source text.", ops::source),
        op("test", &[], "Whether the pattern matches a string.", ops::test),
        op(
            "find",
            &[],
            "Character index of the first match in a string, or null.",
            ops::find,
        ),
    ],
};

mod ops {
    use super::*;

    pub(super) fn escape(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("escape", args, 0)?;
        Ok(super::escape(receiver.clone()))
    }

    pub(super) fn source(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("source", args, 0)?;
        let source = receiver_regexp("source", receiver)?;
        Ok(Value::str(source))
    }

    pub(super) fn test(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("test", args, 1)?;
        let pattern = receiver_regexp("test", receiver)?;
        let text = arg_str("test", args, 0)?;
        Ok(Value::Bool(super::test("test", pattern, text)?))
    }

    pub(super) fn find(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("find", args, 1)?;
        let pattern = receiver_regexp("find", receiver)?;
        let text = arg_str("find", args, 0)?;
        match super::find("find", pattern, text)? {
            Some(index) => Ok(Value::Number(index as f64)),
            None => Ok(Value::Null),
        }
    }
}
