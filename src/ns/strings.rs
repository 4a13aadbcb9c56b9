//! Text helpers (`Str` namespace).
//!
//! Indices and lengths count Unicode scalars, not bytes.

use kindred_core::Value;

use super::{arg_number, arg_str, expect_args, expect_at_most_args, receiver_str};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

/// Length in Unicode scalars.
pub fn len(s: &str) -> usize {
    s.chars().count()
}

pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase the first scalar, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

pub fn repeat(s: &str, count: usize) -> String {
    s.repeat(count)
}

/// Split on a separator; with no separator, the whole string is the single part.
pub fn split(s: &str, separator: Option<&str>) -> Vec<String> {
    match separator {
        Some(sep) if !sep.is_empty() => s.split(sep).map(str::to_string).collect(),
        // An empty separator splits into scalars.
        Some(_) => s.chars().map(String::from).collect(),
        None => vec![s.to_string()],
    }
}

pub static STR: Namespace = Namespace {
    canonical: "Str",
    aliases: &["string"],
    description: "Text operations over Unicode scalars.",
    ops: &[
        op("len", &["length"], "Length in Unicode scalars.", ops::len),
        op("upper", &[], "Uppercase the whole string.", ops::upper),
        op("lower", &[], "Lowercase the whole string.", ops::lower),
        op("capitalize", &[], "Uppercase the first scalar.", ops::capitalize),
        op("trim", &[], "Strip leading and trailing whitespace.", ops::trim),
        op("reverse", &[], "Reverse the scalars.", ops::reverse),
        op("repeat", &[], "Concatenate the string with itself n times.", ops::repeat),
        op(
            "starts_with",
            &["startsWith"],
            "Whether the string starts with a prefix.",
            ops::starts_with,
        ),
        op(
            "ends_with",
            &["endsWith"],
            "Whether the string ends with a suffix.",
            ops::ends_with,
        ),
        op("contains", &[], "Whether the string contains a substring.", ops::contains),
        op("split", &[], "Split on a separator.", ops::split),
    ],
};

mod ops {
    use super::*;

    pub(super) fn len(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("len", args, 0)?;
        Ok(Value::Number(super::len(receiver_str("len", receiver)?) as f64))
    }

    pub(super) fn upper(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("upper", args, 0)?;
        Ok(Value::str(super::upper(receiver_str("upper", receiver)?)))
    }

    pub(super) fn lower(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("lower", args, 0)?;
        Ok(Value::str(super::lower(receiver_str("lower", receiver)?)))
    }

    pub(super) fn capitalize(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("capitalize", args, 0)?;
        Ok(Value::str(super::capitalize(receiver_str(
            "capitalize",
            receiver,
        )?)))
    }

    pub(super) fn trim(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("trim", args, 0)?;
        Ok(Value::str(super::trim(receiver_str("trim", receiver)?)))
    }

    pub(super) fn reverse(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("reverse", args, 0)?;
        Ok(Value::str(super::reverse(receiver_str("reverse", receiver)?)))
    }

    pub(super) fn repeat(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("repeat", args, 1)?;
        let s = receiver_str("repeat", receiver)?;
        let count = arg_number("repeat", args, 0)?;
        if !(count.is_finite() && count >= 0.0 && count.fract() == 0.0) {
            return Err(OpError::OutOfRange {
                op: "repeat",
                message: format!("count must be a non-negative integer, got {count}"),
            });
        }
        Ok(Value::str(super::repeat(s, count as usize)))
    }

    pub(super) fn starts_with(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("starts_with", args, 1)?;
        let s = receiver_str("starts_with", receiver)?;
        let prefix = arg_str("starts_with", args, 0)?;
        Ok(Value::Bool(s.starts_with(prefix)))
    }

    pub(super) fn ends_with(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("ends_with", args, 1)?;
        let s = receiver_str("ends_with", receiver)?;
        let suffix = arg_str("ends_with", args, 0)?;
        Ok(Value::Bool(s.ends_with(suffix)))
    }

    pub(super) fn contains(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("contains", args, 1)?;
        let s = receiver_str("contains", receiver)?;
        let needle = arg_str("contains", args, 0)?;
        Ok(Value::Bool(s.contains(needle)))
    }

    pub(super) fn split(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_at_most_args("split", args, 1)?;
        let s = receiver_str("split", receiver)?;
        let separator = match args.first() {
            Some(_) => Some(arg_str("split", args, 0)?),
            None => None,
        };
        let parts = super::split(s, separator)
            .into_iter()
            .map(Value::Str)
            .collect();
        Ok(Value::Array(parts))
    }
}
