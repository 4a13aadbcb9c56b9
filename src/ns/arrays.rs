//! Sequence helpers (`Arr` namespace).
//!
//! Operations are pure: every transform returns a new array, the receiver is never mutated.
//! Membership tests use structural equality, so `NaN` never matches itself.

use kindred_core::Value;

use super::{expect_args, expect_at_most_args, receiver_array};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

pub fn first(items: &[Value]) -> Value {
    items.first().cloned().unwrap_or(Value::Undefined)
}

pub fn last(items: &[Value]) -> Value {
    items.last().cloned().unwrap_or(Value::Undefined)
}

pub fn reverse(items: &[Value]) -> Vec<Value> {
    items.iter().rev().cloned().collect()
}

/// Keep the first occurrence of each distinct member.
pub fn unique(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Splice nested arrays in, one level deep.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(nested) => out.extend(nested.iter().cloned()),
            other => out.push(other.clone()),
        }
    }
    out
}

/// Drop the falsy members.
pub fn compact(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|v| v.is_truthy()).cloned().collect()
}

pub fn contains(items: &[Value], needle: &Value) -> bool {
    items.contains(needle)
}

/// Index of the first structural match, or `None`.
pub fn index_of(items: &[Value], needle: &Value) -> Option<usize> {
    items.iter().position(|item| item == needle)
}

/// Join the members' textual forms with `separator`.
pub fn join(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

pub static ARR: Namespace = Namespace {
    canonical: "Arr",
    aliases: &["array"],
    description: "Sequence operations; transforms return new arrays.",
    ops: &[
        op("len", &["length"], "Number of members.", ops::len),
        op("first", &[], "First member, or undefined.", ops::first),
        op("last", &[], "Last member, or undefined.", ops::last),
        op("reverse", &[], "Members in reverse order.", ops::reverse),
        op("unique", &[], "First occurrence of each distinct member.", ops::unique),
        op("flatten", &[], "Splice nested arrays in, one level deep.", ops::flatten),
        op("compact", &[], "Drop the falsy members.", ops::compact),
        op("contains", &[], "Whether a member equals the argument.", ops::contains),
        op(
            "index_of",
            &["indexOf"],
            "Index of the first matching member, or -1.",
            ops::index_of,
        ),
        op("join", &[], "Join textual forms with a separator.", ops::join),
    ],
};

mod ops {
    use super::*;
    use crate::ns::arg_str;

    pub(super) fn len(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("len", args, 0)?;
        Ok(Value::Number(receiver_array("len", receiver)?.len() as f64))
    }

    pub(super) fn first(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("first", args, 0)?;
        Ok(super::first(receiver_array("first", receiver)?))
    }

    pub(super) fn last(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("last", args, 0)?;
        Ok(super::last(receiver_array("last", receiver)?))
    }

    pub(super) fn reverse(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("reverse", args, 0)?;
        Ok(Value::Array(super::reverse(receiver_array("reverse", receiver)?)))
    }

    pub(super) fn unique(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("unique", args, 0)?;
        Ok(Value::Array(super::unique(receiver_array("unique", receiver)?)))
    }

    pub(super) fn flatten(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("flatten", args, 0)?;
        Ok(Value::Array(super::flatten(receiver_array("flatten", receiver)?)))
    }

    pub(super) fn compact(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("compact", args, 0)?;
        Ok(Value::Array(super::compact(receiver_array("compact", receiver)?)))
    }

    pub(super) fn contains(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("contains", args, 1)?;
        let items = receiver_array("contains", receiver)?;
        Ok(Value::Bool(super::contains(items, &args[0])))
    }

    pub(super) fn index_of(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("index_of", args, 1)?;
        let items = receiver_array("index_of", receiver)?;
        let index = super::index_of(items, &args[0])
            .map(|i| i as f64)
            .unwrap_or(-1.0);
        Ok(Value::Number(index))
    }

    pub(super) fn join(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_at_most_args("join", args, 1)?;
        let items = receiver_array("join", receiver)?;
        let separator = match args.first() {
            Some(_) => arg_str("join", args, 0)?,
            None => ",",
        };
        Ok(Value::str(super::join(items, separator)))
    }
}
