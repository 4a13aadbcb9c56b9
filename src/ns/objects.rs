//! Record helpers (`Obj` namespace).
//!
//! Receivers are string-keyed records; key order is the record's sorted order.

use std::collections::BTreeMap;

use kindred_core::Value;

use super::{arg_str, expect_args, receiver_object};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

pub fn keys(entries: &BTreeMap<String, Value>) -> Vec<Value> {
    entries.keys().map(|key| Value::str(key.as_str())).collect()
}

pub fn values(entries: &BTreeMap<String, Value>) -> Vec<Value> {
    entries.values().cloned().collect()
}

/// `[key, value]` pairs, one two-member array per entry.
pub fn entries(entries: &BTreeMap<String, Value>) -> Vec<Value> {
    entries
        .iter()
        .map(|(key, value)| Value::array([Value::str(key.as_str()), value.clone()]))
        .collect()
}

/// Look a key up; absent keys yield the not-assigned sentinel, not an error.
pub fn get(entries: &BTreeMap<String, Value>, key: &str) -> Value {
    entries.get(key).cloned().unwrap_or(Value::Undefined)
}

/// Merge two records into a new one; on key collisions the right side wins.
pub fn merge(
    left: &BTreeMap<String, Value>,
    right: &BTreeMap<String, Value>,
) -> BTreeMap<String, Value> {
    let mut out = left.clone();
    for (key, value) in right {
        out.insert(key.clone(), value.clone());
    }
    out
}

pub static OBJ: Namespace = Namespace {
    canonical: "Obj",
    aliases: &["object"],
    description: "Record operations over string-keyed entries.",
    ops: &[
        op("len", &["length"], "Number of entries.", ops::len),
        op("keys", &[], "Keys as strings.", ops::keys),
        op("values", &[], "Values in key order.", ops::values),
        op("entries", &[], "[key, value] pairs.", ops::entries),
        op("has", &[], "Whether a key is present.", ops::has),
        op("get", &[], "Value for a key, or undefined.", ops::get),
        op(
            "merge",
            &[],
            "New record with another record's entries layered on top.",
            ops::merge,
        ),
    ],
};

mod ops {
    use super::*;
    use kindred_core::Kind;

    pub(super) fn len(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("len", args, 0)?;
        Ok(Value::Number(receiver_object("len", receiver)?.len() as f64))
    }

    pub(super) fn keys(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("keys", args, 0)?;
        Ok(Value::Array(super::keys(receiver_object("keys", receiver)?)))
    }

    pub(super) fn values(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("values", args, 0)?;
        Ok(Value::Array(super::values(receiver_object("values", receiver)?)))
    }

    pub(super) fn entries(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("entries", args, 0)?;
        Ok(Value::Array(super::entries(receiver_object(
            "entries", receiver,
        )?)))
    }

    pub(super) fn has(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("has", args, 1)?;
        let entries = receiver_object("has", receiver)?;
        let key = arg_str("has", args, 0)?;
        Ok(Value::Bool(entries.contains_key(key)))
    }

    pub(super) fn get(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("get", args, 1)?;
        let entries = receiver_object("get", receiver)?;
        let key = arg_str("get", args, 0)?;
        Ok(super::get(entries, key))
    }

    pub(super) fn merge(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("merge", args, 1)?;
        let left = receiver_object("merge", receiver)?;
        let right = match &args[0] {
            Value::Object(entries) => entries,
            other => {
                return Err(OpError::WrongArgument {
                    op: "merge",
                    index: 0,
                    expected: Kind::Object,
                    actual: other.kind(),
                });
            }
        };
        Ok(Value::Object(super::merge(left, right)))
    }
}
