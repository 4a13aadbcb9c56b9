//! Type-categorized helper namespaces.
//!
//! One module per supported kind (plus the unbound math namespace). Each module provides plain
//! typed entry points, and a `static` [`Namespace`](crate::registry::Namespace) table of
//! adapters that kind-check a dynamic receiver/arguments and delegate to those entry points.
//!
//! The adapter helpers below are shared across modules so every namespace reports receiver and
//! argument mismatches with the same canonical wording.

pub mod arrays;
pub mod booleans;
pub mod dates;
pub mod math;
pub mod numbers;
pub mod objects;
pub mod regx;
pub mod strings;

use std::collections::BTreeMap;

use kindred_core::{Kind, Value};

use crate::errors::OpError;

// ---------------------------------------------------------------------------
// Adapter helpers
// ---------------------------------------------------------------------------

pub(crate) fn expect_args(op: &'static str, args: &[Value], n: usize) -> Result<(), OpError> {
    if args.len() != n {
        return Err(OpError::Arity {
            op,
            expected: n,
            got: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn expect_at_most_args(
    op: &'static str,
    args: &[Value],
    max: usize,
) -> Result<(), OpError> {
    if args.len() > max {
        return Err(OpError::Arity {
            op,
            expected: max,
            got: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn receiver_str<'a>(op: &'static str, receiver: &'a Value) -> Result<&'a str, OpError> {
    match receiver {
        Value::Str(s) => Ok(s),
        other => Err(wrong_receiver(op, Kind::String, other)),
    }
}

pub(crate) fn receiver_number(op: &'static str, receiver: &Value) -> Result<f64, OpError> {
    match receiver {
        Value::Number(n) => Ok(*n),
        other => Err(wrong_receiver(op, Kind::Number, other)),
    }
}

pub(crate) fn receiver_bool(op: &'static str, receiver: &Value) -> Result<bool, OpError> {
    match receiver {
        Value::Bool(b) => Ok(*b),
        other => Err(wrong_receiver(op, Kind::Boolean, other)),
    }
}

pub(crate) fn receiver_array<'a>(
    op: &'static str,
    receiver: &'a Value,
) -> Result<&'a [Value], OpError> {
    match receiver {
        Value::Array(items) => Ok(items),
        other => Err(wrong_receiver(op, Kind::Array, other)),
    }
}

pub(crate) fn receiver_object<'a>(
    op: &'static str,
    receiver: &'a Value,
) -> Result<&'a BTreeMap<String, Value>, OpError> {
    match receiver {
        Value::Object(entries) => Ok(entries),
        other => Err(wrong_receiver(op, Kind::Object, other)),
    }
}

pub(crate) fn receiver_date(op: &'static str, receiver: &Value) -> Result<i64, OpError> {
    match receiver {
        Value::Date(ms) => Ok(*ms),
        other => Err(wrong_receiver(op, Kind::Date, other)),
    }
}

pub(crate) fn receiver_regexp<'a>(
    op: &'static str,
    receiver: &'a Value,
) -> Result<&'a str, OpError> {
    match receiver {
        Value::Regexp(source) => Ok(source),
        other => Err(wrong_receiver(op, Kind::RegExp, other)),
    }
}

pub(crate) fn arg_number(op: &'static str, args: &[Value], index: usize) -> Result<f64, OpError> {
    match args.get(index) {
        Some(Value::Number(n)) => Ok(*n),
        Some(other) => Err(wrong_argument(op, index, Kind::Number, other)),
        None => Err(OpError::Arity {
            op,
            expected: index + 1,
            got: args.len(),
        }),
    }
}

pub(crate) fn arg_str<'a>(
    op: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a str, OpError> {
    match args.get(index) {
        Some(Value::Str(s)) => Ok(s),
        Some(other) => Err(wrong_argument(op, index, Kind::String, other)),
        None => Err(OpError::Arity {
            op,
            expected: index + 1,
            got: args.len(),
        }),
    }
}

fn wrong_receiver(op: &'static str, expected: Kind, actual: &Value) -> OpError {
    OpError::WrongReceiver {
        op,
        expected,
        actual: actual.kind(),
    }
}

fn wrong_argument(op: &'static str, index: usize, expected: Kind, actual: &Value) -> OpError {
    OpError::WrongArgument {
        op,
        index,
        expected,
        actual: actual.kind(),
    }
}
