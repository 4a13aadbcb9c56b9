//! Number helpers (`Num` namespace).
//!
//! Predicates plus the precision/base renderings from the core rendering policy.

use kindred_core::{Value, num};

use super::{arg_number, expect_args, receiver_number};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

pub static NUM: Namespace = Namespace {
    canonical: "Num",
    aliases: &["number"],
    description: "Number predicates and renderings.",
    ops: &[
        op("is_nan", &["isNaN"], "Whether the number is NaN.", ops::is_nan),
        op(
            "is_finite",
            &["isFinite"],
            "Whether the number is neither NaN nor infinite.",
            ops::is_finite,
        ),
        op(
            "is_integer",
            &["isInteger"],
            "Whether the number is finite with no fractional part.",
            ops::is_integer,
        ),
        op(
            "to_fixed",
            &["toFixed"],
            "Render with a fixed number of fraction digits.",
            ops::to_fixed,
        ),
        op(
            "to_radix",
            &["toRadix"],
            "Render an integral number in another base (2-36).",
            ops::to_radix,
        ),
    ],
};

mod ops {
    use super::*;

    pub(super) fn is_nan(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("is_nan", args, 0)?;
        Ok(Value::Bool(receiver_number("is_nan", receiver)?.is_nan()))
    }

    pub(super) fn is_finite(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("is_finite", args, 0)?;
        Ok(Value::Bool(receiver_number("is_finite", receiver)?.is_finite()))
    }

    pub(super) fn is_integer(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("is_integer", args, 0)?;
        let n = receiver_number("is_integer", receiver)?;
        Ok(Value::Bool(num::is_integer(n)))
    }

    pub(super) fn to_fixed(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("to_fixed", args, 1)?;
        let n = receiver_number("to_fixed", receiver)?;
        let digits = arg_number("to_fixed", args, 0)?;
        if !(digits.is_finite() && digits.fract() == 0.0 && (0.0..=100.0).contains(&digits)) {
            return Err(OpError::OutOfRange {
                op: "to_fixed",
                message: format!("digits must be an integer in 0..=100, got {digits}"),
            });
        }
        Ok(Value::str(num::to_fixed(n, digits as usize)))
    }

    pub(super) fn to_radix(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("to_radix", args, 1)?;
        let n = receiver_number("to_radix", receiver)?;
        let radix = arg_number("to_radix", args, 0)?;
        if !(radix.is_finite() && radix.fract() == 0.0 && (2.0..=36.0).contains(&radix)) {
            return Err(OpError::OutOfRange {
                op: "to_radix",
                message: format!("radix must be an integer in 2..=36, got {radix}"),
            });
        }
        match num::to_radix(n, radix as u32) {
            Some(rendered) => Ok(Value::str(rendered)),
            None => Err(OpError::OutOfRange {
                op: "to_radix",
                message: format!("receiver must be an exactly-representable integer, got {n}"),
            }),
        }
    }
}
