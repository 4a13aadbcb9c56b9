//! Truth-value helpers (`Bool` namespace).

use kindred_core::Value;

use super::{expect_args, receiver_bool};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

pub fn negate(b: bool) -> bool {
    !b
}

/// `true` → 1, `false` → 0.
pub fn to_number(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

pub static BOOL: Namespace = Namespace {
    canonical: "Bool",
    aliases: &["boolean"],
    description: "Truth-value operations.",
    ops: &[
        op("negate", &["not"], "The opposite truth value.", ops::negate),
        op("to_number", &["toNumber"], "1 for true, 0 for false.", ops::to_number),
    ],
};

mod ops {
    use super::*;

    pub(super) fn negate(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("negate", args, 0)?;
        Ok(Value::Bool(super::negate(receiver_bool("negate", receiver)?)))
    }

    pub(super) fn to_number(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("to_number", args, 0)?;
        Ok(Value::Number(super::to_number(receiver_bool(
            "to_number",
            receiver,
        )?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::Kind;

    #[test]
    fn ops_cover_both_truth_values() {
        assert_eq!(
            BOOL.call("negate", &Value::Bool(true), &[]),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            BOOL.call("toNumber", &Value::Bool(true), &[]),
            Ok(Value::Number(1.0))
        );
        assert_eq!(
            BOOL.call("to_number", &Value::Bool(false), &[]),
            Ok(Value::Number(0.0))
        );
    }

    #[test]
    fn non_boolean_receivers_are_rejected() {
        let err = BOOL.call("negate", &Value::Number(0.0), &[]).unwrap_err();
        assert_eq!(
            err,
            OpError::WrongReceiver {
                op: "negate",
                expected: Kind::Boolean,
                actual: Kind::Number
            }
        );
    }
}
