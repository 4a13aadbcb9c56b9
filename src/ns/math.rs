//! Arithmetic helpers (`Mth` namespace).
//!
//! Receivers are plain numbers. `Mth` has no kind binding — number values dispatch to `Num` —
//! so this namespace is reached by name, not by classification. NaN propagates through every
//! operation (IEEE semantics).

use kindred_core::Value;

use super::{arg_number, expect_args, receiver_number};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

/// -1, 0 or 1 by sign; NaN propagates.
pub fn sign(n: f64) -> f64 {
    if n.is_nan() {
        return f64::NAN;
    }
    if n == 0.0 { 0.0 } else if n < 0.0 { -1.0 } else { 1.0 }
}

/// Clamp `n` into `[low, high]`.
pub fn clamp(n: f64, low: f64, high: f64) -> f64 {
    n.max(low).min(high)
}

pub static MTH: Namespace = Namespace {
    canonical: "Mth",
    aliases: &["math"],
    description: "Arithmetic over numbers; not bound to a kind.",
    ops: &[
        op("abs", &[], "Absolute value.", ops::abs),
        op("ceil", &[], "Round up to the nearest integer.", ops::ceil),
        op("floor", &[], "Round down to the nearest integer.", ops::floor),
        op("round", &[], "Round to the nearest integer, ties away from zero.", ops::round),
        op("trunc", &[], "Drop the fractional part.", ops::trunc),
        op("sign", &[], "-1, 0 or 1 by sign.", ops::sign),
        op("sqrt", &[], "Square root.", ops::sqrt),
        op("pow", &[], "Raise to an exponent.", ops::pow),
        op("min", &[], "Smaller of receiver and argument.", ops::min),
        op("max", &[], "Larger of receiver and argument.", ops::max),
        op("clamp", &[], "Clamp into [low, high].", ops::clamp),
    ],
};

mod ops {
    use super::*;

    pub(super) fn abs(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("abs", args, 0)?;
        Ok(Value::Number(receiver_number("abs", receiver)?.abs()))
    }

    pub(super) fn ceil(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("ceil", args, 0)?;
        Ok(Value::Number(receiver_number("ceil", receiver)?.ceil()))
    }

    pub(super) fn floor(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("floor", args, 0)?;
        Ok(Value::Number(receiver_number("floor", receiver)?.floor()))
    }

    pub(super) fn round(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("round", args, 0)?;
        Ok(Value::Number(receiver_number("round", receiver)?.round()))
    }

    pub(super) fn trunc(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("trunc", args, 0)?;
        Ok(Value::Number(receiver_number("trunc", receiver)?.trunc()))
    }

    pub(super) fn sign(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("sign", args, 0)?;
        Ok(Value::Number(super::sign(receiver_number("sign", receiver)?)))
    }

    pub(super) fn sqrt(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("sqrt", args, 0)?;
        Ok(Value::Number(receiver_number("sqrt", receiver)?.sqrt()))
    }

    pub(super) fn pow(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("pow", args, 1)?;
        let base = receiver_number("pow", receiver)?;
        let exponent = arg_number("pow", args, 0)?;
        Ok(Value::Number(base.powf(exponent)))
    }

    pub(super) fn min(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("min", args, 1)?;
        let n = receiver_number("min", receiver)?;
        Ok(Value::Number(n.min(arg_number("min", args, 0)?)))
    }

    pub(super) fn max(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("max", args, 1)?;
        let n = receiver_number("max", receiver)?;
        Ok(Value::Number(n.max(arg_number("max", args, 0)?)))
    }

    pub(super) fn clamp(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("clamp", args, 2)?;
        let n = receiver_number("clamp", receiver)?;
        let low = arg_number("clamp", args, 0)?;
        let high = arg_number("clamp", args, 1)?;
        if low > high {
            return Err(OpError::OutOfRange {
                op: "clamp",
                message: format!("low {low} exceeds high {high}"),
            });
        }
        Ok(Value::Number(super::clamp(n, low, high)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_covers_the_edge_values() {
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(42.0), 1.0);
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn clamp_respects_the_bounds() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-5.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 3.0), 1.0);
    }

    #[test]
    fn clamp_op_rejects_inverted_bounds() {
        let err = MTH
            .call(
                "clamp",
                &Value::Number(1.0),
                &[Value::Number(3.0), Value::Number(0.0)],
            )
            .unwrap_err();
        assert!(matches!(err, OpError::OutOfRange { op: "clamp", .. }));
    }

    #[test]
    fn receiver_ops_delegate() {
        assert_eq!(
            MTH.call("pow", &Value::Number(2.0), &[Value::Number(10.0)]),
            Ok(Value::Number(1024.0))
        );
        assert_eq!(
            MTH.call("abs", &Value::Number(-2.5), &[]),
            Ok(Value::Number(2.5))
        );
    }
}
