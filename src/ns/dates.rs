//! Calendar helpers (`Dte` namespace).
//!
//! Receivers are epoch-millisecond timestamps; calendar math is UTC throughout, via `chrono`.
//! Timestamps outside chrono's representable range are reported, not clamped.

use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};
use kindred_core::Value;

use super::{arg_number, expect_args, receiver_date};
use crate::errors::OpError;
use crate::registry::{Namespace, op};

/// Resolve an epoch-millisecond timestamp to a UTC calendar datetime.
pub fn datetime(op_name: &'static str, epoch_millis: i64) -> Result<DateTime<Utc>, OpError> {
    DateTime::from_timestamp_millis(epoch_millis).ok_or_else(|| OpError::OutOfRange {
        op: op_name,
        message: format!("timestamp {epoch_millis}ms is outside the representable range"),
    })
}

/// ISO-8601 / RFC 3339 rendering with millisecond precision, UTC designator `Z`.
pub fn iso(op_name: &'static str, epoch_millis: i64) -> Result<String, OpError> {
    Ok(datetime(op_name, epoch_millis)?.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub static DTE: Namespace = Namespace {
    canonical: "Dte",
    aliases: &["date"],
    description: "Calendar operations over epoch-millisecond timestamps (UTC).",
    ops: &[
        op("iso", &["toISOString"], "ISO-8601 rendering in UTC.", ops::iso),
        op("year", &[], "Calendar year.", ops::year),
        op("month", &[], "Calendar month, 1-12.", ops::month),
        op("day", &[], "Day of month, 1-31.", ops::day),
        op("hour", &[], "Hour of day, 0-23.", ops::hour),
        op("minute", &[], "Minute of hour, 0-59.", ops::minute),
        op("second", &[], "Second of minute, 0-59.", ops::second),
        op(
            "epoch_millis",
            &["epochMillis", "getTime"],
            "Milliseconds since the Unix epoch.",
            ops::epoch_millis,
        ),
        op(
            "add_millis",
            &["addMillis"],
            "New date offset by a number of milliseconds.",
            ops::add_millis,
        ),
        op(
            "diff_millis",
            &["diffMillis"],
            "Milliseconds from another date to this one.",
            ops::diff_millis,
        ),
    ],
};

mod ops {
    use super::*;
    use kindred_core::Kind;

    fn field(
        op_name: &'static str,
        receiver: &Value,
        args: &[Value],
        pick: fn(DateTime<Utc>) -> f64,
    ) -> Result<Value, OpError> {
        expect_args(op_name, args, 0)?;
        let ms = receiver_date(op_name, receiver)?;
        Ok(Value::Number(pick(datetime(op_name, ms)?)))
    }

    pub(super) fn iso(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("iso", args, 0)?;
        let ms = receiver_date("iso", receiver)?;
        Ok(Value::str(super::iso("iso", ms)?))
    }

    pub(super) fn year(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        field("year", receiver, args, |dt| f64::from(dt.year()))
    }

    pub(super) fn month(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        field("month", receiver, args, |dt| f64::from(dt.month()))
    }

    pub(super) fn day(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        field("day", receiver, args, |dt| f64::from(dt.day()))
    }

    pub(super) fn hour(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        field("hour", receiver, args, |dt| f64::from(dt.hour()))
    }

    pub(super) fn minute(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        field("minute", receiver, args, |dt| f64::from(dt.minute()))
    }

    pub(super) fn second(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        field("second", receiver, args, |dt| f64::from(dt.second()))
    }

    pub(super) fn epoch_millis(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("epoch_millis", args, 0)?;
        let ms = receiver_date("epoch_millis", receiver)?;
        Ok(Value::Number(ms as f64))
    }

    pub(super) fn add_millis(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("add_millis", args, 1)?;
        let ms = receiver_date("add_millis", receiver)?;
        let offset = arg_number("add_millis", args, 0)?;
        if !(offset.is_finite() && offset.fract() == 0.0) {
            return Err(OpError::OutOfRange {
                op: "add_millis",
                message: format!("offset must be an integral number of milliseconds, got {offset}"),
            });
        }
        match ms.checked_add(offset as i64) {
            Some(shifted) => Ok(Value::Date(shifted)),
            None => Err(OpError::OutOfRange {
                op: "add_millis",
                message: "offset overflows the timestamp".to_string(),
            }),
        }
    }

    pub(super) fn diff_millis(receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        expect_args("diff_millis", args, 1)?;
        let ms = receiver_date("diff_millis", receiver)?;
        let other = match &args[0] {
            Value::Date(other_ms) => *other_ms,
            other => {
                return Err(OpError::WrongArgument {
                    op: "diff_millis",
                    index: 0,
                    expected: Kind::Date,
                    actual: other.kind(),
                });
            }
        };
        Ok(Value::Number((ms - other) as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2021-03-04T05:06:07.008Z
    const SAMPLE_MS: i64 = 1_614_834_367_008;

    #[test]
    fn iso_renders_utc_with_milliseconds() {
        assert_eq!(
            DTE.call("iso", &Value::Date(SAMPLE_MS), &[]),
            Ok(Value::str("2021-03-04T05:06:07.008Z"))
        );
        assert_eq!(
            DTE.call("toISOString", &Value::Date(0), &[]),
            Ok(Value::str("1970-01-01T00:00:00.000Z"))
        );
    }

    #[test]
    fn calendar_fields_split_the_timestamp() {
        let date = Value::Date(SAMPLE_MS);
        assert_eq!(DTE.call("year", &date, &[]), Ok(Value::Number(2021.0)));
        assert_eq!(DTE.call("month", &date, &[]), Ok(Value::Number(3.0)));
        assert_eq!(DTE.call("day", &date, &[]), Ok(Value::Number(4.0)));
        assert_eq!(DTE.call("hour", &date, &[]), Ok(Value::Number(5.0)));
        assert_eq!(DTE.call("minute", &date, &[]), Ok(Value::Number(6.0)));
        assert_eq!(DTE.call("second", &date, &[]), Ok(Value::Number(7.0)));
    }

    #[test]
    fn arithmetic_shifts_and_diffs() {
        let date = Value::Date(1_000);
        assert_eq!(
            DTE.call("add_millis", &date, &[Value::Number(500.0)]),
            Ok(Value::Date(1_500))
        );
        assert_eq!(
            DTE.call("diff_millis", &Value::Date(1_500), &[Value::Date(1_000)]),
            Ok(Value::Number(500.0))
        );
    }

    #[test]
    fn negative_timestamps_predate_the_epoch() {
        assert_eq!(
            DTE.call("year", &Value::Date(-86_400_000), &[]),
            Ok(Value::Number(1969.0))
        );
    }
}
