//! Dynamic value representation and fundamental operations.
//!
//! [`Value`] is the owned, structural model every toolkit operation works over. Each variant
//! corresponds to exactly one entry of the [`Kind`](crate::kind::Kind) vocabulary; classification
//! reads the variant discriminant, never the shape of the payload.

use std::collections::BTreeMap;
use std::fmt;

use crate::kind::{Kind, kind_of};
use crate::num;

// ---------------------------------------------------------------------------
// Core value type
// ---------------------------------------------------------------------------

/// Runtime dynamic value.
///
/// Values are plain owned data with structural equality. Numbers follow IEEE semantics, so
/// `Number(f64::NAN) != Number(f64::NAN)` — the same inequality the classifier deliberately
/// ignores (a NaN is still a `Number`).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    /// Calendar timestamp in milliseconds since the Unix epoch.
    Date(i64),
    /// Regular-expression pattern source, stored uncompiled.
    Regexp(String),
    /// Insertion-ordered key/value pairs.
    Map(Vec<(Value, Value)>),
    /// Insertion-ordered members.
    Set(Vec<Value>),
    Symbol(String),
    /// Named callable reference; dispatch is left to the embedder.
    Function(String),
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn number(n: impl Into<f64>) -> Self {
        Value::Number(n.into())
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn object(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Value::Object(entries.into_iter().collect())
    }

    pub fn date(epoch_millis: i64) -> Self {
        Value::Date(epoch_millis)
    }

    pub fn regexp(source: impl Into<String>) -> Self {
        Value::Regexp(source.into())
    }

    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(description.into())
    }

    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(name.into())
    }

    /// Classify this value. Total and deterministic; see [`kind_of`].
    pub fn kind(&self) -> Kind {
        kind_of(self)
    }

    /// Truthiness: `Undefined`, `Null`, `false`, `0`, `NaN` and `""` are falsy,
    /// everything else (including empty containers) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null | Value::Bool(false) => false,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl fmt::Display for Value {
    /// Render the textual form used by the formatter's `%s` directive.
    ///
    /// Top-level strings render bare; strings nested inside containers render quoted. Numbers
    /// follow [`num::format_number`] (`NaN`, `Infinity`, integral floats without a decimal
    /// point). Dates render as `[Date <ms>]`; the date namespace owns calendar rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => write_nested(f, other),
        }
    }
}

fn write_nested(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => f.write_str(&num::format_number(*n)),
        Value::Str(s) => write!(f, "\"{s}\""),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(entries) => {
            f.write_str("{")?;
            for (i, (key, val)) in entries.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: ")?;
                write_nested(f, val)?;
            }
            f.write_str("}")
        }
        Value::Date(ms) => write!(f, "[Date {ms}]"),
        Value::Regexp(src) => write!(f, "/{src}/"),
        Value::Map(pairs) => {
            f.write_str("Map {")?;
            for (i, (key, val)) in pairs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(f, key)?;
                f.write_str(": ")?;
                write_nested(f, val)?;
            }
            f.write_str("}")
        }
        Value::Set(members) => {
            f.write_str("Set [")?;
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(f, member)?;
            }
            f.write_str("]")
        }
        Value::Symbol(desc) => write!(f, "Symbol({desc})"),
        Value::Function(name) => write!(f, "[Function {name}]"),
    }
}
