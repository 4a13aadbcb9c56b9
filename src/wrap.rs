//! Fluent dispatch: attach a value's namespace to the value itself.
//!
//! [`wrap`] classifies a value, resolves its namespace in a [`Registry`], and returns a
//! [`Wrapped`] view through which the namespace's operations can be invoked with the value bound
//! as receiver. The view borrows; it never copies or mutates the value, and it is meant to be
//! created, used and discarded on the spot.

use kindred_core::{Kind, Value};
use tracing::trace;

use crate::errors::{OpError, UnsupportedTypeError};
use crate::registry::{Namespace, Registry};

/// Anything `wrap` accepts: a plain value, or an existing view.
///
/// Wrapping a view again flattens to its underlying value, so there is never more than one level
/// of indirection.
pub trait AsValue {
    fn as_value(&self) -> &Value;
}

impl AsValue for Value {
    fn as_value(&self) -> &Value {
        self
    }
}

impl AsValue for Wrapped<'_> {
    fn as_value(&self) -> &Value {
        self.value
    }
}

/// Ephemeral view pairing a borrowed value with its namespace.
///
/// For every operation `op` in the namespace, `view.call("op", args)` is equivalent to invoking
/// the namespace function with the wrapped value as first argument.
#[derive(Clone, Copy)]
pub struct Wrapped<'a> {
    value: &'a Value,
    namespace: &'static Namespace,
}

impl<'a> Wrapped<'a> {
    /// The wrapped value (shared reference, never a copy).
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The namespace this view dispatches into.
    pub fn namespace(&self) -> &'static Namespace {
        self.namespace
    }

    /// Canonical names of the operations this view exposes.
    pub fn ops(&self) -> impl Iterator<Item = &'static str> {
        self.namespace.op_names()
    }

    /// Whether the view exposes `name` (canonical spelling or alias).
    pub fn has(&self, name: &str) -> bool {
        self.namespace.op(name).is_some()
    }

    /// Invoke a namespace operation with the wrapped value as receiver.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, OpError> {
        self.namespace.call(name, self.value, args)
    }
}

/// Wrap `value` in the namespace its kind is bound to in `registry`.
///
/// ## Returns
/// - `Ok(Wrapped)` when the kind has a binding — including a binding to an empty namespace,
///   which yields a view with no callable operations.
/// - `Err(UnsupportedTypeError)` naming the kind otherwise.
pub fn wrap<'a, V>(registry: &Registry, value: &'a V) -> Result<Wrapped<'a>, UnsupportedTypeError>
where
    V: AsValue + ?Sized,
{
    let value = value.as_value();
    let kind: Kind = value.kind();
    let namespace = registry.resolve(kind)?;
    trace!(%kind, namespace = namespace.canonical, "wrapped value");
    Ok(Wrapped { value, namespace })
}
