//! Namespace registry: the kind → namespace configuration `wrap` dispatches through.
//!
//! The registry is **registry-first vocabulary**: each namespace is an immutable `static` table
//! of operations (canonical spelling, aliases, description, fn pointer), and a [`Registry`] is an
//! explicitly constructed, read-only mapping from [`Kind`] to those tables. Nothing here is
//! mutated after construction, so a registry is safe to share across threads without locking.
//!
//! ## Notes
//! - Namespaces are looked up, never constructed per call.
//! - [`Registry::standard`] returns the process-wide standard configuration, initialized once on
//!   first use. Custom configurations can be built with [`Registry::new`] and passed by
//!   reference to [`wrap`](crate::wrap::wrap).

use std::collections::HashMap;
use std::sync::LazyLock;

use kindred_core::{Kind, Value};
use tracing::debug;

use crate::errors::{OpError, UnsupportedTypeError};
use crate::ns;

/// Signature shared by every namespace operation: pure transform of a receiver plus auxiliary
/// arguments.
pub type OpFn = fn(&Value, &[Value]) -> Result<Value, OpError>;

/// Metadata for one namespace operation.
#[derive(Clone, Copy)]
pub struct OpInfo {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub run: OpFn,
}

impl OpInfo {
    fn matches(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}

/// An immutable collection of operations for one kind of value.
#[derive(Clone, Copy)]
pub struct Namespace {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub ops: &'static [OpInfo],
}

impl Namespace {
    /// Resolve an operation by canonical spelling or alias. Case-sensitive.
    pub fn op(&self, name: &str) -> Option<&'static OpInfo> {
        self.ops.iter().find(|op| op.matches(name))
    }

    /// Canonical operation names, in table order.
    pub fn op_names(&self) -> impl Iterator<Item = &'static str> {
        self.ops.iter().map(|op| op.canonical)
    }

    /// Invoke an operation with `receiver` as its first argument.
    pub fn call(&self, name: &str, receiver: &Value, args: &[Value]) -> Result<Value, OpError> {
        let op = self.op(name).ok_or_else(|| OpError::UnknownOperation {
            namespace: self.canonical,
            op: name.to_string(),
        })?;
        (op.run)(receiver, args)
    }

    fn matches(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}

/// Build an [`OpInfo`] entry for a namespace table.
pub const fn op(
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    run: OpFn,
) -> OpInfo {
    OpInfo {
        canonical,
        aliases,
        description,
        run,
    }
}

/// Kind bindings of the standard configuration.
///
/// `Mth` carries no binding (its receivers are plain numbers, which dispatch to `Num`); it is
/// reachable through [`Registry::namespace`] instead. `function`, `map`, `null`, `set`, `symbol`
/// and `undefined` values deliberately have no namespace: wrapping them reports
/// [`UnsupportedTypeError`].
pub static STANDARD_BINDINGS: &[(Kind, &Namespace)] = &[
    (Kind::Array, &ns::arrays::ARR),
    (Kind::Boolean, &ns::booleans::BOOL),
    (Kind::Date, &ns::dates::DTE),
    (Kind::Number, &ns::numbers::NUM),
    (Kind::Object, &ns::objects::OBJ),
    (Kind::RegExp, &ns::regx::REGX),
    (Kind::String, &ns::strings::STR),
];

/// Namespaces of the standard configuration that are not bound to a kind.
pub static STANDARD_UNBOUND: &[&Namespace] = &[&ns::math::MTH];

/// A read-only kind → namespace configuration.
pub struct Registry {
    bound: Vec<(Kind, &'static Namespace)>,
    by_kind: HashMap<Kind, &'static Namespace>,
    unbound: Vec<&'static Namespace>,
}

impl Registry {
    /// Build a configuration from explicit bindings.
    ///
    /// Later bindings for the same kind replace earlier ones.
    pub fn new(bound: &[(Kind, &'static Namespace)], unbound: &[&'static Namespace]) -> Self {
        let by_kind = bound.iter().copied().collect();
        let registry = Registry {
            bound: bound.to_vec(),
            by_kind,
            unbound: unbound.to_vec(),
        };
        debug!(
            bound = registry.bound.len(),
            unbound = registry.unbound.len(),
            "constructed namespace registry"
        );
        registry
    }

    /// The process-wide standard configuration, initialized once on first use and read-only
    /// thereafter.
    pub fn standard() -> &'static Registry {
        static STANDARD: LazyLock<Registry> =
            LazyLock::new(|| Registry::new(STANDARD_BINDINGS, STANDARD_UNBOUND));
        &STANDARD
    }

    /// Resolve the namespace bound to `kind`, if any.
    pub fn lookup(&self, kind: Kind) -> Option<&'static Namespace> {
        self.by_kind.get(&kind).copied()
    }

    /// Resolve the namespace bound to `kind`, reporting the kind on failure.
    pub fn resolve(&self, kind: Kind) -> Result<&'static Namespace, UnsupportedTypeError> {
        self.lookup(kind).ok_or(UnsupportedTypeError(kind))
    }

    /// All namespaces in this configuration: bound ones in binding order, then unbound ones.
    pub fn namespaces(&self) -> impl Iterator<Item = &'static Namespace> + '_ {
        self.bound
            .iter()
            .map(|(_, namespace)| *namespace)
            .chain(self.unbound.iter().copied())
    }

    /// Kind bindings in binding order.
    pub fn bindings(&self) -> impl Iterator<Item = (Kind, &'static Namespace)> + '_ {
        self.bound.iter().copied()
    }

    /// Resolve a namespace by its own canonical spelling or alias (e.g. `"Arr"` / `"array"`).
    pub fn namespace(&self, name: &str) -> Option<&'static Namespace> {
        self.namespaces().find(|namespace| namespace.matches(name))
    }
}
