//! Error taxonomy for the toolkit's public surface.
//!
//! Three independent surfaces, three error types:
//! - [`UnsupportedTypeError`] — `wrap` found no namespace for the observed kind.
//! - [`FormatError`] — `printf` directive/argument mismatch.
//! - [`OpError`] — a namespace operation was invoked with the wrong name, receiver or arguments.
//!
//! Classification and escaping are total and have no error type. Every variant carries the
//! offending name/index/kind so a caller can diagnose without re-deriving context. All errors are
//! raised synchronously to the immediate caller; the library never retries or recovers.

use kindred_core::Kind;
use thiserror::Error;

/// No namespace is registered for the observed kind.
///
/// Reportable, non-fatal: callers decide whether a value of this kind was ever meant to be
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no namespace registered for values of kind `{0}`")]
pub struct UnsupportedTypeError(pub Kind);

/// A `printf` template could not be rendered against its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// More directives than arguments; `index` is the argument slot that was missing.
    #[error("directive `%{conversion}` has no argument to render (argument {index} missing)")]
    MissingArgument { conversion: char, index: usize },

    /// A numeric-only directive met a non-number argument.
    #[error("directive `%{conversion}` requires a number, argument {index} is of kind `{actual}`")]
    WrongKind {
        conversion: char,
        index: usize,
        actual: Kind,
    },

    /// An integral rendering met NaN or an infinity.
    #[error("directive `%{conversion}` requires a finite number, argument {index} is not")]
    NotFinite { conversion: char, index: usize },

    /// `%c` met a number that is not a valid code point.
    #[error("argument {index} is not a renderable character code point")]
    BadCodePoint { index: usize },

    /// The conversion character is not part of the directive grammar.
    #[error("unknown conversion `%{found}` at byte {at}")]
    UnknownConversion { found: char, at: usize },

    /// The template ended in the middle of a directive.
    #[error("template ends inside a directive (started at byte {at})")]
    Incomplete { at: usize },
}

/// A namespace operation could not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    #[error("namespace `{namespace}` has no operation named `{op}`")]
    UnknownOperation { namespace: &'static str, op: String },

    #[error("operation `{op}` expects a {expected} receiver, got {actual}")]
    WrongReceiver {
        op: &'static str,
        expected: Kind,
        actual: Kind,
    },

    #[error("operation `{op}` expects {expected} argument(s), got {got}")]
    Arity {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("operation `{op}` argument {index} must be of kind {expected}, got {actual}")]
    WrongArgument {
        op: &'static str,
        index: usize,
        expected: Kind,
        actual: Kind,
    },

    #[error("operation `{op}` could not compile the pattern: {message}")]
    BadPattern { op: &'static str, message: String },

    #[error("operation `{op}`: {message}")]
    OutOfRange { op: &'static str, message: String },
}

/// JSON text could not be parsed into a value.
#[derive(Debug, Error)]
#[error("invalid JSON: {0}")]
pub struct JsonError(#[from] pub serde_json::Error);
