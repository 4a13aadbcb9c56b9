//! Provide the shared, pure semantic core for the kindred toolkit.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the toolkit's public surface (namespaces, registry, formatter) builds on, and
//! - callers can use directly when they only need the value model.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no registry types.
//! - Current scope: the dynamic [`Value`] model, the closed [`Kind`] vocabulary and classifier,
//!   the regex-metacharacter escaping kernel, and number rendering policy.

pub mod escape;
pub mod kind;
pub mod num;
pub mod value;

pub use escape::{REGEX_METACHARACTERS, escape_str, is_metacharacter};
pub use kind::{Kind, kind_of};
pub use value::Value;
