//! Prelude module for common imports.
//!
//! Import this to get the whole working surface at once:
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! let value = Value::str("a+b");
//! assert_eq!(kind_of(&value), Kind::String);
//! assert_eq!(escape(value), Value::str("a\\+b"));
//! ```

pub use kindred_core::escape::{REGEX_METACHARACTERS, escape_str, is_metacharacter};
pub use kindred_core::{Kind, Value, kind_of};

pub use crate::errors::{FormatError, JsonError, OpError, UnsupportedTypeError};
pub use crate::json::{from_json, to_json};
pub use crate::ns::regx::{escape, escape_regx};
pub use crate::printf::printf;
pub use crate::registry::{Namespace, OpInfo, Registry};
pub use crate::wrap::{AsValue, Wrapped, wrap};
