//! CLI harness for the toolkit.
//!
//! ## Commands
//!
//! - `kind <JSON>` - Parse a JSON value and print its kind
//! - `escape <TEXT>` - Escape regex metacharacters in literal text
//! - `format <TEMPLATE> [JSON...]` - Render a printf template against JSON arguments
//! - `ops [NAMESPACE]` - List registry namespaces, or one namespace's operations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command functions return
//! `CliResult<T>` instead of calling `process::exit`; only the top-level [`run`] function
//! handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};
use kindred_core::Value;

use crate::json;
use crate::printf::printf;
use crate::registry::Registry;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point catches these errors,
/// prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The kindred value toolkit
#[derive(Parser, Debug)]
#[command(name = "kindred")]
#[command(version = VERSION)]
#[command(about = "Kind-dispatched dynamic value toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a JSON value and print its kind
    Kind {
        /// The value, as JSON text (e.g. '"text"', '[1,2]', 'null')
        value: String,
    },
    /// Escape regex metacharacters in literal text
    Escape {
        /// Literal text to escape
        text: String,
    },
    /// Render a printf template against JSON arguments
    Format {
        /// Template with %-directives
        template: String,
        /// Arguments, each as JSON text
        args: Vec<String>,
    },
    /// List registry namespaces, or one namespace's operations
    Ops {
        /// Namespace spelling (e.g. Arr, Str, regx)
        namespace: Option<String>,
    },
}

/// Top-level CLI entry point: parse arguments, dispatch, print errors, exit.
pub fn run() {
    let cli = Cli::parse();
    match dispatch(&cli.command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(err.exit_code.0);
        }
    }
}

fn dispatch(command: &Command) -> CliResult<String> {
    match command {
        Command::Kind { value } => cmd_kind(value),
        Command::Escape { text } => cmd_escape(text),
        Command::Format { template, args } => cmd_format(template, args),
        Command::Ops { namespace } => cmd_ops(namespace.as_deref()),
    }
}

fn parse_value(text: &str) -> CliResult<Value> {
    json::from_json(text).map_err(|err| CliError::failure(format!("{err} (input: {text})")))
}

fn cmd_kind(value: &str) -> CliResult<String> {
    let value = parse_value(value)?;
    Ok(value.kind().to_string())
}

fn cmd_escape(text: &str) -> CliResult<String> {
    Ok(kindred_core::escape::escape_str(text))
}

fn cmd_format(template: &str, args: &[String]) -> CliResult<String> {
    let args = args
        .iter()
        .map(|arg| parse_value(arg))
        .collect::<CliResult<Vec<_>>>()?;
    printf(template, &args).map_err(|err| CliError::failure(err.to_string()))
}

fn cmd_ops(namespace: Option<&str>) -> CliResult<String> {
    let registry = Registry::standard();
    let mut lines = Vec::new();
    match namespace {
        Some(name) => {
            let namespace = registry
                .namespace(name)
                .ok_or_else(|| CliError::failure(format!("no namespace named `{name}`")))?;
            lines.push(format!("{} - {}", namespace.canonical, namespace.description));
            for op in namespace.ops {
                lines.push(format!("  {:<12} {}", op.canonical, op.description));
            }
        }
        None => {
            for (kind, namespace) in registry.bindings() {
                lines.push(format!("{:<6} (kind: {kind}) - {}", namespace.canonical, namespace.description));
            }
            for namespace in registry.namespaces() {
                if registry.bindings().all(|(_, bound)| !std::ptr::eq(bound, namespace)) {
                    lines.push(format!(
                        "{:<6} (unbound) - {}",
                        namespace.canonical, namespace.description
                    ));
                }
            }
        }
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_command_classifies_json_input() {
        assert_eq!(cmd_kind("\"text\"").ok(), Some("string".to_string()));
        assert_eq!(cmd_kind("[1,2]").ok(), Some("array".to_string()));
        assert_eq!(cmd_kind("null").ok(), Some("null".to_string()));
    }

    #[test]
    fn escape_command_escapes_literal_text() {
        assert_eq!(cmd_escape("[foo]").ok(), Some("\\[foo\\]".to_string()));
    }

    #[test]
    fn format_command_renders_json_arguments() {
        let out = cmd_format("%s + %d", &["\"a\"".to_string(), "2".to_string()]);
        assert_eq!(out.ok(), Some("a + 2".to_string()));
    }

    #[test]
    fn ops_command_lists_a_namespace() {
        let listed = cmd_ops(Some("RegX")).ok();
        assert!(listed.is_some_and(|out| out.contains("escape")));
        let missing = cmd_ops(Some("Nope")).err();
        assert!(missing.is_some_and(|err| err.message.contains("Nope")));
    }
}
