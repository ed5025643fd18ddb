//! CLI module for webidl-dts-gen
//!
//! This module provides the command-line interface.
//!
//! ## Usage
//!
//! - `webidl-dts-gen <FILE>` / `-i, --in <FILE>` - Convert a WebIDL file
//! - `-o, --out <FILE>` - Write declarations to a file instead of stdout
//! - `-e, --emscripten` - Emit the Emscripten runtime module
//! - `--lex <FILE>` / `--parse <FILE>` - Debug views of the frontend
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::backend::ConvertOptions;

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
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
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

/// Generate TypeScript declaration files (.d.ts) from WebIDL
#[derive(Parser, Debug)]
#[command(name = "webidl-dts-gen")]
#[command(version = VERSION)]
#[command(about = "Generate TypeScript declaration files (.d.ts) from WebIDL", long_about = None)]
pub struct Cli {
    /// WebIDL file to convert
    #[arg(value_name = "FILE", conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// WebIDL file to convert (alternative to the positional FILE)
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write declarations to FILE instead of stdout
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit an Emscripten runtime module and materialize enums as runtime constants
    #[arg(short = 'e', long = "emscripten")]
    pub emscripten: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "input"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with_all = ["file", "input"])]
    pub parse_file: Option<PathBuf>,
}

impl Cli {
    /// Conversion options selected on the command line.
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new().with_emscripten(self.emscripten)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    let options = cli.options();
    match cli.file.or(cli.input) {
        Some(input) => commands::convert_file(&input.to_string_lossy(), cli.output.as_deref(), options),
        None => {
            tracing::warn!("no input file given");
            Err(CliError::failure(
                "Error: no input file (pass FILE or --in FILE; see --help)",
            ))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_positional() {
        let cli = Cli::try_parse_from(["webidl-dts-gen", "api.idl"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("api.idl")));
        assert!(!cli.options().emscripten);
    }

    #[test]
    fn test_cli_parse_in_out_emscripten() {
        let cli = Cli::try_parse_from(["webidl-dts-gen", "-i", "api.idl", "-o", "api.d.ts", "-e"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("api.idl")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("api.d.ts")));
        assert!(cli.options().emscripten);

        let cli = Cli::try_parse_from(["webidl-dts-gen", "--in", "a.idl", "--out", "a.d.ts", "--emscripten"]).unwrap();
        assert!(cli.emscripten);
    }

    #[test]
    fn test_cli_rejects_two_inputs() {
        assert!(Cli::try_parse_from(["webidl-dts-gen", "a.idl", "--in", "b.idl"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["webidl-dts-gen", "--lex", "test.idl"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["webidl-dts-gen", "--parse", "test.idl"]).unwrap();
        assert!(cli.parse_file.is_some());

        assert!(Cli::try_parse_from(["webidl-dts-gen", "--lex", "a.idl", "b.idl"]).is_err());
    }

    #[test]
    fn test_execute_without_input_fails() {
        let cli = Cli::try_parse_from(["webidl-dts-gen"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("no input file"));
    }
}
