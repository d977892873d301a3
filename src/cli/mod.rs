//! CLI module for cmakedoc
//!
//! This module provides the command-line interface for the documentation generator.
//!
//! ## Usage
//!
//! - `cmakedoc [INPUT] [-o OUTPUT] [-t TITLE]` - Generate Markdown docs for a CMake file
//! - `cmakedoc INPUT --format json` - Dump the analysis result as JSON
//! - `cmakedoc --lex FILE` / `cmakedoc --parse FILE` - Print tokens / nodes (debug)
//! - `cmakedoc --list-commands` - Print the recognized command vocabulary
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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

use clap::{Parser, ValueEnum};

use crate::render::DEFAULT_TITLE;

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

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// GitHub-friendly Markdown reference
    #[default]
    Markdown,
    /// The raw analysis result
    Json,
}

/// Generate Markdown docs from CMake functions and macros
#[derive(Parser, Debug)]
#[command(name = "cmakedoc")]
#[command(version = VERSION)]
#[command(about = "Generate Markdown docs from CMake functions/macros (GitHub-friendly)", long_about = None)]
pub struct Cli {
    /// Input CMake file
    #[arg(value_name = "INPUT", default_value = "utils.cmake")]
    pub input: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "OUTPUT", default_value = "docs.md")]
    pub output: PathBuf,

    /// Document title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Also document callables whose name starts with `_`
    #[arg(long)]
    pub include_private: bool,

    /// Do not infer required keywords from `*check_var_defined` calls
    #[arg(long)]
    pub no_required_heuristic: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "lex_file")]
    pub parse_file: Option<PathBuf>,

    /// Print the commands the analyzer recognizes
    #[arg(long, conflicts_with_all = ["lex_file", "parse_file"])]
    pub list_commands: bool,
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
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }
    if cli.list_commands {
        return commands::list_commands();
    }

    let options = commands::GenerateOptions::from(&cli);
    commands::generate_docs(&cli.input, &cli.output, &options)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["cmakedoc"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("utils.cmake"));
        assert_eq!(cli.output, PathBuf::from("docs.md"));
        assert_eq!(cli.title, "CMake Documentation");
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert!(!cli.include_private);
        assert!(!cli.no_required_heuristic);
    }

    #[test]
    fn test_cli_parse_generate_options() {
        let cli = Cli::try_parse_from([
            "cmakedoc",
            "cmake/helpers.cmake",
            "-o",
            "out/api.md",
            "-t",
            "Helpers",
            "--include-private",
            "--no-required-heuristic",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("cmake/helpers.cmake"));
        assert_eq!(cli.output, PathBuf::from("out/api.md"));
        assert_eq!(cli.title, "Helpers");
        assert!(cli.include_private);
        assert!(cli.no_required_heuristic);
    }

    #[test]
    fn test_cli_parse_json_format() {
        let cli = Cli::try_parse_from(["cmakedoc", "x.cmake", "--format", "json", "--output", "x.json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.output, PathBuf::from("x.json"));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cmakedoc", "--format", "html"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["cmakedoc", "--lex", "a.cmake"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["cmakedoc", "--parse", "a.cmake"]).unwrap();
        assert!(cli.parse_file.is_some());

        assert!(Cli::try_parse_from(["cmakedoc", "--lex", "a.cmake", "--parse", "b.cmake"]).is_err());

        let cli = Cli::try_parse_from(["cmakedoc", "--list-commands"]).unwrap();
        assert!(cli.list_commands);
    }
}
