#![forbid(unsafe_code)]
//! cmakedoc: reference docs for CMake functions and macros
//!
//! Reads a CMake script, finds every `function` and `macro` definition, attaches the comment block above each
//! one, reconstructs the keyword arguments it accepts from its `cmake_parse_arguments(...)` calls, and renders
//! the result as a GitHub-friendly Markdown reference (or JSON).
//!
//! The CMake frontend lives in `cmakedoc_syntax`; the recognized command vocabulary in `cmakedoc_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a clear
//!   explanation.
//!
//! ## Examples
//!
//! ```rust
//! use cmakedoc::analysis::{AnalysisConfig, analyze_source};
//! use cmakedoc::render::{RenderConfig, render_markdown};
//!
//! let source = "# Prints a greeting.\nfunction(greet who)\n  message(\"hi ${who}\")\nendfunction()\n";
//! let callables = analyze_source(source, &AnalysisConfig::default()).unwrap();
//! assert_eq!(callables[0].name, "greet");
//!
//! let md = render_markdown(&callables, "greet.cmake", &RenderConfig::default());
//! assert!(md.contains("greet(<who>)"));
//! ```

pub mod analysis;
pub mod cli;
pub mod render;

pub use cmakedoc_syntax::{ast, diagnostics, lexer, parser};

pub use analysis::{AnalysisConfig, Callable, KeywordArgSpec, analyze, analyze_source, analyze_with_config};
pub use render::{RenderConfig, render_command_reference, render_json, render_markdown};
