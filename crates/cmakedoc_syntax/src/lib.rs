//! CMake script frontend for cmakedoc: lexer, parser, AST, diagnostics.
//!
//! The parser produces a flat, ordered sequence of top-level nodes (command invocations, comments and blank lines).
//! It does not evaluate anything: variable references, generator expressions and quoting are kept exactly as written
//! so later stages can decide how to interpret them.
//!
//! ## Examples
//! ```rust,no_run
//! use cmakedoc_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("function(hello name)\nendfunction()\n").unwrap();
//! let script = parser::parse(&tokens).unwrap();
//! assert_eq!(script.nodes.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
