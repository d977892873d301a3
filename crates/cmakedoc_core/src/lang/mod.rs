//! CMake vocabulary registries.
//!
//! The design goal is to avoid stringly-typed checks scattered across the analyzer and renderer.
//! Callers resolve a command spelling once into a stable [`commands::CommandId`] and match on it.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - CMake command names are case-insensitive, so lookups fold case; variable names are not, so conventions
//!   that build variable names never fold case.
//!
//! ## Examples
//! ```rust
//! use cmakedoc_core::lang::commands::{self, CommandId};
//!
//! assert_eq!(commands::from_str("ENDFUNCTION"), Some(CommandId::EndFunction));
//! assert_eq!(commands::as_str(CommandId::Set), "set");
//! ```

pub mod commands;
pub mod conventions;
pub mod registry;
