//! Provide the canonical CMake vocabulary shared by the cmakedoc syntax frontend, analyzer and renderer.
//!
//! This crate is intentionally small and dependency-light. It answers two questions for its callers:
//! - which command spellings carry meaning for documentation extraction (`function`, `endmacro`, `set`,
//!   `cmake_parse_arguments`, ...), and
//! - which naming conventions the analyzer and renderer rely on (validation-call suffix, list separator,
//!   private-name prefix).
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no AST types.
//! - The optional `serde` feature derives `Serialize` for the public enums so result types in dependent crates can be
//!   serialized.

pub mod lang;
