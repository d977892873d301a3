//! Shareable metadata for `cmakedoc_core::lang` registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; recognition rules live in the analyzer.

/// Identify the CMake release a command (or command signature) first appeared in.
///
/// ## Examples
/// ```rust
/// use cmakedoc_core::lang::registry::CMakeVersion;
///
/// let since: CMakeVersion = "3.5";
/// assert!(since.starts_with('3'));
/// ```
pub type CMakeVersion = &'static str;

/// Describe how much the analyzer relies on a vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    /// Part of the language since the first supported release.
    Stable,
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use cmakedoc_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "set(OPTIONS QUIET VERBOSE)",
///     note: Some("Records a literal list."),
/// };
/// assert!(ex.code.starts_with("set"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
