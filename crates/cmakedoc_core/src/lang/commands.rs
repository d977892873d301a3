//! Define the CMake commands that carry meaning for documentation extraction.
//!
//! This module is the single source of truth for recognized command spellings: a stable identifier
//! ([`CommandId`]) plus a const metadata table ([`COMMANDS`]) that records canonical spellings, the role a
//! command plays for the analyzer, provenance, and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive**, because CMake command names are.
//! - Every command that is not listed here is "ordinary" as far as the analyzer is concerned.
//!
//! ## Examples
//! ```rust
//! use cmakedoc_core::lang::commands::{self, CallableKind, CommandId, CommandRole};
//!
//! assert_eq!(commands::from_str("Macro"), Some(CommandId::Macro));
//! assert_eq!(commands::role(CommandId::EndMacro), CommandRole::ClosesBlock(CallableKind::Macro));
//! ```

use super::registry::{CMakeVersion, Example, Stability};

/// Stable identifier for every recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Function,
    EndFunction,
    Macro,
    EndMacro,
    Set,
    CmakeParseArguments,
}

/// The two kinds of user-defined callable blocks.
///
/// ## Notes
/// - A `function` body runs in a fresh variable scope; a `macro` body runs in the caller's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CallableKind {
    Function,
    Macro,
}

impl CallableKind {
    /// Spelling used in rendered docs (`function` / `macro`).
    pub fn as_str(self) -> &'static str {
        match self {
            CallableKind::Function => "function",
            CallableKind::Macro => "macro",
        }
    }

    /// Whether the body executes in its own variable scope.
    pub fn is_scoped(self) -> bool {
        matches!(self, CallableKind::Function)
    }
}

impl std::fmt::Display for CallableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the analyzer does with a recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandRole {
    /// Starts a callable block (`function(...)`, `macro(...)`).
    OpensBlock(CallableKind),
    /// Ends a callable block (`endfunction(...)`, `endmacro(...)`).
    ClosesBlock(CallableKind),
    /// Single-target variable assignment (`set(VAR values...)`).
    Assignment,
    /// The named-argument-parsing primitive (`cmake_parse_arguments(...)`).
    ArgumentParsing,
}

/// Metadata for a recognized command.
///
/// ## Notes
/// - `canonical` is the lowercase spelling CMake documents; any casing resolves to it.
/// - `since` is the first CMake release that ships the command as a builtin.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub id: CommandId,
    pub canonical: &'static str,
    pub role: CommandRole,
    pub description: &'static str,
    pub since: Option<CMakeVersion>,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all recognized commands.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        id: CommandId::Function,
        canonical: "function",
        role: CommandRole::OpensBlock(CallableKind::Function),
        description: "Start recording a function; the body runs in a new variable scope.",
        since: None,
        stability: Stability::Stable,
        examples: &[Example {
            code: "function(add_tool name)",
            note: Some("The first argument names the function; the rest are positional parameters."),
        }],
    },
    CommandInfo {
        id: CommandId::EndFunction,
        canonical: "endfunction",
        role: CommandRole::ClosesBlock(CallableKind::Function),
        description: "End a function block.",
        since: None,
        stability: Stability::Stable,
        examples: &[],
    },
    CommandInfo {
        id: CommandId::Macro,
        canonical: "macro",
        role: CommandRole::OpensBlock(CallableKind::Macro),
        description: "Start recording a macro; the body runs in the caller's variable scope.",
        since: None,
        stability: Stability::Stable,
        examples: &[],
    },
    CommandInfo {
        id: CommandId::EndMacro,
        canonical: "endmacro",
        role: CommandRole::ClosesBlock(CallableKind::Macro),
        description: "End a macro block.",
        since: None,
        stability: Stability::Stable,
        examples: &[],
    },
    CommandInfo {
        id: CommandId::Set,
        canonical: "set",
        role: CommandRole::Assignment,
        description: "Assign a value list to a variable.",
        since: None,
        stability: Stability::Stable,
        examples: &[Example {
            code: "set(options QUIET VERBOSE)",
            note: Some("Later `${options}` references resolve to `QUIET;VERBOSE`."),
        }],
    },
    CommandInfo {
        id: CommandId::CmakeParseArguments,
        canonical: "cmake_parse_arguments",
        role: CommandRole::ArgumentParsing,
        description: "Declare options, one-value and multi-value keywords and parse them into `<prefix>_<KEY>`.",
        since: Some("3.5"),
        stability: Stability::Stable,
        examples: &[
            Example {
                code: "cmake_parse_arguments(ARG \"QUIET\" \"DESTINATION\" \"FILES\" ${ARGN})",
                note: None,
            },
            Example {
                code: "cmake_parse_arguments(PARSE_ARGV 1 ARG \"QUIET\" \"DESTINATION\" \"FILES\")",
                note: Some("The `PARSE_ARGV` signature (CMake 3.7) reads arguments starting at the given index."),
            },
        ],
    },
];

/// Canonical spelling.
pub fn as_str(id: CommandId) -> &'static str {
    info_for(id).canonical
}

/// Analyzer role.
pub fn role(id: CommandId) -> CommandRole {
    info_for(id).role
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: CommandId) -> &'static CommandInfo {
    COMMANDS
        .iter()
        .find(|c| c.id == id)
        .expect("INVARIANT: every CommandId has a registry entry")
}

/// Lookup by spelling, ignoring ASCII case.
///
/// ## Returns
/// - `Some(CommandId)` if the spelling names a recognized command.
/// - `None` for every other command.
pub fn from_str(s: &str) -> Option<CommandId> {
    COMMANDS
        .iter()
        .find(|c| c.canonical.eq_ignore_ascii_case(s))
        .map(|c| c.id)
}
