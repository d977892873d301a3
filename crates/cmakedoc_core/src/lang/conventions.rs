//! Shared naming conventions (well-known spellings that are not commands).

/// Suffix that identifies a "validate variable is defined" helper, e.g. `mylib_check_var_defined(ARG_NAME)`.
///
/// Matched against the lowercased command name, so any project prefix and any casing is accepted.
pub const VALIDATION_CALL_SUFFIX: &str = "check_var_defined";

/// Separator between the items of a CMake list (`"A;B;C"`).
pub const LIST_SEPARATOR: char = ';';

/// Keyword that selects the `cmake_parse_arguments(PARSE_ARGV <N> ...)` signature.
pub const PARSE_ARGV_KEYWORD: &str = "PARSE_ARGV";

/// Callables whose name starts with this prefix are internal helpers and are hidden from generated docs.
pub const PRIVATE_NAME_PREFIX: &str = "_";

/// Parameter name that conventionally takes a target visibility keyword.
pub const VISIBILITY_PARAMETER: &str = "visibility";

/// Synopsis placeholder rendered for [`VISIBILITY_PARAMETER`].
pub const VISIBILITY_PLACEHOLDER: &str = "<PRIVATE|PUBLIC|INTERFACE>";

/// Whether a command name follows the validation-call convention.
///
/// ## Notes
/// - This is a naming-convention signal, not proof: any command ending in the suffix matches.
pub fn is_validation_call(command_name: &str) -> bool {
    command_name.to_ascii_lowercase().ends_with(VALIDATION_CALL_SUFFIX)
}

/// Variable that `cmake_parse_arguments(<prefix> ...)` writes a parsed keyword into: `<prefix>_<KEY>`.
pub fn parsed_variable_name(prefix: &str, key: &str) -> String {
    format!("{prefix}_{key}")
}

/// Whether a callable name marks an internal helper.
pub fn is_private_name(name: &str) -> bool {
    name.starts_with(PRIVATE_NAME_PREFIX)
}
