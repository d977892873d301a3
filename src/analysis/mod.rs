//! Static analysis of CMake scripts for documentation
//!
//! Given the flat node sequence produced by `cmakedoc_syntax`, this module discovers every `function` and
//! `macro` block, attaches the comment block written right above it, and reconstructs the keyword arguments
//! the block accepts from its `cmake_parse_arguments(...)` calls.
//!
//! ## Module Structure
//!
//! - `scope` - matches block openers with closers, tolerating unbalanced input
//! - `doc_block` - collects the documentation comment above a block
//! - `keyword_args` - resolves `cmake_parse_arguments` calls into [`KeywordArgSpec`]s
//! - `registry` - drives discovery and resolution and owns the result
//!
//! ## Error policy
//!
//! Analysis never fails. Unbalanced blocks, unknown variables and short `cmake_parse_arguments` calls all
//! degrade to a best-effort result; an empty result is a valid outcome.

mod doc_block;
mod keyword_args;
mod registry;
mod scope;

use serde::Serialize;

pub use cmakedoc_core::lang::commands::CallableKind;
pub use cmakedoc_syntax::ast::Node;
pub use doc_block::extract_doc_block;
pub use keyword_args::{NoRequiredKeys, RequirednessHeuristic, ValidationCallHeuristic, resolve_keyword_specs};

use cmakedoc_syntax::diagnostics::SyntaxError;
use cmakedoc_syntax::{lexer, parser};

// ============================================================================
// Result types
// ============================================================================

/// A discovered `function` or `macro` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callable {
    pub kind: CallableKind,
    /// Name as written (case preserved)
    pub name: String,
    /// Positional parameters after the name, possibly empty
    pub declared_parameters: Vec<String>,
    /// Comment block directly above the opener, markers stripped; empty if there is none
    pub documentation: String,
    /// 1-based line of the opening command
    pub source_line: usize,
    pub keyword_specs: Vec<KeywordArgSpec>,
    #[serde(skip)]
    pub(crate) body_range: BodyRange,
}

/// Half-open range of node indices: the opener at `start`, the closer (or end of script) at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BodyRange {
    pub start: usize,
    pub end: usize,
}

impl BodyRange {
    /// Nodes strictly between the opener and the closer.
    pub fn body<'a>(&self, nodes: &'a [Node]) -> &'a [Node] {
        let end = self.end.min(nodes.len());
        let start = (self.start + 1).min(end);
        &nodes[start..end]
    }
}

/// One resolved `cmake_parse_arguments(<prefix> <options> <one_value> <multi_value> ...)` call.
///
/// ## Notes
/// - Key order follows the source; duplicates and keys shared between categories are kept as written.
/// - Every `required_*` key also appears in the matching full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordArgSpec {
    pub prefix: String,
    pub options: Vec<String>,
    pub single_value_keys: Vec<String>,
    pub multi_value_keys: Vec<String>,
    pub required_options: Vec<String>,
    pub required_single_value_keys: Vec<String>,
    pub required_multi_value_keys: Vec<String>,
    pub sources: ListSources,
}

/// Where each of the three key lists of a [`KeywordArgSpec`] came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSources {
    pub options: ListSource,
    pub single_value: ListSource,
    pub multi_value: ListSource,
}

/// How a key-list argument was resolved.
///
/// An explicit empty literal and an unknown variable both produce an empty list; this keeps them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListSource {
    /// `""`, `''` or nothing at all
    EmptyLiteral,
    /// `"A;B;C"` or `A`
    Literal,
    /// `${NAME}`; `resolved` is false when no `set(NAME ...)` preceded the call in the same body
    Variable { name: String, resolved: bool },
}

// ============================================================================
// Configuration
// ============================================================================

/// Which requiredness heuristic the analysis runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requiredness {
    /// Keys validated by a `*check_var_defined(<prefix>_<KEY>)` call are required
    #[default]
    ValidationCalls,
    /// Never mark keys as required
    Disabled,
}

impl Requiredness {
    /// Fresh heuristic state for one callable body.
    pub fn heuristic(self) -> Box<dyn RequirednessHeuristic> {
        match self {
            Requiredness::ValidationCalls => Box::new(ValidationCallHeuristic::default()),
            Requiredness::Disabled => Box::new(NoRequiredKeys),
        }
    }
}

/// Analysis options
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub requiredness: Requiredness,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the requiredness heuristic on or off
    pub fn with_required_heuristic(mut self, enabled: bool) -> Self {
        self.requiredness = if enabled {
            Requiredness::ValidationCalls
        } else {
            Requiredness::Disabled
        };
        self
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Discover and describe every callable in a parsed script, with default options.
pub fn analyze(nodes: &[Node]) -> Vec<Callable> {
    analyze_with_config(nodes, &AnalysisConfig::default())
}

/// Discover and describe every callable in a parsed script.
#[tracing::instrument(skip_all, fields(node_count = nodes.len()))]
pub fn analyze_with_config(nodes: &[Node], config: &AnalysisConfig) -> Vec<Callable> {
    registry::CallableRegistry::new(nodes).discover().resolve(config).into_callables()
}

/// Lex, parse and analyze a source string.
///
/// ## Errors
/// Returns the lexer's or parser's errors if the source is not well-formed CMake.
pub fn analyze_source(source: &str, config: &AnalysisConfig) -> Result<Vec<Callable>, Vec<SyntaxError>> {
    let tokens = lexer::lex(source)?;
    let script = parser::parse(&tokens)?;
    Ok(analyze_with_config(&script.nodes, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_str(source: &str) -> Vec<Callable> {
        analyze_source(source, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_end_to_end_function_with_keywords() {
        let source = r#"
# Install a set of files.
#
# Files are copied verbatim.
function(install_files target)
  set(options QUIET)
  set(one_value DESTINATION)
  set(multi_value FILES)
  cmake_parse_arguments(ARG "${options}" "${one_value}" "${multi_value}" ${ARGN})
  mylib_check_var_defined(ARG_DESTINATION)
endfunction()
"#;
        let callables = analyze_str(source);
        assert_eq!(callables.len(), 1);
        let c = &callables[0];
        assert_eq!(c.kind, CallableKind::Function);
        assert_eq!(c.name, "install_files");
        assert_eq!(c.declared_parameters, vec!["target"]);
        assert_eq!(c.documentation, "Install a set of files.\n\nFiles are copied verbatim.");
        assert_eq!(c.source_line, 5);
        assert_eq!(c.keyword_specs.len(), 1);

        let spec = &c.keyword_specs[0];
        assert_eq!(spec.prefix, "ARG");
        assert_eq!(spec.options, vec!["QUIET"]);
        assert_eq!(spec.single_value_keys, vec!["DESTINATION"]);
        assert_eq!(spec.multi_value_keys, vec!["FILES"]);
        // The validation call comes after the parse call, so it is not seen in time.
        assert!(spec.required_single_value_keys.is_empty());
    }

    #[test]
    fn test_validation_before_parse_marks_required() {
        let source = r#"
macro(configure)
  check_var_defined(CFG_NAME)
  cmake_parse_arguments(CFG "" "NAME;VERSION" "")
endmacro()
"#;
        let callables = analyze_str(source);
        let spec = &callables[0].keyword_specs[0];
        assert_eq!(spec.single_value_keys, vec!["NAME", "VERSION"]);
        assert_eq!(spec.required_single_value_keys, vec!["NAME"]);
    }

    #[test]
    fn test_disabled_heuristic_marks_nothing_required() {
        let source = r#"
function(f)
  check_var_defined(P_A)
  cmake_parse_arguments(P "A" "" "")
endfunction()
"#;
        let config = AnalysisConfig::new().with_required_heuristic(false);
        let callables = analyze_source(source, &config).unwrap();
        let spec = &callables[0].keyword_specs[0];
        assert_eq!(spec.options, vec!["A"]);
        assert!(spec.required_options.is_empty());
    }

    #[test]
    fn test_body_range_slices_between_opener_and_closer() {
        let nodes = vec![
            Node::Command(cmakedoc_syntax::ast::CommandInvocation::new("a", vec![], 1)),
            Node::Command(cmakedoc_syntax::ast::CommandInvocation::new("b", vec![], 2)),
            Node::Command(cmakedoc_syntax::ast::CommandInvocation::new("c", vec![], 3)),
        ];
        let range = BodyRange { start: 0, end: 2 };
        assert_eq!(range.body(&nodes).len(), 1);
        let open_ended = BodyRange { start: 0, end: 3 };
        assert_eq!(open_ended.body(&nodes).len(), 2);
        let degenerate = BodyRange { start: 2, end: 2 };
        assert!(degenerate.body(&nodes).is_empty());
    }

    #[test]
    fn test_json_skips_body_range() {
        let callables = analyze_str("function(f a)\nendfunction()\n");
        let json = serde_json::to_value(&callables).unwrap();
        assert_eq!(json[0]["kind"], "function");
        assert_eq!(json[0]["name"], "f");
        assert!(json[0].get("body_range").is_none());
    }
}
