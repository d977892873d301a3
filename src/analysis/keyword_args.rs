//! Keyword argument resolution
//!
//! CMake has no declared keyword parameters. Callables accept them through the idiom
//!
//! ```cmake
//! set(options QUIET)
//! set(one_value DESTINATION)
//! set(multi_value FILES)
//! cmake_parse_arguments(ARG "${options}" "${one_value}" "${multi_value}" ${ARGN})
//! ```
//!
//! which this module reverses: it replays the `set(...)` assignments of a body in order and resolves each
//! `cmake_parse_arguments` call into a [`KeywordArgSpec`]. Whether a key is mandatory is decided by a pluggable
//! [`RequirednessHeuristic`].

use std::collections::{HashMap, HashSet};

use cmakedoc_core::lang::commands::{self, CommandId};
use cmakedoc_core::lang::conventions::{self, LIST_SEPARATOR, PARSE_ARGV_KEYWORD};
use cmakedoc_syntax::ast::{CommandInvocation, Node};

use super::{KeywordArgSpec, ListSource, ListSources};

// ============================================================================
// Requiredness
// ============================================================================

/// Decides which parsed keys a callable requires.
///
/// One instance serves exactly one callable body. It sees every command of the body in order, before the command
/// is interpreted otherwise, and is then asked about the keys of each `cmake_parse_arguments` call.
pub trait RequirednessHeuristic {
    /// Take note of `cmd`. Returns `true` if the command was consumed as evidence and needs no further
    /// interpretation.
    fn observe(&mut self, cmd: &CommandInvocation) -> bool;

    /// Whether `key`, parsed under `prefix`, is required given the evidence seen so far.
    fn is_required(&self, prefix: &str, key: &str) -> bool;
}

/// Marks `<prefix>_<KEY>` as required once a `*check_var_defined(<prefix>_<KEY>)` call has been seen.
///
/// ## Notes
/// - Only calls that precede the `cmake_parse_arguments` call count.
/// - Any command whose lowercased name ends in `check_var_defined` is accepted, so an unrelated helper with that
///   suffix is also taken as a validation call.
#[derive(Debug, Default)]
pub struct ValidationCallHeuristic {
    validated: HashSet<String>,
}

impl RequirednessHeuristic for ValidationCallHeuristic {
    fn observe(&mut self, cmd: &CommandInvocation) -> bool {
        if !conventions::is_validation_call(&cmd.name) {
            return false;
        }
        match cmd.arg(0) {
            Some(variable) => {
                self.validated.insert(strip_quotes(variable).to_string());
                true
            }
            None => false,
        }
    }

    fn is_required(&self, prefix: &str, key: &str) -> bool {
        self.validated.contains(&conventions::parsed_variable_name(prefix, key))
    }
}

/// Never marks anything as required.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRequiredKeys;

impl RequirednessHeuristic for NoRequiredKeys {
    fn observe(&mut self, _cmd: &CommandInvocation) -> bool {
        false
    }

    fn is_required(&self, _prefix: &str, _key: &str) -> bool {
        false
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Variable name to its most recent value list, local to one body.
type Assignments = HashMap<String, Vec<String>>;

/// Resolve every `cmake_parse_arguments` call in `body`, in source order.
///
/// `body` is the node slice strictly between a callable's opener and closer; nested blocks are included and
/// processed in the same pass. `heuristic` should be fresh for each body.
pub fn resolve_keyword_specs(body: &[Node], heuristic: &mut dyn RequirednessHeuristic) -> Vec<KeywordArgSpec> {
    let mut assignments = Assignments::new();
    let mut specs = Vec::new();

    for cmd in body.iter().filter_map(Node::as_command) {
        if heuristic.observe(cmd) {
            continue;
        }
        match commands::from_str(&cmd.name) {
            Some(CommandId::Set) => record_assignment(cmd, &mut assignments),
            Some(CommandId::CmakeParseArguments) => match parse_arguments_call(cmd, &assignments, heuristic) {
                Some(spec) => specs.push(spec),
                None => tracing::debug!(line = cmd.line, "skipping cmake_parse_arguments call with too few arguments"),
            },
            Some(CommandId::Function | CommandId::EndFunction | CommandId::Macro | CommandId::EndMacro) | None => {}
        }
    }

    specs
}

/// `set(<name> <value>...)`: later assignments replace earlier ones.
///
/// Values are stored as list elements, so `set(X "A;B")` and `set(X A B)` record the same list.
fn record_assignment(cmd: &CommandInvocation, assignments: &mut Assignments) {
    let Some((target, values)) = cmd.arguments.split_first() else {
        return;
    };
    let elements = values.iter().flat_map(|arg| split_list(strip_quotes(&arg.value))).collect();
    assignments.insert(target.value.clone(), elements);
}

/// Resolve one `cmake_parse_arguments` call.
///
/// Handles both `cmake_parse_arguments(<prefix> <opts> <one> <multi> <args>...)` and
/// `cmake_parse_arguments(PARSE_ARGV <N> <prefix> <opts> <one> <multi>)`. Returns `None` when the call is too
/// short to carry all three lists.
fn parse_arguments_call(
    cmd: &CommandInvocation,
    assignments: &Assignments,
    heuristic: &dyn RequirednessHeuristic,
) -> Option<KeywordArgSpec> {
    let args: Vec<&str> = cmd.arguments.iter().map(|a| a.value.as_str()).collect();
    let rest = match args.first() {
        Some(&first) if first == PARSE_ARGV_KEYWORD => args.get(2..)?,
        _ => &args[..],
    };
    let [prefix, options, single_value, multi_value, ..] = rest else {
        return None;
    };

    let prefix = strip_quotes(prefix).to_string();
    let (options, options_source) = resolve_list(options, assignments);
    let (single_value_keys, single_value_source) = resolve_list(single_value, assignments);
    let (multi_value_keys, multi_value_source) = resolve_list(multi_value, assignments);

    let required = |keys: &[String]| -> Vec<String> {
        keys.iter().filter(|key| heuristic.is_required(&prefix, key)).cloned().collect()
    };

    Some(KeywordArgSpec {
        required_options: required(&options),
        required_single_value_keys: required(&single_value_keys),
        required_multi_value_keys: required(&multi_value_keys),
        prefix: prefix.clone(),
        options,
        single_value_keys,
        multi_value_keys,
        sources: ListSources {
            options: options_source,
            single_value: single_value_source,
            multi_value: multi_value_source,
        },
    })
}

/// Turn one list argument into its keys.
fn resolve_list(token: &str, assignments: &Assignments) -> (Vec<String>, ListSource) {
    let text = strip_quotes(token.trim());
    if text.is_empty() || text == "\"\"" || text == "''" {
        return (Vec::new(), ListSource::EmptyLiteral);
    }

    if let Some(name) = variable_reference(text) {
        let value = assignments.get(name);
        if value.is_none() {
            tracing::debug!(variable = name, "key list refers to a variable with no prior set() in this body");
        }
        let source = ListSource::Variable {
            name: name.to_string(),
            resolved: value.is_some(),
        };
        return (value.cloned().unwrap_or_default(), source);
    }

    (split_list(text), ListSource::Literal)
}

/// `NAME` if `text` is exactly `${NAME}`.
fn variable_reference(text: &str) -> Option<&str> {
    let name = text.strip_prefix("${")?.strip_suffix('}')?;
    (!name.is_empty() && !name.contains('}')).then_some(name)
}

/// Remove one layer of matching `"` or `'` quotes.
fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open @ (b'"' | b'\'')), Some(&close)) if bytes.len() >= 2 && open == close => &text[1..text.len() - 1],
        _ => text,
    }
}

fn split_list(text: &str) -> Vec<String> {
    text.split(LIST_SEPARATOR)
        .filter(|element| !element.is_empty())
        .map(str::to_string)
        .collect()
}
