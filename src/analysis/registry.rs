//! Callable discovery
//!
//! Walks the node sequence once to find every `function`/`macro` opener, records its name, parameters,
//! documentation and body range, then resolves the keyword arguments of each body.

use cmakedoc_core::lang::commands::{self, CommandRole};
use cmakedoc_syntax::ast::Node;

use super::doc_block::extract_doc_block;
use super::keyword_args::resolve_keyword_specs;
use super::scope::ScopeTracker;
use super::{AnalysisConfig, BodyRange, Callable};

/// Owns the callables found in one script while they are being built.
pub(crate) struct CallableRegistry<'a> {
    nodes: &'a [Node],
    callables: Vec<Callable>,
}

impl<'a> CallableRegistry<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            nodes,
            callables: Vec::new(),
        }
    }

    /// Record every opener and match closers to set body ranges.
    ///
    /// An opener without arguments has no name and is skipped entirely, so its closer has nothing to match and is
    /// ignored (or closes an outer block of the same kind). A block that is never closed runs to the end of the
    /// script.
    pub fn discover(mut self) -> Self {
        let mut scope = ScopeTracker::new();

        for (index, node) in self.nodes.iter().enumerate() {
            let Some(cmd) = node.as_command() else {
                continue;
            };
            let Some(id) = commands::from_str(&cmd.name) else {
                continue;
            };

            match commands::role(id) {
                CommandRole::OpensBlock(kind) => {
                    let Some((name, parameters)) = cmd.arguments.split_first() else {
                        tracing::debug!(line = cmd.line, %kind, "skipping unnamed block");
                        continue;
                    };
                    tracing::debug!(name = %name.value, line = cmd.line, %kind, "found callable");
                    scope.open(kind, self.callables.len());
                    self.callables.push(Callable {
                        kind,
                        name: name.value.clone(),
                        declared_parameters: parameters.iter().map(|p| p.value.clone()).collect(),
                        documentation: extract_doc_block(self.nodes, index),
                        source_line: cmd.line,
                        keyword_specs: Vec::new(),
                        body_range: BodyRange {
                            start: index,
                            end: self.nodes.len(),
                        },
                    });
                }
                CommandRole::ClosesBlock(kind) => match scope.close(kind) {
                    Some(slot) => self.callables[slot].body_range.end = index,
                    None => tracing::debug!(line = cmd.line, %kind, "ignoring closer with no open block"),
                },
                CommandRole::Assignment | CommandRole::ArgumentParsing => {}
            }
        }

        if scope.depth() > 0 {
            tracing::debug!(unclosed = scope.depth(), "blocks left open at end of script");
        }
        self
    }

    /// Resolve keyword arguments for every discovered callable, each with its own heuristic state.
    pub fn resolve(mut self, config: &AnalysisConfig) -> Self {
        for callable in &mut self.callables {
            let mut heuristic = config.requiredness.heuristic();
            callable.keyword_specs = resolve_keyword_specs(callable.body_range.body(self.nodes), heuristic.as_mut());
        }
        self
    }

    pub fn into_callables(self) -> Vec<Callable> {
        self.callables
    }
}
