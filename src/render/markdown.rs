//! Markdown document rendering
//!
//! Layout of the generated document:
//!
//! - `# <title>` and a `Generated from` note naming the source file
//! - `## Index` linking every rendered callable to its section and source line
//! - one section per callable: anchor, heading, synopsis, type, parameters, keyword arguments, documentation
//!
//! Descriptions of parameters and keywords are left as placeholders for authors to fill in.

use cmakedoc_core::lang::conventions;

use super::config::RenderConfig;
use super::slug::SlugAllocator;
use super::synopsis::synopsis_lines;
use super::writer::MarkdownWriter;
use crate::analysis::{Callable, KeywordArgSpec};

const PARAMETER_PLACEHOLDER: &str = "_Describe this parameter._";
const KEYWORD_PLACEHOLDER: &str = "_Describe this keyword._";
const NO_DOCUMENTATION: &str = "_No documentation available._";
const NOTHING_FOUND: &str = "> No functions or macros found.";

/// Render `callables` found in `source_name` as a Markdown document.
///
/// `source_name` is used for the `Generated from` note and the `#L<line>` links, so it should be the file name as
/// it appears next to the generated document.
pub fn render_markdown(callables: &[Callable], source_name: &str, config: &RenderConfig) -> String {
    let mut slugs = SlugAllocator::new();
    let entries: Vec<(&Callable, String)> = callables
        .iter()
        .filter(|c| config.include_private || !conventions::is_private_name(&c.name))
        .map(|c| (c, slugs.allocate(&c.name)))
        .collect();

    let mut out = MarkdownWriter::new();
    out.paragraph(&format!("# {}", config.title));
    out.paragraph(&format!("Generated from `{source_name}`."));

    if !entries.is_empty() {
        out.paragraph("## Index");
        for (callable, slug) in &entries {
            let location = format!("[{source_name}#L{line}]({source_name}#L{line})", line = callable.source_line);
            out.line(&format!(
                "- [{}](#{slug}) — `{}` — {location}",
                callable.name, callable.kind
            ));
        }
        out.blank();
    }

    for (callable, slug) in &entries {
        render_callable(&mut out, callable, slug, config);
    }

    if entries.is_empty() {
        out.paragraph(NOTHING_FOUND);
    }

    let mut rendered = out.finish();
    // The last block's separating blank line is not part of the document.
    if rendered.ends_with("\n\n") {
        rendered.pop();
    }
    rendered
}

fn render_callable(out: &mut MarkdownWriter, callable: &Callable, slug: &str, config: &RenderConfig) {
    out.line(&format!("<a id=\"{slug}\"></a>"));
    out.paragraph(&format!("# {}", callable.name));
    out.fenced(&config.fence_language, synopsis_lines(callable, config.synopsis_indent));
    out.blank();
    out.paragraph(&format!("**Type**: `{}`", callable.kind));

    out.paragraph("### Parameters");
    out.bullets_or_none(
        callable
            .declared_parameters
            .iter()
            .map(|p| format!("`{p}`: {PARAMETER_PLACEHOLDER}")),
    );
    out.blank();

    if !callable.keyword_specs.is_empty() {
        out.paragraph("### Keyword arguments");
        for spec in &callable.keyword_specs {
            render_keyword_spec(out, spec);
        }
    }

    let documentation = callable.documentation.trim_end();
    if documentation.trim().is_empty() {
        out.paragraph(NO_DOCUMENTATION);
    } else {
        out.paragraph(documentation);
    }
}

fn render_keyword_spec(out: &mut MarkdownWriter, spec: &KeywordArgSpec) {
    out.paragraph(&format!("Parsed from `cmake_parse_arguments({} ...)`:", spec.prefix));
    let categories = [
        (&spec.options, "option"),
        (&spec.single_value_keys, "one-value"),
        (&spec.multi_value_keys, "multi-value"),
    ];
    out.bullets_or_none(categories.into_iter().flat_map(|(keys, label)| {
        keys.iter()
            .map(move |key| format!("`{key}` ({label}): {KEYWORD_PLACEHOLDER}"))
    }));
    out.blank();
}
