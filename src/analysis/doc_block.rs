//! Documentation comments
//!
//! The documentation of a block is the run of comment nodes directly above its opener. Anything else, a blank
//! line included, ends the run.

use cmakedoc_syntax::ast::{Comment, CommentKind, Node};

/// Collect the documentation written right above the node at `open_index`.
///
/// Each line loses its leading `#` markers, trailing whitespace and at most one leading space, so indentation
/// beyond the first space survives. Blank lines at either end of the block are dropped.
///
/// ## Examples
///
/// ```rust
/// use cmakedoc::analysis::extract_doc_block;
/// use cmakedoc_syntax::{lexer, parser};
///
/// let tokens = lexer::lex("## Greets.\n#   indented\nfunction(hi)\nendfunction()\n").unwrap();
/// let script = parser::parse(&tokens).unwrap();
/// assert_eq!(extract_doc_block(&script.nodes, 2), "Greets.\n  indented");
/// ```
pub fn extract_doc_block(nodes: &[Node], open_index: usize) -> String {
    let above = &nodes[..open_index.min(nodes.len())];
    let run_start = above
        .iter()
        .rposition(|node| node.as_comment().is_none())
        .map_or(0, |i| i + 1);

    let lines: Vec<String> = above[run_start..]
        .iter()
        .filter_map(Node::as_comment)
        .flat_map(comment_lines)
        .collect();

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn comment_lines(comment: &Comment) -> Vec<String> {
    match comment.kind {
        CommentKind::Line => vec![clean_line(comment.text.trim_start_matches('#'))],
        CommentKind::Bracket => bracket_body(&comment.text).lines().map(clean_line).collect(),
    }
}

fn clean_line(line: &str) -> String {
    let line = line.trim_end();
    line.strip_prefix(' ').unwrap_or(line).to_string()
}

/// Inner text of `#[==[ ... ]==]`.
fn bracket_body(text: &str) -> &str {
    let body = text.strip_prefix('#').unwrap_or(text);
    let Some(rest) = body.strip_prefix('[') else {
        return body;
    };
    let level = rest.chars().take_while(|&c| c == '=').count();
    let Some(inner) = rest[level..].strip_prefix('[') else {
        return body;
    };
    let closer = format!("]{}]", "=".repeat(level));
    inner.strip_suffix(closer.as_str()).unwrap_or(inner)
}
