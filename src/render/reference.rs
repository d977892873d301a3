//! Reference of the commands the analyzer recognizes, rendered from `cmakedoc_core::lang::commands`.
//!
//! Printed by `cmakedoc --list-commands`; every other command in a script is ordinary as far as the analyzer is
//! concerned.

use cmakedoc_core::lang::commands::{self, CommandRole};
use cmakedoc_core::lang::conventions::VALIDATION_CALL_SUFFIX;

use super::writer::MarkdownWriter;

fn describe_role(role: CommandRole) -> String {
    match role {
        CommandRole::OpensBlock(kind) => {
            let scope = if kind.is_scoped() { "own scope" } else { "caller's scope" };
            format!("opens `{kind}` ({scope})")
        }
        CommandRole::ClosesBlock(kind) => format!("closes `{kind}`"),
        CommandRole::Assignment => "assignment".to_string(),
        CommandRole::ArgumentParsing => "keyword parsing".to_string(),
    }
}

/// Markdown table of recognized commands, followed by their examples.
pub fn render_command_reference() -> String {
    let mut out = MarkdownWriter::new();
    out.paragraph("# Recognized commands");

    out.line("| Id | Canonical | Role | Since | Stability | Description |");
    out.line("|---|---|---|---|---|---|");
    for info in commands::COMMANDS {
        let id = format!("{:?}", info.id);
        let canonical = format!("`{}`", info.canonical);
        let role = describe_role(info.role);
        let since = info.since.unwrap_or("");
        let stability = format!("{:?}", info.stability);
        let desc = info.description;
        out.line(&format!("| {id} | {canonical} | {role} | {since} | {stability} | {desc} |"));
    }
    out.blank();

    out.paragraph(&format!(
        "Any command whose name ends in `{VALIDATION_CALL_SUFFIX}` is read as a validation call marking a parsed keyword as required."
    ));

    out.paragraph("## Examples");
    for info in commands::COMMANDS {
        if info.examples.is_empty() {
            continue;
        }
        out.paragraph(&format!("### `{}`", info.canonical));
        for ex in info.examples {
            out.fenced("cmake", [ex.code]);
            out.blank();
            if let Some(note) = ex.note {
                out.paragraph(note);
            }
        }
    }

    let mut rendered = out.finish();
    if rendered.ends_with("\n\n") {
        rendered.pop();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmakedoc_core::lang::commands::CallableKind;

    #[test]
    fn test_every_command_has_a_row() {
        let reference = render_command_reference();
        for info in commands::COMMANDS {
            assert!(reference.contains(&format!("| `{}` |", info.canonical)), "missing {}", info.canonical);
        }
    }

    #[test]
    fn test_role_descriptions() {
        assert_eq!(
            describe_role(CommandRole::OpensBlock(CallableKind::Function)),
            "opens `function` (own scope)"
        );
        assert_eq!(
            describe_role(CommandRole::OpensBlock(CallableKind::Macro)),
            "opens `macro` (caller's scope)"
        );
        assert_eq!(describe_role(CommandRole::ClosesBlock(CallableKind::Macro)), "closes `macro`");
    }

    #[test]
    fn test_examples_are_fenced() {
        let reference = render_command_reference();
        assert!(reference.contains("### `cmake_parse_arguments`\n\n```cmake\n"));
        assert!(reference.ends_with('\n') && !reference.ends_with("\n\n"));
    }
}
