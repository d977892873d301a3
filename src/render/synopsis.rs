//! Call synopsis in CMake reference style
//!
//! ```text
//! my_func(<a> <b>
//!   [FLAG]
//!   KEY <value>
//!   [LIST <item>...]
//! )
//! ```
//!
//! Keywords from every `cmake_parse_arguments` call of the callable are merged and sorted per category. Options
//! are always bracketed; value keys are bracketed unless required.

use std::collections::BTreeSet;

use cmakedoc_core::lang::conventions::{VISIBILITY_PARAMETER, VISIBILITY_PLACEHOLDER};

use crate::analysis::Callable;

/// `<name>` placeholder for a positional parameter.
pub fn placeholder(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "<>".to_string();
    }
    if name.eq_ignore_ascii_case(VISIBILITY_PARAMETER) {
        return VISIBILITY_PLACEHOLDER.to_string();
    }
    if name.starts_with('<') && name.ends_with('>') {
        return name.to_string();
    }
    format!("<{name}>")
}

/// Keywords of all specs, deduplicated and sorted, with the union of their required sets.
#[derive(Debug, Default)]
struct MergedKeywords<'a> {
    options: BTreeSet<&'a str>,
    single_value: BTreeSet<&'a str>,
    multi_value: BTreeSet<&'a str>,
    required_single_value: BTreeSet<&'a str>,
    required_multi_value: BTreeSet<&'a str>,
}

impl<'a> MergedKeywords<'a> {
    fn collect(callable: &'a Callable) -> Self {
        let mut merged = Self::default();
        for spec in &callable.keyword_specs {
            merged.options.extend(spec.options.iter().map(String::as_str));
            merged.single_value.extend(spec.single_value_keys.iter().map(String::as_str));
            merged.multi_value.extend(spec.multi_value_keys.iter().map(String::as_str));
            merged
                .required_single_value
                .extend(spec.required_single_value_keys.iter().map(String::as_str));
            merged
                .required_multi_value
                .extend(spec.required_multi_value_keys.iter().map(String::as_str));
        }
        merged
    }

    fn lines(&self) -> Vec<String> {
        let options = self.options.iter().map(|opt| format!("[{opt}]"));
        let single = self.single_value.iter().map(|key| {
            let core = format!("{key} <value>");
            if self.required_single_value.contains(key) { core } else { format!("[{core}]") }
        });
        let multi = self.multi_value.iter().map(|key| {
            let core = format!("{key} <item>...");
            if self.required_multi_value.contains(key) { core } else { format!("[{core}]") }
        });
        options.chain(single).chain(multi).collect()
    }
}

/// Synopsis lines for `callable`, without the surrounding fence.
///
/// `indent` is the number of spaces before each keyword line in the multi-line form.
pub fn synopsis_lines(callable: &Callable, indent: usize) -> Vec<String> {
    let positional: Vec<String> = callable.declared_parameters.iter().map(|p| placeholder(p)).collect();
    let keyword_lines = MergedKeywords::collect(callable).lines();

    match (positional.is_empty(), keyword_lines.is_empty()) {
        (true, true) => vec![format!("{}()", callable.name)],
        (false, true) => vec![format!("{}({})", callable.name, positional.join(" "))],
        _ => {
            let pad = " ".repeat(indent);
            let first = format!("{}({}", callable.name, positional.join(" "));
            let mut lines = vec![first.trim_end().to_string()];
            lines.extend(keyword_lines.into_iter().map(|item| format!("{pad}{item}")));
            lines.push(")".to_string());
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisConfig, analyze_source};

    fn callable(source: &str) -> Callable {
        analyze_source(source, &AnalysisConfig::default()).unwrap().remove(0)
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder("target"), "<target>");
        assert_eq!(placeholder("  target "), "<target>");
        assert_eq!(placeholder("Visibility"), "<PRIVATE|PUBLIC|INTERFACE>");
        assert_eq!(placeholder("<already>"), "<already>");
        assert_eq!(placeholder(""), "<>");
    }

    #[test]
    fn test_no_arguments() {
        let c = callable("function(noop)\nendfunction()\n");
        assert_eq!(synopsis_lines(&c, 2), vec!["noop()"]);
    }

    #[test]
    fn test_positional_only_is_single_line() {
        let c = callable("macro(link target visibility)\nendmacro()\n");
        assert_eq!(synopsis_lines(&c, 2), vec!["link(<target> <PRIVATE|PUBLIC|INTERFACE>)"]);
    }

    #[test]
    fn test_keywords_sorted_and_bracketed() {
        let source = r#"
function(install_it target)
  check_var_defined(ARG_DEST)
  check_var_defined(ARG_FILES)
  check_var_defined(ARG_QUIET)
  cmake_parse_arguments(ARG "QUIET;ALL" "DEST;COMPONENT" "FILES;DIRS" ${ARGN})
endfunction()
"#;
        let c = callable(source);
        assert_eq!(
            synopsis_lines(&c, 2),
            vec![
                "install_it(<target>",
                "  [ALL]",
                "  [QUIET]",
                "  [COMPONENT <value>]",
                "  DEST <value>",
                "  [DIRS <item>...]",
                "  FILES <item>...",
                ")",
            ]
        );
    }

    #[test]
    fn test_keywords_without_positionals() {
        let c = callable("function(f)\ncmake_parse_arguments(P \"X\" \"\" \"\")\nendfunction()\n");
        assert_eq!(synopsis_lines(&c, 4), vec!["f(", "    [X]", ")"]);
    }

    #[test]
    fn test_specs_are_merged_and_deduplicated() {
        let source = r#"
function(f)
  cmake_parse_arguments(A "" "NAME" "")
  cmake_parse_arguments(B "" "NAME;ID" "")
endfunction()
"#;
        let c = callable(source);
        assert_eq!(synopsis_lines(&c, 2), vec!["f(", "  [ID <value>]", "  [NAME <value>]", ")"]);
    }
}
