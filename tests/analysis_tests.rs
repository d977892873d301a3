//! End-to-end analysis tests
//!
//! Each test feeds CMake source (inline or from `tests/fixtures/`) through lex → parse → analyze and checks the
//! discovered callables.

use std::fs;

use cmakedoc::analysis::{AnalysisConfig, Callable, CallableKind, ListSource, analyze_source};

fn analyze(source: &str) -> Vec<Callable> {
    analyze_source(source, &AnalysisConfig::default()).expect("source should parse")
}

fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}.cmake", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

fn names(callables: &[Callable]) -> Vec<&str> {
    callables.iter().map(|c| c.name.as_str()).collect()
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn every_named_opener_yields_one_callable() {
    let source = r#"
function(alpha)
endfunction()
macro(beta x)
endmacro()
function()
endfunction()
"#;
    let callables = analyze(source);
    assert_eq!(names(&callables), vec!["alpha", "beta"]);
    assert_eq!(callables[0].kind, CallableKind::Function);
    assert_eq!(callables[1].kind, CallableKind::Macro);
}

#[test]
fn bare_callable_has_empty_sequences() {
    let callables = analyze("function(bare)\nendfunction()\n");
    assert_eq!(callables.len(), 1);
    let bare = &callables[0];
    assert!(bare.declared_parameters.is_empty());
    assert!(bare.keyword_specs.is_empty());
    assert_eq!(bare.documentation, "");
}

#[test]
fn unbalanced_script_still_yields_unaffected_callables() {
    let callables = analyze(&load_fixture("unbalanced"));
    assert_eq!(names(&callables), vec!["first", "interrupted", "inner", "last", "never_closed"]);

    assert_eq!(callables[0].documentation, "First, well-formed.");
    assert_eq!(callables[0].keyword_specs[0].options, vec!["ONE"]);

    assert_eq!(callables[1].documentation, "Opened but interrupted by the wrong closer.");
    assert!(callables[1].keyword_specs.is_empty());

    assert_eq!(callables[3].documentation, "Still discovered after the mess above.");
    assert_eq!(callables[3].source_line, 15);

    let never_closed = &callables[4];
    assert_eq!(never_closed.keyword_specs.len(), 1);
    assert_eq!(never_closed.keyword_specs[0].options, vec!["A", "B"]);
}

#[test]
fn unclosed_block_body_runs_to_end_of_script() {
    let callables = analyze(&load_fixture("unbalanced"));
    // `inner` was discarded by the mismatched `endmacro()`, so its body reaches the end and sees the
    // `cmake_parse_arguments` call of `never_closed`.
    let inner = &callables[2];
    assert_eq!(inner.name, "inner");
    assert_eq!(inner.keyword_specs.len(), 1);
    assert_eq!(inner.keyword_specs[0].prefix, "NC");
}

#[test]
fn byte_order_mark_prefixed_script_is_analyzed() {
    let callables = analyze("\u{feff}# Saved by a Windows editor.\nfunction(f)\nendfunction()\n");
    assert_eq!(names(&callables), vec!["f"]);
    assert_eq!(callables[0].source_line, 2);
    assert_eq!(callables[0].documentation, "Saved by a Windows editor.");
}

#[test]
fn nested_blocks_close_at_matching_closer() {
    let callables = analyze(&load_fixture("nested"));
    assert_eq!(names(&callables), vec!["outer", "inner_macro", "inner_function"]);

    let outer_prefixes: Vec<&str> = callables[0].keyword_specs.iter().map(|s| s.prefix.as_str()).collect();
    assert_eq!(outer_prefixes, vec!["IM", "OUT"]);

    assert_eq!(callables[1].documentation, "Inner macro.");
    assert_eq!(callables[1].keyword_specs.len(), 1);
    assert_eq!(callables[1].keyword_specs[0].single_value_keys, vec!["KEY"]);

    assert_eq!(callables[2].documentation, "");
    assert!(callables[2].keyword_specs.is_empty());
}

// ============================================================================
// Documentation
// ============================================================================

#[test]
fn comments_before_blank_line_are_not_attached() {
    let source = "# Copyright notice\n\nfunction(f)\nendfunction()\n";
    assert_eq!(analyze(source)[0].documentation, "");
}

#[test]
fn doc_extraction_is_order_preserving_and_idempotent() {
    let source = "# one\n# two\n#\n# three\nmacro(m)\nendmacro()\n";
    let first = analyze(source);
    let second = analyze(source);
    assert_eq!(first[0].documentation, "one\ntwo\n\nthree");
    assert_eq!(first, second);
}

// ============================================================================
// Keyword arguments
// ============================================================================

#[test]
fn variable_list_resolves_to_prior_set() {
    let source = r#"
function(f)
  set(OPTS A B)
  cmake_parse_arguments(PFX "${OPTS}" "" "")
endfunction()
"#;
    let spec = &analyze(source)[0].keyword_specs[0];
    assert_eq!(spec.prefix, "PFX");
    assert_eq!(spec.options, vec!["A", "B"]);
    assert!(spec.single_value_keys.is_empty());
    assert!(spec.multi_value_keys.is_empty());
}

#[test]
fn validation_call_marks_option_required() {
    let source = r#"
function(f)
  check_var_defined(PFX_FOO)
  cmake_parse_arguments(PFX "FOO;BAR" "" "")
endfunction()
"#;
    let spec = &analyze(source)[0].keyword_specs[0];
    assert_eq!(spec.options, vec!["FOO", "BAR"]);
    assert_eq!(spec.required_options, vec!["FOO"]);
}

#[test]
fn required_keys_are_subset_of_full_lists() {
    let source = r#"
function(f)
  check_var_defined(P_X)
  check_var_defined(P_NOT_DECLARED)
  cmake_parse_arguments(P "X" "Y" "Z")
endfunction()
"#;
    let spec = &analyze(source)[0].keyword_specs[0];
    for key in &spec.required_options {
        assert!(spec.options.contains(key));
    }
    assert_eq!(spec.required_options, vec!["X"]);
    assert!(spec.required_single_value_keys.is_empty());
    assert!(spec.required_multi_value_keys.is_empty());
}

#[test]
fn legacy_quoted_arguments_do_not_shift_lists() {
    let source = r#"
function(configure)
  set(flags -DMODE="fast build" VERBOSE)
  cmake_parse_arguments(ARG "${flags}" -DOUT="a b" "FILES")
endfunction()
"#;
    let spec = &analyze(source)[0].keyword_specs[0];
    assert_eq!(spec.options, vec![r#"-DMODE="fast build""#, "VERBOSE"]);
    assert_eq!(spec.single_value_keys, vec![r#"-DOUT="a b""#]);
    assert_eq!(spec.multi_value_keys, vec!["FILES"]);
}

#[test]
fn multiple_invocations_produce_specs_in_order() {
    let source = r#"
function(f)
  cmake_parse_arguments(FIRST "A" "" "")
  cmake_parse_arguments(SECOND "" "B" "")
  cmake_parse_arguments(THIRD "" "" "C")
endfunction()
"#;
    let specs = &analyze(source)[0].keyword_specs;
    let prefixes: Vec<&str> = specs.iter().map(|s| s.prefix.as_str()).collect();
    assert_eq!(prefixes, vec!["FIRST", "SECOND", "THIRD"]);
}

#[test]
fn empty_literal_and_unknown_variable_are_distinguishable() {
    let source = r#"
function(f)
  cmake_parse_arguments(P "" "${UNKNOWN}" "")
endfunction()
"#;
    let spec = &analyze(source)[0].keyword_specs[0];
    assert!(spec.options.is_empty());
    assert!(spec.single_value_keys.is_empty());
    assert_eq!(spec.sources.options, ListSource::EmptyLiteral);
    assert_eq!(
        spec.sources.single_value,
        ListSource::Variable {
            name: "UNKNOWN".to_string(),
            resolved: false
        }
    );
}

#[test]
fn assignments_do_not_leak_between_callables() {
    let source = r#"
function(a)
  set(OPTS LEAKED)
endfunction()
function(b)
  cmake_parse_arguments(P "${OPTS}" "" "")
endfunction()
"#;
    let callables = analyze(source);
    assert!(callables[1].keyword_specs[0].options.is_empty());
}

#[test]
fn validations_do_not_leak_between_callables() {
    let source = r#"
function(a)
  check_var_defined(P_X)
endfunction()
function(b)
  cmake_parse_arguments(P "X" "" "")
endfunction()
"#;
    let callables = analyze(source);
    assert!(callables[1].keyword_specs[0].required_options.is_empty());
}

#[test]
fn disabled_heuristic_leaves_required_lists_empty() {
    let source = load_fixture("nested");
    let config = AnalysisConfig::new().with_required_heuristic(false);
    let callables = analyze_source(&source, &config).expect("source should parse");
    assert!(
        callables
            .iter()
            .flat_map(|c| &c.keyword_specs)
            .all(|s| s.required_options.is_empty()
                && s.required_single_value_keys.is_empty()
                && s.required_multi_value_keys.is_empty())
    );
}

#[test]
fn syntax_errors_are_reported() {
    let errors = analyze_source("function(f\n", &AnalysisConfig::default()).expect_err("missing ')'");
    assert_eq!(errors.len(), 1);
}
