//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cmakedoc_syntax::diagnostics::SyntaxError;
use cmakedoc_syntax::{lexer, parser};
use miette::{NamedSource, Report};
use thiserror::Error;

use crate::analysis::{AnalysisConfig, analyze_source};
use crate::render::{RenderConfig, render_command_reference, render_json, render_markdown};

use super::{Cli, CliError, CliResult, ExitCode, OutputFormat};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during analysis.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Options
// ============================================================================

/// Everything `generate_docs` needs besides the paths.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub format: OutputFormat,
    pub render: RenderConfig,
    pub analysis: AnalysisConfig,
}

impl From<&Cli> for GenerateOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            render: RenderConfig::new()
                .with_title(cli.title.clone())
                .with_include_private(cli.include_private),
            analysis: AnalysisConfig::new().with_required_heuristic(!cli.no_required_heuristic),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failure while producing the output document
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Error writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error serializing analysis result: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<OutputError> for CliError {
    fn from(err: OutputError) -> Self {
        CliError::failure(err.to_string())
    }
}

// ============================================================================
// Source loading
// ============================================================================

/// Read a source file with a size limit.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    // Check file size before reading
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Render syntax errors against the source as one CLI failure.
fn syntax_failure(file_path: &Path, source: &str, errors: Vec<SyntaxError>) -> CliError {
    let name = file_path.display().to_string();
    let mut msg = String::new();
    for err in errors {
        let report = Report::new(err).with_source_code(NamedSource::new(name.clone(), source.to_string()));
        msg.push_str(&format!("{report:?}\n"));
    }
    CliError::failure(msg.trim_end())
}

/// File name used in the generated document's links.
fn source_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string())
}

// ============================================================================
// Commands
// ============================================================================

/// Analyze `input` and write the rendered document to `output`.
pub fn generate_docs(input: &Path, output: &Path, options: &GenerateOptions) -> CliResult<ExitCode> {
    tracing::info!(input = %input.display(), "reading");
    let source = read_source(input)?;
    let callables =
        analyze_source(&source, &options.analysis).map_err(|errs| syntax_failure(input, &source, errs))?;

    if callables.is_empty() {
        tracing::warn!(input = %input.display(), "no functions or macros found");
    }

    let document = match options.format {
        OutputFormat::Markdown => render_markdown(&callables, &source_name(input), &options.render),
        OutputFormat::Json => render_json(&callables).map_err(OutputError::from)?,
    };

    fs::write(output, document).map_err(|source| OutputError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    println!("Success! Output saved to: {}", output.display());
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| syntax_failure(file_path, &source, errs))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the node sequence.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| syntax_failure(file_path, &source, errs))?;
    let script = parser::parse(&tokens).map_err(|errs| syntax_failure(file_path, &source, errs))?;

    println!("{:#?}", script);
    Ok(ExitCode::SUCCESS)
}

/// Print the recognized command vocabulary.
pub fn list_commands() -> CliResult<ExitCode> {
    print!("{}", render_command_reference());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cmakedoc_cli_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_source_name_uses_file_name() {
        assert_eq!(source_name(Path::new("cmake/utils.cmake")), "utils.cmake");
        assert_eq!(source_name(Path::new("/")), "/");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.cmake")).unwrap_err();
        assert!(err.message.contains("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_generate_markdown() {
        let dir = temp_dir("markdown");
        let input = dir.join("utils.cmake");
        let output = dir.join("docs.md");
        fs::write(&input, "# Says hi.\nfunction(hi who)\nendfunction()\n").unwrap();

        let code = generate_docs(&input, &output, &GenerateOptions::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let md = fs::read_to_string(&output).unwrap();
        assert!(md.starts_with("# CMake Documentation\n\nGenerated from `utils.cmake`."));
        assert!(md.contains("- [hi](#hi) — `function` — [utils.cmake#L2](utils.cmake#L2)"));
        assert!(md.contains("Says hi."));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_generate_json() {
        let dir = temp_dir("json");
        let input = dir.join("utils.cmake");
        let output = dir.join("out.json");
        fs::write(&input, "macro(m a)\nendmacro()\n").unwrap();

        let options = GenerateOptions {
            format: OutputFormat::Json,
            ..GenerateOptions::default()
        };
        generate_docs(&input, &output, &options).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json[0]["kind"], "macro");
        assert_eq!(json[0]["declared_parameters"][0], "a");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_syntax_error_is_failure() {
        let dir = temp_dir("syntax");
        let input = dir.join("bad.cmake");
        fs::write(&input, "function(f\n").unwrap();

        let err = generate_docs(&input, &dir.join("docs.md"), &GenerateOptions::default()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Missing ')'"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unwritable_output() {
        let dir = temp_dir("unwritable");
        let input = dir.join("utils.cmake");
        fs::write(&input, "").unwrap();

        let err = generate_docs(&input, &dir.join("missing/dir/docs.md"), &GenerateOptions::default()).unwrap_err();
        assert!(err.message.starts_with("Error writing"));
        fs::remove_dir_all(&dir).ok();
    }
}
