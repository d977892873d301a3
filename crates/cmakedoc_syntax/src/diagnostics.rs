//! Diagnostics for malformed CMake scripts
//!
//! Errors carry a labeled byte span so the CLI can render them against the source with `miette`.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// What went wrong while tokenizing or parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    UnexpectedCharacter,
    UnterminatedQuotedArgument,
    UnterminatedBracket,
    MissingOpenParen,
    UnterminatedInvocation,
    UnexpectedToken,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SyntaxErrorKind::UnexpectedCharacter => "unexpected character",
            SyntaxErrorKind::UnterminatedQuotedArgument => "unterminated quoted argument",
            SyntaxErrorKind::UnterminatedBracket => "unterminated bracket",
            SyntaxErrorKind::MissingOpenParen => "missing '('",
            SyntaxErrorKind::UnterminatedInvocation => "unterminated command invocation",
            SyntaxErrorKind::UnexpectedToken => "unexpected token",
        };
        f.write_str(text)
    }
}

/// A syntax error with location information
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cmakedoc::syntax))]
pub struct SyntaxError {
    pub message: String,
    pub kind: SyntaxErrorKind,
    /// 1-based line the error starts on
    pub line: usize,
    #[label("{kind}")]
    pub span: SourceSpan,
    #[help]
    pub hint: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, message: impl Into<String>, span: Span, line: usize) -> Self {
        Self {
            message: message.into(),
            kind,
            line,
            span: SourceSpan::from(span.start..span.end.max(span.start)),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
