//! Token types for the CMake lexer.
//!
//! ## Notes
//! - Argument tokens keep their raw source spelling (quotes, brackets and escapes included).
//! - Newlines are only emitted outside invocations; inside `( ... )` they are plain separators.

use crate::ast::Span;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Structure ==========
    /// Command name (only outside parentheses)
    Ident(String),
    LParen,
    RParen,

    // ========== Arguments (only inside parentheses) ==========
    Unquoted(String),
    Quoted(String),
    Bracket(String),

    // ========== Comments ==========
    LineComment(String),
    BracketComment(String),

    // ========== Special ==========
    Newline,
    Eof,
}

/// A token with its kind, source span and starting line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, line: usize) -> Self {
        Self { kind, span, line }
    }
}
