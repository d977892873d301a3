//! Parser for CMake scripts
//!
//! Converts a token stream into a flat [`Script`]: one node per top-level command invocation, comment or blank
//! line, in source order.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use cmakedoc_syntax::{lexer, parser};
//!
//! let source = "# Say hello\nfunction(hello who)\n  message(\"hi ${who}\")\nendfunction()\n";
//! let tokens = lexer::lex(source).unwrap();
//! let script = parser::parse(&tokens).unwrap();
//! assert_eq!(script.nodes.len(), 4);
//! ```

use crate::ast::*;
use crate::diagnostics::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{Token, TokenKind};

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at the next top-level newline, so one run
///   reports every malformed line.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `cmakedoc_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`Script`].
    ///
    /// ## Errors
    /// Returns every [`SyntaxError`] found; parsing continues after each one.
    pub fn parse(mut self) -> Result<Script, Vec<SyntaxError>> {
        let mut nodes = Vec::new();
        // Whether the current source line produced anything besides whitespace.
        let mut line_has_content = false;

        while let Some(token) = self.advance() {
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    if !line_has_content {
                        nodes.push(Node::BlankLine { line: token.line });
                    }
                    line_has_content = false;
                }
                TokenKind::LineComment(text) => {
                    line_has_content = true;
                    nodes.push(Node::Comment(Comment {
                        text: text.clone(),
                        kind: CommentKind::Line,
                        line: token.line,
                    }));
                }
                TokenKind::BracketComment(text) => {
                    line_has_content = true;
                    nodes.push(Node::Comment(Comment {
                        text: text.clone(),
                        kind: CommentKind::Bracket,
                        line: token.line,
                    }));
                }
                TokenKind::Ident(name) => {
                    line_has_content = true;
                    match self.command(name, token) {
                        Ok(cmd) => nodes.push(Node::Command(cmd)),
                        Err(e) => {
                            self.errors.push(e);
                            self.synchronize();
                        }
                    }
                }
                other => {
                    line_has_content = true;
                    self.errors.push(SyntaxError::new(
                        SyntaxErrorKind::UnexpectedToken,
                        format!("Expected a command, found {}", describe(other)),
                        token.span,
                        token.line,
                    ));
                    self.synchronize();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(Script::new(nodes))
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Command invocations
    // ========================================================================

    /// Parse `( args... )` after a command name.
    ///
    /// Nested parentheses (as in `if((A) OR B)`) are kept as literal `(` / `)` arguments.
    fn command(&mut self, name: &str, name_token: &Token) -> Result<CommandInvocation, SyntaxError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::LParen,
                ..
            }) => {
                self.advance();
            }
            _ => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::MissingOpenParen,
                    format!("Expected '(' after command name '{name}'"),
                    name_token.span,
                    name_token.line,
                )
                .with_hint("CMake commands are written as `name(arguments...)`"));
            }
        }

        let mut depth = 1usize;
        let mut arguments = Vec::new();

        loop {
            let Some(token) = self.advance() else {
                return Err(unterminated(name, name_token, name_token.span));
            };
            match &token.kind {
                TokenKind::Eof => return Err(unterminated(name, name_token, name_token.span.merge(token.span))),
                TokenKind::LParen => {
                    depth += 1;
                    arguments.push(Argument::unquoted("("));
                }
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(CommandInvocation {
                            name: name.to_string(),
                            arguments,
                            span: name_token.span.merge(token.span),
                            line: name_token.line,
                        });
                    }
                    arguments.push(Argument::unquoted(")"));
                }
                TokenKind::Unquoted(raw) | TokenKind::Ident(raw) => {
                    arguments.push(Argument::new(raw.clone(), ArgumentKind::Unquoted));
                }
                TokenKind::Quoted(raw) => arguments.push(Argument::new(raw.clone(), ArgumentKind::Quoted)),
                TokenKind::Bracket(raw) => arguments.push(Argument::new(raw.clone(), ArgumentKind::Bracket)),
                TokenKind::LineComment(_) | TokenKind::BracketComment(_) | TokenKind::Newline => {}
            }
        }
    }

    // ========================================================================
    // Token cursor
    // ========================================================================

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Skip to the next top-level newline (left unconsumed so line tracking stays correct).
    fn synchronize(&mut self) {
        while let Some(token) = self.peek() {
            if matches!(token.kind, TokenKind::Newline | TokenKind::Eof) {
                return;
            }
            self.pos += 1;
        }
    }
}

fn unterminated(name: &str, name_token: &Token, span: Span) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::UnterminatedInvocation,
        format!("Missing ')' to close command '{name}'"),
        span,
        name_token.line,
    )
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(name) => format!("identifier '{name}'"),
        TokenKind::LParen => "'('".to_string(),
        TokenKind::RParen => "')'".to_string(),
        TokenKind::Unquoted(raw) | TokenKind::Quoted(raw) | TokenKind::Bracket(raw) => format!("argument {raw}"),
        TokenKind::LineComment(_) | TokenKind::BracketComment(_) => "comment".to_string(),
        TokenKind::Newline => "newline".to_string(),
        TokenKind::Eof => "end of file".to_string(),
    }
}

/// Parse a token stream into a [`Script`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns `Err(Vec<SyntaxError>)` if parsing fails.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Script, Vec<SyntaxError>> {
    Parser::new(tokens).parse()
}

include!("parser/tests.rs");
