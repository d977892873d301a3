//! Lexer for CMake scripts
//!
//! Handles tokenization including:
//! - Command names and parentheses
//! - Unquoted, quoted (`"..."`) and bracket (`[==[...]==]`) arguments
//! - A leading byte order mark, which is skipped
//! - Line comments (`# ...`) and bracket comments (`#[[ ... ]]`)
//! - Newlines between top-level statements (blank-line detection happens in the parser)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::{SyntaxError, SyntaxErrorKind};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// [Top level] → identifier → '(' → [Arguments, paren_depth > 0] → ')' → [Top level]
//
// Newlines only produce tokens at the top level. Inside an invocation they are
// ordinary separators, so multi-line argument lists need no special handling.
// ============================================================================

/// Lexer for CMake source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// 1-based line of the next unread character
    line: usize,
    /// Parenthesis depth; arguments are only scanned inside an invocation
    paren_depth: usize,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    ///
    /// A leading UTF-8 byte order mark is skipped; spans still index into `source`.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            paren_depth: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        };
        if source.starts_with(BYTE_ORDER_MARK) {
            lexer.advance();
        }
        lexer
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<SyntaxError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
            self.line,
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consume characters until `end` (a byte offset) is reached.
    fn advance_to(&mut self, end: usize) {
        while self.current_pos < end && self.advance().is_some() {}
    }

    fn push(&mut self, kind: TokenKind, start: usize, line: usize) {
        self.tokens
            .push(Token::new(kind, Span::new(start, self.current_pos), line));
    }

    /// Build an error covering everything consumed since `start`.
    fn error_from(&self, kind: SyntaxErrorKind, message: String, start: usize, line: usize) -> SyntaxError {
        SyntaxError::new(kind, message, Span::new(start, self.current_pos), line)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let line = self.line;

        let Some(c) = self.peek() else {
            return;
        };

        match c {
            '\n' => {
                self.advance();
                if self.paren_depth == 0 {
                    self.push(TokenKind::Newline, start, line);
                }
            }
            c if c.is_whitespace() => {
                self.advance();
            }
            '#' => self.scan_comment(start, line),
            '(' => {
                self.advance();
                self.paren_depth += 1;
                self.push(TokenKind::LParen, start, line);
            }
            ')' => {
                self.advance();
                self.paren_depth = self.paren_depth.saturating_sub(1);
                self.push(TokenKind::RParen, start, line);
            }
            _ if self.paren_depth > 0 => self.scan_argument(c, start, line),
            c if is_ident_start(c) => self.scan_ident(start, line),
            c => {
                self.advance();
                let err = self.error_from(
                    SyntaxErrorKind::UnexpectedCharacter,
                    format!("Unexpected character '{}'", c.escape_default()),
                    start,
                    line,
                );
                self.errors.push(err);
            }
        }
    }

    fn scan_ident(&mut self, start: usize, line: usize) {
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            self.advance();
        }
        let name = self.source[start..self.current_pos].to_string();
        self.push(TokenKind::Ident(name), start, line);
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn scan_comment(&mut self, start: usize, line: usize) {
        self.advance(); // '#'

        if let Some(level) = self.bracket_level_at(self.current_pos) {
            if self.scan_bracket_body(level, start, line) {
                let text = self.source[start..self.current_pos].to_string();
                self.push(TokenKind::BracketComment(text), start, line);
            }
            return;
        }

        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        let text = self.source[start..self.current_pos].to_string();
        self.push(TokenKind::LineComment(text), start, line);
    }

    // ========================================================================
    // Arguments
    // ========================================================================

    fn scan_argument(&mut self, c: char, start: usize, line: usize) {
        if c == '"' {
            self.scan_quoted(start, line);
            return;
        }
        let bracket_level = if c == '[' { self.bracket_level_at(start) } else { None };
        if let Some(level) = bracket_level {
            if self.scan_bracket_body(level, start, line) {
                let raw = self.source[start..self.current_pos].to_string();
                self.push(TokenKind::Bracket(raw), start, line);
            }
            return;
        }
        self.scan_unquoted(start, line);
    }

    /// Unquoted argument. A `"` after the first character opens a quoted run that stays part of the same
    /// argument (CMake's legacy form, as in `-DX="a b"`).
    fn scan_unquoted(&mut self, start: usize, line: usize) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '(' | ')' | '#') {
                break;
            }
            if c == '"' {
                if self.current_pos == start || !self.consume_quoted_run(start, line) {
                    break;
                }
                continue;
            }
            self.advance();
            if c == '\\' {
                // Escape sequence: the next character is part of the argument whatever it is.
                self.advance();
            }
        }
        let raw = self.source[start..self.current_pos].to_string();
        self.push(TokenKind::Unquoted(raw), start, line);
    }

    fn scan_quoted(&mut self, start: usize, line: usize) {
        if self.consume_quoted_run(start, line) {
            let raw = self.source[start..self.current_pos].to_string();
            self.push(TokenKind::Quoted(raw), start, line);
        }
    }

    /// Consume `"..."` starting at the current position.
    ///
    /// Returns `false` (after recording an error spanning from `start`) if the closing quote is missing.
    fn consume_quoted_run(&mut self, start: usize, line: usize) -> bool {
        self.advance(); // opening '"'

        loop {
            match self.advance() {
                None => {
                    let err = self
                        .error_from(
                            SyntaxErrorKind::UnterminatedQuotedArgument,
                            "Unterminated quoted argument".to_string(),
                            start,
                            line,
                        )
                        .with_hint("Add a closing '\"'");
                    self.errors.push(err);
                    return false;
                }
                Some('\\') => {
                    self.advance();
                }
                Some('"') => return true,
                Some(_) => {}
            }
        }
    }

    // ========================================================================
    // Brackets (shared by bracket arguments and bracket comments)
    // ========================================================================

    /// If a bracket opener `[`, `=`*, `[` starts at byte offset `at`, return its `=` count.
    fn bracket_level_at(&self, at: usize) -> Option<usize> {
        let mut rest = self.source.get(at..)?.chars();
        if rest.next()? != '[' {
            return None;
        }
        let mut level = 0;
        for c in rest {
            match c {
                '=' => level += 1,
                '[' => return Some(level),
                _ => return None,
            }
        }
        None
    }

    /// Consume a bracket construct whose opener is at the current position.
    ///
    /// Returns `false` (after recording an error) if the matching closer is missing.
    fn scan_bracket_body(&mut self, level: usize, start: usize, line: usize) -> bool {
        self.advance_to(self.current_pos + level + 2);

        let closer = format!("]{}]", "=".repeat(level));
        match self.source[self.current_pos..].find(&closer) {
            Some(offset) => {
                self.advance_to(self.current_pos + offset + closer.len());
                true
            }
            None => {
                self.advance_to(self.source.len());
                let err = self.error_from(
                    SyntaxErrorKind::UnterminatedBracket,
                    format!("Unterminated bracket, expected '{closer}'"),
                    start,
                    line,
                );
                self.errors.push(err);
                false
            }
        }
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Check if a character can start a command name (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue a command name (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<SyntaxError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
