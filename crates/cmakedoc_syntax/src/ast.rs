//! Abstract Syntax Tree definitions for CMake scripts
//!
//! A script is a flat list of top-level nodes. Block structure (`function` ... `endfunction`) is not
//! represented here; it is reconstructed by the analyzer from the command names.

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A parsed script: every top-level node in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub nodes: Vec<Node>,
}

impl Script {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Iterate over command invocations only.
    pub fn commands(&self) -> impl Iterator<Item = &CommandInvocation> {
        self.nodes.iter().filter_map(Node::as_command)
    }
}

/// One top-level element of a script
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `name(arg ...)`
    Command(CommandInvocation),
    /// `# text` or `#[[ text ]]`
    Comment(Comment),
    /// An empty or whitespace-only source line
    BlankLine { line: usize },
}

impl Node {
    /// 1-based line the node starts on.
    pub fn line(&self) -> usize {
        match self {
            Node::Command(cmd) => cmd.line,
            Node::Comment(comment) => comment.line,
            Node::BlankLine { line } => *line,
        }
    }

    pub fn as_command(&self) -> Option<&CommandInvocation> {
        match self {
            Node::Command(cmd) => Some(cmd),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Node::Comment(comment) => Some(comment),
            _ => None,
        }
    }
}

/// A command invocation such as `set(VAR a b c)`
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    /// Command name as written (CMake treats it case-insensitively)
    pub name: String,
    pub arguments: Vec<Argument>,
    pub span: Span,
    /// 1-based line of the command name
    pub line: usize,
}

impl CommandInvocation {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>, line: usize) -> Self {
        Self {
            name: name.into(),
            arguments,
            span: Span::default(),
            line,
        }
    }

    /// Argument at `index`, as written.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(|a| a.value.as_str())
    }
}

/// How an argument was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// `foo`, `${VAR}`, `a;b`
    Unquoted,
    /// `"foo bar"`
    Quoted,
    /// `[[foo]]`, `[==[foo]==]`
    Bracket,
}

/// A single argument token.
///
/// `value` is the raw source text, so quoted arguments keep their quotes and bracket arguments keep their
/// brackets. Consumers decide how much to unwrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub value: String,
    pub kind: ArgumentKind,
}

impl Argument {
    pub fn new(value: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    pub fn unquoted(value: impl Into<String>) -> Self {
        Self::new(value, ArgumentKind::Unquoted)
    }

    /// Build a quoted argument from its unquoted content.
    pub fn quoted(content: &str) -> Self {
        Self::new(format!("\"{content}\""), ArgumentKind::Quoted)
    }
}

/// How a comment was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `# ...` up to the end of the line
    Line,
    /// `#[[ ... ]]`, possibly spanning lines
    Bracket,
}

/// A comment, with its `#` marker(s) included in `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub kind: CommentKind,
    pub line: usize,
}

impl Comment {
    pub fn line_comment(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            kind: CommentKind::Line,
            line,
        }
    }
}
