//! Rendering configuration
//!
//! Defaults reproduce the GitHub-friendly layout: `cpp` synopsis fences (closest highlighter to CMake call
//! syntax on GitHub) and private helpers hidden.

/// Markdown rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Document title, rendered as the top-level heading
    pub title: String,
    /// Whether callables whose name starts with `_` are rendered
    pub include_private: bool,
    /// Language tag on the synopsis code fence
    pub fence_language: String,
    /// Spaces before each keyword line of a multi-line synopsis
    pub synopsis_indent: usize,
}

pub const DEFAULT_TITLE: &str = "CMake Documentation";
pub const DEFAULT_FENCE_LANGUAGE: &str = "cpp";

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            include_private: false,
            fence_language: DEFAULT_FENCE_LANGUAGE.to_string(),
            synopsis_indent: 2,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render `_private` helpers too
    pub fn with_include_private(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }

    /// Set the synopsis fence language
    pub fn with_fence_language(mut self, language: impl Into<String>) -> Self {
        self.fence_language = language.into();
        self
    }
}
