//! Documentation rendering
//!
//! Turns analysis results into a GitHub-friendly Markdown reference.
//!
//! ## Module Structure
//!
//! - `config` - rendering options ([`RenderConfig`])
//! - `markdown` - document layout
//! - `synopsis` - CMake-style call synopsis per callable
//! - `slug` - unique anchor slugs
//! - `reference` - table of recognized commands
//! - `writer` - line-oriented output buffer

mod config;
mod markdown;
mod reference;
mod slug;
mod synopsis;
mod writer;

pub use config::{DEFAULT_FENCE_LANGUAGE, DEFAULT_TITLE, RenderConfig};
pub use markdown::render_markdown;
pub use reference::render_command_reference;
pub use slug::{SlugAllocator, slugify};
pub use synopsis::{placeholder, synopsis_lines};

use crate::analysis::Callable;

/// Serialize callables as pretty-printed JSON.
///
/// ## Errors
/// Returns the serializer's error unchanged.
pub fn render_json(callables: &[Callable]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(callables)
}
