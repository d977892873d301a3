//! Anchor slugs
//!
//! Slugs follow GitHub's heading anchor shape: lowercase ASCII letters, digits and single dashes.

use std::collections::HashMap;

/// Slug used when nothing of the name survives.
pub const FALLBACK_SLUG: &str = "section";

/// Lowercase, turn `_` and whitespace runs into single dashes, drop everything else outside `[a-z0-9-]`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        match c {
            'a'..='z' | '0'..='9' => slug.push(c),
            '-' | '_' => push_dash(&mut slug),
            c if c.is_whitespace() => push_dash(&mut slug),
            _ => {}
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

fn push_dash(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

/// Hands out document-unique slugs: the second `foo` becomes `foo-2`, the third `foo-3`.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    seen: HashMap<String, usize>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, name: &str) -> String {
        let base = slugify(name);
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 { base } else { format!("{base}-{count}") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("add_library_target"), "add-library-target");
        assert_eq!(slugify("  My Func  "), "my-func");
        assert_eq!(slugify("Foo__Bar"), "foo-bar");
    }

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(slugify("a$b.c"), "abc");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("-lead-"), "lead");
    }

    #[test]
    fn test_slugify_fallback() {
        assert_eq!(slugify("___"), "section");
        assert_eq!(slugify("!!"), "section");
        assert_eq!(slugify(""), "section");
    }

    #[test]
    fn test_allocator_suffixes_duplicates() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("my_func"), "my-func");
        assert_eq!(slugs.allocate("My-Func"), "my-func-2");
        assert_eq!(slugs.allocate("my func"), "my-func-3");
        assert_eq!(slugs.allocate("other"), "other");
    }
}
