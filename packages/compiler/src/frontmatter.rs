//! Frontmatter parsing for source documents.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Document, Frontmatter};

/// Leading `---` block followed by the body.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FRONTMATTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").expect("valid regex"));

/// Split raw source text into frontmatter and body.
///
/// Each frontmatter line is split on its first colon; key and value are
/// trimmed. Lines without a colon or with an empty key are ignored. Text
/// without a frontmatter block becomes the body unchanged.
///
/// # Examples
/// ```
/// use antigravity_compiler::frontmatter::parse_frontmatter;
///
/// let doc = parse_frontmatter("---\ndescription: Plan: the phase\n---\nBody");
/// assert_eq!(doc.frontmatter.get("description"), Some("Plan: the phase"));
/// assert_eq!(doc.body, "Body");
/// ```
#[must_use]
pub fn parse_frontmatter(text: &str) -> Document {
    let Some(caps) = FRONTMATTER_PATTERN.captures(text) else {
        return Document::new(Frontmatter::new(), text);
    };
    let (Some(block), Some(body)) = (caps.get(1), caps.get(2)) else {
        return Document::new(Frontmatter::new(), text);
    };

    let mut frontmatter = Frontmatter::new();
    for line in block.as_str().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        frontmatter.insert(key, value.trim());
    }

    Document::new(frontmatter, body.as_str())
}
