//! Locates `## Phase` section boundaries in a document body.

use regex::Regex;
use std::sync::LazyLock;

use super::types::Section;

/// `## Phase <dotted-decimal>[:] <title>` at the start of a line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PHASE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## Phase (\d+(?:\.\d+)*)(?::[ \t]*|[ \t]+)(\S[^\n]*)$").expect("valid regex")
});

/// Index the phase sections of `body` in document order.
///
/// Each section runs from its heading's line start to the next heading or
/// the end of the body. Ordinals are taken verbatim and not checked for
/// order. A body without headings yields an empty vector.
///
/// # Examples
/// ```
/// use antigravity_compiler::splitting::index_sections;
///
/// let body = "Intro\n## Phase 1: Setup\nA\n## Phase 1.1 Check\nB\n";
/// let sections = index_sections(body);
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[1].ordinal, "1.1");
/// assert_eq!(sections[1].title, "Check");
/// ```
#[must_use]
pub fn index_sections(body: &str) -> Vec<Section> {
    let headings: Vec<(usize, &str, &str)> = PHASE_HEADING
        .captures_iter(body)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let ordinal = caps.get(1)?.as_str();
            let title = caps.get(2)?.as_str().trim();
            Some((start, ordinal, title))
        })
        .collect();

    let sections: Vec<Section> = headings
        .iter()
        .enumerate()
        .map(|(i, &(start, ordinal, title))| {
            let end = headings.get(i + 1).map_or(body.len(), |next| next.0);
            Section::new(ordinal, title, body, start..end)
        })
        .collect();

    for section in &sections {
        tracing::debug!(
            ordinal = %section.ordinal,
            title = %section.title,
            size = section.size,
            "Indexed phase section"
        );
    }

    sections
}
