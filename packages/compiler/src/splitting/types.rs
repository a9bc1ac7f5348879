//! Types for the document splitting system.

use std::ops::Range;

/// A `## Phase <ordinal>: <title>` region of a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Dot-delimited numeral from the heading (e.g. "2" or "2.1").
    pub ordinal: String,

    /// Heading title, trimmed.
    pub title: String,

    /// Byte range in the body, from the heading's line start up to the next
    /// section or end of body.
    pub range: Range<usize>,

    /// Character count of the range.
    pub size: usize,

    /// The text of the range, heading included.
    pub content: String,
}

impl Section {
    /// Create a section from its heading parts and the body it belongs to.
    #[must_use]
    pub fn new(
        ordinal: impl Into<String>,
        title: impl Into<String>,
        body: &str,
        range: Range<usize>,
    ) -> Self {
        let content = body[range.clone()].to_string();
        Self {
            ordinal: ordinal.into(),
            title: title.into(),
            size: content.chars().count(),
            range,
            content,
        }
    }

    /// Ordinal with dots replaced by dashes, for identifiers ("2.1" → "2-1").
    #[must_use]
    pub fn slug(&self) -> String {
        self.ordinal.replace('.', "-")
    }
}

/// Decision on which trailing sections leave the main document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan {
    /// Text before the first section heading.
    pub preamble: String,

    /// Preamble followed by every section not in `overflow`, in order.
    pub retained_content: String,

    /// Contiguous suffix of the sections, moved to satellites.
    pub overflow: Vec<Section>,
}

impl SplitPlan {
    /// Whether any section was moved out.
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }
}

/// Naming of compiled workflows and their links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNaming {
    /// Prefix of workflow identifiers (e.g. "gsd:").
    pub workflow_prefix: String,
}

impl SplitNaming {
    #[must_use]
    pub fn new(workflow_prefix: impl Into<String>) -> Self {
        Self {
            workflow_prefix: workflow_prefix.into(),
        }
    }

    /// Identifier of the satellite holding `section` of workflow `name`.
    #[must_use]
    pub fn satellite_id(&self, name: &str, section: &Section) -> String {
        format!("{name}-phase-{}", section.slug())
    }

    /// Reference to a workflow as written inside documents (`gsd:plan`).
    #[must_use]
    pub fn qualified(&self, id: &str) -> String {
        format!("{}{id}", self.workflow_prefix)
    }
}

impl Default for SplitNaming {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_WORKFLOW_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new_measures_chars() {
        let body = "## Phase 1: Été\nà faire\n";
        let section = Section::new("1", "Été", body, 0..body.len());
        assert_eq!(section.size, body.chars().count());
        assert!(section.size < body.len());
        assert_eq!(section.content, body);
    }

    #[test]
    fn test_section_slug() {
        let section = Section::new("2.1.3", "Deep", "x", 0..1);
        assert_eq!(section.slug(), "2-1-3");
    }

    #[test]
    fn test_naming() {
        let naming = SplitNaming::default();
        let section = Section::new("2.1", "Plan", "x", 0..1);
        assert_eq!(naming.satellite_id("execute", &section), "execute-phase-2-1");
        assert_eq!(naming.qualified("execute"), "gsd:execute");
    }
}
