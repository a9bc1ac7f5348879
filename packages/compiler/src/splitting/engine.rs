//! Split engine that runs indexing, planning and assembly for one document.

use super::assembler::assemble;
use super::indexer::index_sections;
use super::planner::plan_split_with_overhead;
use super::types::SplitNaming;
use crate::config::SplitConfig;
use crate::types::{CompiledOutput, Document};

/// Engine for keeping compiled documents under the size budget.
#[derive(Debug, Clone, Default)]
pub struct SplitEngine {
    config: SplitConfig,
    naming: SplitNaming,
}

impl SplitEngine {
    /// Create a new split engine.
    #[must_use]
    pub fn new(config: SplitConfig, naming: SplitNaming) -> Self {
        Self { config, naming }
    }

    /// The size budget in use.
    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split `document` if its rendered size exceeds the budget.
    ///
    /// The frontmatter counts toward the cutoff along with the body, so an
    /// over-budget document with sections always moves at least its last
    /// section out. A document within budget comes back whole. Returns `None` when the
    /// document is over budget but has no phase sections to split on; the
    /// caller decides whether to emit it oversized.
    ///
    /// # Examples
    /// ```
    /// use antigravity_compiler::splitting::SplitEngine;
    /// use antigravity_compiler::types::{Document, Frontmatter};
    ///
    /// let doc = Document::new(Frontmatter::new(), "Small body\n");
    /// let output = SplitEngine::default().split("plan", &doc).unwrap();
    /// assert!(!output.is_split());
    /// ```
    #[must_use]
    pub fn split(&self, name: &str, document: &Document) -> Option<CompiledOutput> {
        let chars = document.rendered_chars();
        if !self.config.exceeds_budget(chars) {
            return Some(CompiledOutput::single(name, document.clone()));
        }

        let overhead = chars - document.body.chars().count();
        let sections = index_sections(&document.body);
        let plan = plan_split_with_overhead(&document.body, &sections, &self.config, overhead)?;

        tracing::info!(
            name,
            chars,
            sections = sections.len(),
            overflow = plan.overflow.len(),
            "Splitting oversized document"
        );

        Some(assemble(name, &document.frontmatter, plan, &self.naming))
    }
}
