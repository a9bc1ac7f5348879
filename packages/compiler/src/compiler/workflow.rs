//! Command document → workflow compilation.

use crate::config::{SplitConfig, DEFAULT_WORKFLOW_PREFIX, TASK_CALL_NAMES};
use crate::frontmatter::parse_frontmatter;
use crate::invocation::{rewrite_invocations, InvocationRenderer};
use crate::scanner::CallScanner;
use crate::splitting::{SplitEngine, SplitNaming};
use crate::transform::{add_turbo_annotations, make_platform_agnostic, rewrite_resource_paths};
use crate::types::{CompiledOutput, Document, Frontmatter};

/// Compiles command documents into size-bounded workflows.
#[derive(Debug, Clone)]
pub struct WorkflowCompiler {
    scanner: CallScanner,
    renderer: InvocationRenderer,
    engine: SplitEngine,
}

impl WorkflowCompiler {
    /// Create a compiler with the given size budget and workflow prefix.
    #[must_use]
    pub fn new(split: SplitConfig, workflow_prefix: impl Into<String>) -> Self {
        Self {
            scanner: CallScanner::for_names(TASK_CALL_NAMES.iter().copied()),
            renderer: InvocationRenderer::default(),
            engine: SplitEngine::new(split, SplitNaming::new(workflow_prefix)),
        }
    }

    /// Use a different renderer for embedded calls.
    #[must_use]
    pub fn with_renderer(mut self, renderer: InvocationRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Transform a document body through the full rewrite chain.
    #[must_use]
    pub fn transform_body(&self, body: &str) -> String {
        let body = rewrite_resource_paths(body);
        let body = make_platform_agnostic(&body);
        let body = rewrite_invocations(&body, &self.scanner, &self.renderer);
        add_turbo_annotations(&body)
    }

    /// Compile the command `command_name` from its raw `source` text.
    ///
    /// The workflow keeps only a `description` (falling back to the command
    /// name). Documents over budget are split along their phase sections;
    /// an oversized document without sections is emitted whole.
    ///
    /// # Examples
    /// ```
    /// use antigravity_compiler::compiler::WorkflowCompiler;
    ///
    /// let source = "---\ndescription: Plan a phase\n---\nTask(subagent_type=\"gsd-planner\")\n";
    /// let output = WorkflowCompiler::default().compile("plan-phase", source);
    ///
    /// assert_eq!(output.main.frontmatter.get("description"), Some("Plan a phase"));
    /// assert!(output.main.body.contains("View file: .agent/skills/planner/SKILL.md"));
    /// ```
    #[must_use]
    pub fn compile(&self, command_name: &str, source: &str) -> CompiledOutput {
        let parsed = parse_frontmatter(source);
        let description = parsed.frontmatter.get("description").unwrap_or(command_name);
        let document = Document::new(
            Frontmatter::new().with("description", description),
            self.transform_body(&parsed.body),
        );

        match self.engine.split(command_name, &document) {
            Some(output) => output,
            None => {
                tracing::warn!(
                    name = command_name,
                    chars = document.rendered_chars(),
                    budget = self.engine.config().budget(),
                    "Oversized workflow has no phase sections, emitting unsplit"
                );
                CompiledOutput::single(command_name, document)
            }
        }
    }
}

impl Default for WorkflowCompiler {
    fn default() -> Self {
        Self::new(SplitConfig::default(), DEFAULT_WORKFLOW_PREFIX)
    }
}
