//! Configuration constants and validated settings for the compiler.

use std::path::{Path, PathBuf};

use crate::error::{CompilerError, Result};

/// Maximum character count of a compiled workflow accepted by the host.
pub const DEFAULT_MAX_WORKFLOW_SIZE: usize = 10_000;

/// Fraction of the budget at which phases start moving into satellites.
pub const DEFAULT_SPLIT_THRESHOLD: f64 = 0.9;

/// Prefix of every compiled workflow identifier.
pub const DEFAULT_WORKFLOW_PREFIX: &str = "gsd:";

/// Namespace prefix stripped from agent names and handler identifiers.
pub const NAMESPACE_PREFIX: &str = "gsd-";

/// Name of the host environment the output is written for.
pub const HOST_NAME: &str = "Antigravity";

/// Rules file name used by the host.
pub const HOST_RULES_FILE: &str = "GEMINI.md";

/// Directory (relative to the output root) that holds compiled skills.
pub const SKILLS_DIR: &str = ".agent/skills";

/// Call names that the compiler rewrites into skill invocations.
pub const TASK_CALL_NAMES: &[&str] = &["Task"];

/// Description used for agents without one.
pub const DEFAULT_AGENT_DESCRIPTION: &str = "GSD Agent";

/// Size budget and split threshold for one compilation.
///
/// Construction validates both values, so a `SplitConfig` in hand is always
/// usable by the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    budget: usize,
    threshold: f64,
}

impl SplitConfig {
    /// Create a validated split configuration.
    ///
    /// # Examples
    /// ```
    /// use antigravity_compiler::config::SplitConfig;
    ///
    /// assert!(SplitConfig::new(10_000, 0.9).is_ok());
    /// assert!(SplitConfig::new(0, 0.9).is_err());
    /// assert!(SplitConfig::new(10_000, 0.0).is_err());
    /// assert!(SplitConfig::new(10_000, 1.5).is_err());
    /// ```
    pub fn new(budget: usize, threshold: f64) -> Result<Self> {
        if budget == 0 {
            return Err(CompilerError::InvalidBudget(budget));
        }
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(CompilerError::InvalidThreshold(threshold));
        }
        Ok(Self { budget, threshold })
    }

    /// Maximum character count of a final document.
    #[must_use]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Fraction of the budget at which splitting begins.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Character count at which a section is pushed into overflow.
    #[must_use]
    pub fn cutoff(&self) -> f64 {
        self.budget as f64 * self.threshold
    }

    /// Whether a rendered document of `chars` characters exceeds the budget.
    #[must_use]
    pub fn exceeds_budget(&self, chars: usize) -> bool {
        chars > self.budget
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_MAX_WORKFLOW_SIZE,
            threshold: DEFAULT_SPLIT_THRESHOLD,
        }
    }
}

/// Location of the inputs below the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    /// Agent definitions, compiled to skills.
    pub agents_dir: PathBuf,
    /// Command definitions, compiled to workflows.
    pub commands_dir: PathBuf,
    /// Parent of the `templates`, `references` and `workflows` resource dirs.
    pub resources_dir: PathBuf,
    /// Host rules file copied verbatim.
    pub rules_file: PathBuf,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            agents_dir: PathBuf::from("agents"),
            commands_dir: PathBuf::from("commands/gsd"),
            resources_dir: PathBuf::from("get-shit-done"),
            rules_file: PathBuf::from("antigravity").join(HOST_RULES_FILE),
        }
    }
}

/// Everything a full compilation run needs.
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Root of the agent/command library.
    pub source_dir: PathBuf,
    /// Root of the compiled output (usually `<source>/.agent`).
    pub output_dir: PathBuf,
    /// Directory layout below `source_dir`.
    pub layout: SourceLayout,
    /// Size budget for workflows.
    pub split: SplitConfig,
    /// Prefix of workflow identifiers and file names.
    pub workflow_prefix: String,
}

impl CompileConfig {
    /// Create a configuration with the default layout and limits.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            layout: SourceLayout::default(),
            split: SplitConfig::default(),
            workflow_prefix: DEFAULT_WORKFLOW_PREFIX.to_string(),
        }
    }

    /// Override the split configuration.
    #[must_use]
    pub fn with_split(mut self, split: SplitConfig) -> Self {
        self.split = split;
        self
    }

    /// Override the workflow prefix.
    #[must_use]
    pub fn with_workflow_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.workflow_prefix = prefix.into();
        self
    }

    /// Absolute path of a layout entry.
    #[must_use]
    pub fn source_path(&self, relative: &Path) -> PathBuf {
        self.source_dir.join(relative)
    }
}

/// Strip the namespace prefix from an agent or handler name.
///
/// # Examples
/// ```
/// use antigravity_compiler::config::strip_namespace;
///
/// assert_eq!(strip_namespace("gsd-project-researcher"), "project-researcher");
/// assert_eq!(strip_namespace("writer"), "writer");
/// ```
#[must_use]
pub fn strip_namespace(name: &str) -> &str {
    name.strip_prefix(NAMESPACE_PREFIX).unwrap_or(name)
}
