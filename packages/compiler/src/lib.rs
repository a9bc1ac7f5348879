//! Antigravity Compiler - Compile GSD agents and commands into Antigravity
//! skills and workflows.
//!
//! Agent definitions become skills, command definitions become workflows.
//! Embedded `Task(...)` calls are rewritten into skill invocation blocks,
//! and workflows over the size budget are split along their `## Phase`
//! sections into linked satellite workflows.
//!
//! # Example
//!
//! ```
//! use antigravity_compiler::compiler::WorkflowCompiler;
//!
//! let source = "---\ndescription: Research\n---\nTask(prompt=\"Go\", subagent_type=\"gsd-researcher\")";
//! let output = WorkflowCompiler::default().compile("research", source);
//!
//! assert!(!output.is_split());
//! assert!(output.main.body.contains("## Researcher"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and validated configuration
//! - [`types`]: Documents and compiled output
//! - [`error`]: Error types and Result alias
//! - [`scanner`]: Tolerant call expression scanner
//! - [`invocation`]: Call → skill invocation rendering
//! - [`splitting`]: Size-bounded document splitting
//! - [`frontmatter`]: Frontmatter parsing
//! - [`transform`]: Path, wording and annotation rewrites
//! - [`compiler`]: Skill, workflow and resource compilation
//! - [`fs`]: Directory walking and atomic writes
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod fs;
pub mod invocation;
pub mod scanner;
pub mod splitting;
pub mod transform;
pub mod types;

// Re-export commonly used items
pub use compiler::{compile_all, CompileReport, WorkflowCompiler};
pub use config::{CompileConfig, SplitConfig};
pub use error::{CompilerError, Result};
pub use types::{CompiledOutput, Document, Frontmatter, Satellite};
