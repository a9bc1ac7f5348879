//! Compilation of a full agent/command library into the host layout.
//!
//! Output layout below the output root:
//!
//! - `skills/<id>/SKILL.md` for every agent
//! - `workflows/<prefix><id>.md` for every command and extracted phase
//! - `resources/{templates,references,workflows}/…`
//! - `rules/GEMINI.md`

mod resources;
mod skill;
mod workflow;

use std::fs;
use std::path::{Path, PathBuf};

pub use resources::{copy_resources, copy_rules, transform_resource, RESOURCE_DIRS};
pub use skill::{compile_skill, skill_id};
pub use workflow::WorkflowCompiler;

use crate::config::CompileConfig;
use crate::error::{CompilerError, Result};
use crate::fs::{markdown_files, write_atomic};
use crate::types::{CompiledOutput, Document};

/// Size of one written workflow file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenWorkflow {
    /// Identifier without prefix.
    pub id: String,
    /// Character count of the rendered file.
    pub chars: usize,
}

/// Result of compiling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub main: WrittenWorkflow,
    pub satellites: Vec<WrittenWorkflow>,
}

/// Summary of a full compilation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// Skill identifiers, in file name order.
    pub skills: Vec<String>,
    pub workflows: Vec<WorkflowSummary>,
    /// `(dir, file count)` per copied resource directory.
    pub resources: Vec<(String, usize)>,
    /// Whether the rules file was copied.
    pub rules: bool,
}

impl CompileReport {
    /// Number of workflow files written, satellites included.
    #[must_use]
    pub fn workflow_files(&self) -> usize {
        self.workflows.iter().map(|w| 1 + w.satellites.len()).sum()
    }
}

/// Compile agents, commands, resources and rules from `config.source_dir`
/// into `config.output_dir`.
pub fn compile_all(config: &CompileConfig) -> Result<CompileReport> {
    let agents_dir = existing_dir(config, &config.layout.agents_dir)?;
    let commands_dir = existing_dir(config, &config.layout.commands_dir)?;

    let mut report = CompileReport::default();

    for path in markdown_files(&agents_dir)? {
        let skill = compile_skill(&file_name(&path)?, &fs::read_to_string(&path)?);
        let target = config
            .output_dir
            .join("skills")
            .join(&skill.id)
            .join("SKILL.md");
        write_atomic(&target, skill.document.render().as_bytes())?;
        tracing::info!(skill = %skill.id, "Compiled skill");
        report.skills.push(skill.id);
    }

    let compiler = WorkflowCompiler::new(config.split, config.workflow_prefix.as_str());
    let workflows_dir = config.output_dir.join("workflows");
    for path in markdown_files(&commands_dir)? {
        let file_name = file_name(&path)?;
        let name = file_name.strip_suffix(".md").unwrap_or(file_name.as_str());
        let output = compiler.compile(name, &fs::read_to_string(&path)?);
        report
            .workflows
            .push(write_workflows(&output, &workflows_dir, &config.workflow_prefix)?);
    }

    report.resources = copy_resources(config)?;
    report.rules = copy_rules(config)?;

    Ok(report)
}

/// Write the main workflow and its satellites as `<prefix><id>.md`.
pub fn write_workflows(
    output: &CompiledOutput,
    dir: &Path,
    prefix: &str,
) -> Result<WorkflowSummary> {
    let write = |id: &str, document: &Document| -> Result<WrittenWorkflow> {
        let rendered = document.render();
        write_atomic(&dir.join(format!("{prefix}{id}.md")), rendered.as_bytes())?;
        Ok(WrittenWorkflow {
            id: id.to_string(),
            chars: rendered.chars().count(),
        })
    };

    let main = write(&output.name, &output.main)?;
    let satellites = output
        .satellites
        .iter()
        .map(|s| write(&s.id, &s.document))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        workflow = %output.name,
        chars = main.chars,
        satellites = satellites.len(),
        "Compiled workflow"
    );
    Ok(WorkflowSummary { main, satellites })
}

fn existing_dir(config: &CompileConfig, relative: &Path) -> Result<PathBuf> {
    let path = config.source_path(relative);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(CompilerError::MissingSource { path })
    }
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CompilerError::InvalidPath(path.to_path_buf()))
}
