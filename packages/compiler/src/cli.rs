//! Command-line interface for the compiler.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::compiler::{compile_all, WorkflowCompiler};
use crate::config::{
    CompileConfig, SplitConfig, DEFAULT_MAX_WORKFLOW_SIZE, DEFAULT_SPLIT_THRESHOLD,
    DEFAULT_WORKFLOW_PREFIX,
};
use crate::error::{CompilerError, Result};
use crate::frontmatter::parse_frontmatter;
use crate::splitting::{assemble, index_sections, plan_split_with_overhead, SplitNaming};
use crate::types::{Document, Frontmatter};

/// Compile GSD agents and commands into Antigravity skills and workflows.
#[derive(Parser)]
#[command(name = "antigravity-compiler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile the whole library into the output directory.
    Compile {
        /// Library root containing agents/ and commands/gsd/
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Output directory (default: <source>/.agent)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum characters per workflow file
        #[arg(long, default_value_t = DEFAULT_MAX_WORKFLOW_SIZE)]
        max_size: usize,

        /// Fraction of the maximum at which phases are extracted
        #[arg(long, default_value_t = DEFAULT_SPLIT_THRESHOLD)]
        threshold: f64,

        /// Prefix of workflow identifiers and file names
        #[arg(long, default_value = DEFAULT_WORKFLOW_PREFIX)]
        prefix: String,
    },

    /// Show the phase sections and split plan of one command without writing.
    Inspect {
        /// Command document to inspect
        file: PathBuf,

        /// Maximum characters per workflow file
        #[arg(long, default_value_t = DEFAULT_MAX_WORKFLOW_SIZE)]
        max_size: usize,

        /// Fraction of the maximum at which phases are extracted
        #[arg(long, default_value_t = DEFAULT_SPLIT_THRESHOLD)]
        threshold: f64,

        /// Prefix of workflow identifiers and file names
        #[arg(long, default_value = DEFAULT_WORKFLOW_PREFIX)]
        prefix: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            source,
            output,
            max_size,
            threshold,
            prefix,
        } => {
            let split = SplitConfig::new(max_size, threshold)?;
            let output = output.unwrap_or_else(|| source.join(".agent"));
            let config = CompileConfig::new(source, output)
                .with_split(split)
                .with_workflow_prefix(prefix);
            compile_command(&config)
        }
        Commands::Inspect {
            file,
            max_size,
            threshold,
            prefix,
        } => inspect_command(
            &file,
            SplitConfig::new(max_size, threshold)?,
            &SplitNaming::new(prefix),
        ),
    }
}

/// Execute the compile command.
fn compile_command(config: &CompileConfig) -> Result<()> {
    if !config.source_dir.is_dir() {
        return Err(CompilerError::MissingSource {
            path: config.source_dir.clone(),
        });
    }

    println!(
        "{} {} → {}",
        style("Compiling").bold(),
        style(config.source_dir.display()).cyan(),
        style(config.output_dir.display()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Compiling skills, workflows and resources...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match compile_all(config) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let budget = config.split.budget();
    for workflow in &report.workflows {
        let name = format!("{}{}", config.workflow_prefix, workflow.main.id);
        if workflow.satellites.is_empty() {
            println!("  {} {} ({} chars)", style("✓").green(), name, workflow.main.chars);
        } else {
            println!(
                "  {} {} ({} chars, split into {} sub-workflows)",
                style("✓").green(),
                name,
                workflow.main.chars,
                style(workflow.satellites.len()).yellow()
            );
        }
        if workflow.main.chars > budget {
            println!(
                "    {} over the {budget} character limit",
                style("⚠").yellow().bold()
            );
        }
    }

    println!();
    println!("  Skills: {}", report.skills.len());
    println!("  Workflows: {}", report.workflow_files());
    for (dir, count) in &report.resources {
        println!("  Resources/{dir}: {count}");
    }
    if !report.rules {
        println!("  Rules: {}", style("not found").yellow());
    }

    println!();
    println!(
        "{} {}",
        style("Output:").green().bold(),
        config.output_dir.display()
    );

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(file: &Path, split: SplitConfig, naming: &SplitNaming) -> Result<()> {
    let source = fs::read_to_string(file)?;
    let name = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| CompilerError::InvalidPath(file.to_path_buf()))?;

    let parsed = parse_frontmatter(&source);
    let body = WorkflowCompiler::default().transform_body(&parsed.body);
    let description = parsed.frontmatter.get("description").unwrap_or(name.as_str());
    let frontmatter = Frontmatter::new().with("description", description);
    let chars = Document::new(frontmatter.clone(), body.as_str()).rendered_chars();
    let overhead = chars - body.chars().count();

    println!(
        "{} {} ({} chars, limit {}, cutoff {:.0})",
        style("Inspecting").bold(),
        style(&name).cyan(),
        chars,
        split.budget(),
        split.cutoff()
    );

    let sections = index_sections(&body);
    if sections.is_empty() {
        println!("  No phase sections");
    }
    for section in &sections {
        println!(
            "  Phase {:<6} {:>7} chars  {}",
            section.ordinal, section.size, section.title
        );
    }

    println!();
    if !split.exceeds_budget(chars) {
        println!("{}", style("Within budget, no split needed").green());
        return Ok(());
    }

    match plan_split_with_overhead(&body, &sections, &split, overhead) {
        None => println!(
            "{}",
            style("Over budget with no phase sections, emitted unsplit").yellow()
        ),
        Some(plan) => {
            println!(
                "{} {} chars retained, {} phases extracted",
                style("Split plan:").bold(),
                plan.retained_content.chars().count(),
                plan.overflow.len()
            );
            for satellite in assemble(&name, &frontmatter, plan, naming).satellites {
                println!("  → {}", naming.qualified(&satellite.id));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_compile_defaults() {
        let cli = Cli::parse_from(["antigravity-compiler", "compile"]);

        let Commands::Compile {
            source,
            output,
            max_size,
            threshold,
            prefix,
        } = cli.command
        else {
            panic!("expected compile command");
        };
        assert_eq!(source, PathBuf::from("."));
        assert!(output.is_none());
        assert_eq!(max_size, DEFAULT_MAX_WORKFLOW_SIZE);
        assert!((threshold - DEFAULT_SPLIT_THRESHOLD).abs() < f64::EPSILON);
        assert_eq!(prefix, "gsd:");
    }

    #[test]
    fn test_cli_parse_compile_with_options() {
        let cli = Cli::parse_from([
            "antigravity-compiler",
            "compile",
            "--source",
            "lib",
            "--output",
            "out",
            "--max-size",
            "5000",
            "--threshold",
            "1",
        ]);

        let Commands::Compile {
            source,
            output,
            max_size,
            threshold,
            ..
        } = cli.command
        else {
            panic!("expected compile command");
        };
        assert_eq!(source, PathBuf::from("lib"));
        assert_eq!(output, Some(PathBuf::from("out")));
        assert_eq!(max_size, 5000);
        assert!((threshold - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::parse_from(["antigravity-compiler", "inspect", "commands/gsd/plan.md"]);

        let Commands::Inspect { file, prefix, .. } = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(file, PathBuf::from("commands/gsd/plan.md"));
        assert_eq!(prefix, "gsd:");
    }
}
