//! Resource directory and rules file copying.

use std::fs;
use std::path::Path;

use crate::config::{CompileConfig, HOST_RULES_FILE};
use crate::error::Result;
use crate::fs::{transform_tree, write_atomic};
use crate::invocation::rewrite_task_calls;
use crate::transform::{make_platform_agnostic, rewrite_resource_paths};

/// Resource directories copied from below the resources root.
pub const RESOURCE_DIRS: &[&str] = &["templates", "references", "workflows"];

/// Rewrite a resource file; only UTF-8 markdown is transformed.
#[must_use]
pub fn transform_resource(relative: &Path, contents: Vec<u8>) -> Vec<u8> {
    if !relative.extension().is_some_and(|ext| ext == "md") {
        return contents;
    }
    match String::from_utf8(contents) {
        Ok(text) => {
            let text = make_platform_agnostic(&rewrite_resource_paths(&text));
            rewrite_task_calls(&text).into_bytes()
        }
        Err(e) => {
            tracing::warn!(path = %relative.display(), "Markdown resource is not UTF-8, copied verbatim");
            e.into_bytes()
        }
    }
}

/// Copy every resource directory into `<output>/resources/<dir>`.
///
/// Returns `(dir, file count)` for each copied directory. Missing source
/// directories are skipped with a warning.
pub fn copy_resources(config: &CompileConfig) -> Result<Vec<(String, usize)>> {
    let source_root = config.source_path(&config.layout.resources_dir);
    let dest_root = config.output_dir.join("resources");
    let mut copied = Vec::new();

    for dir in RESOURCE_DIRS {
        let src = source_root.join(dir);
        if !src.is_dir() {
            tracing::warn!(dir, path = %src.display(), "Resource directory not found, skipping");
            continue;
        }

        let count = transform_tree(&src, &dest_root.join(dir), transform_resource)?;
        tracing::info!(dir, files = count, "Copied resources");
        copied.push(((*dir).to_string(), count));
    }

    Ok(copied)
}

/// Copy the host rules file to `<output>/rules/`, if the source has one.
///
/// Returns whether a rules file was written.
pub fn copy_rules(config: &CompileConfig) -> Result<bool> {
    let source = config.source_path(&config.layout.rules_file);
    if !source.is_file() {
        tracing::warn!(path = %source.display(), "Rules file not found, skipping");
        return Ok(false);
    }

    let contents = fs::read(&source)?;
    write_atomic(
        &config.output_dir.join("rules").join(HOST_RULES_FILE),
        &contents,
    )?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_transform_resource_markdown() {
        let out = transform_resource(
            Path::new("phase-prompt.md"),
            b"Use ~/.claude/get-shit-done/templates/x.md\nTask(subagent_type=\"gsd-a\")".to_vec(),
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Use .agent/resources/templates/x.md\n"));
        assert!(text.contains("View file: .agent/skills/a/SKILL.md"));
    }

    #[test]
    fn test_transform_resource_other_files_verbatim() {
        let bytes = b"~/.claude/ Claude".to_vec();
        assert_eq!(transform_resource(Path::new("config.json"), bytes.clone()), bytes);

        let invalid = vec![0xff, 0xfe, b'C'];
        assert_eq!(transform_resource(Path::new("bad.md"), invalid.clone()), invalid);
    }

    #[test]
    fn test_copy_resources_skips_missing_dirs() {
        let source = tempdir().unwrap();
        let output = tempdir().unwrap();
        let templates = source.path().join("get-shit-done/templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("state.md"), "Claude state").unwrap();

        let config = CompileConfig::new(source.path(), output.path());
        let copied = copy_resources(&config).unwrap();

        assert_eq!(copied, vec![("templates".to_string(), 1)]);
        assert_eq!(
            fs::read_to_string(output.path().join("resources/templates/state.md")).unwrap(),
            "Antigravity state"
        );
        assert!(!output.path().join("resources/references").exists());
    }

    #[test]
    fn test_copy_rules() {
        let source = tempdir().unwrap();
        let output = tempdir().unwrap();
        let config = CompileConfig::new(source.path(), output.path());

        assert!(!copy_rules(&config).unwrap());

        fs::create_dir_all(source.path().join("antigravity")).unwrap();
        fs::write(source.path().join("antigravity/GEMINI.md"), "# Rules\nClaude stays").unwrap();
        assert!(copy_rules(&config).unwrap());
        assert_eq!(
            fs::read_to_string(output.path().join("rules/GEMINI.md")).unwrap(),
            "# Rules\nClaude stays"
        );
    }
}
