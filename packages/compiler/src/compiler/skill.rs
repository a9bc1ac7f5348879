//! Agent document → skill compilation.

use std::path::Path;

use crate::config::{strip_namespace, DEFAULT_AGENT_DESCRIPTION};
use crate::frontmatter::parse_frontmatter;
use crate::transform::{make_platform_agnostic, rewrite_resource_paths};
use crate::types::{Document, Frontmatter, Satellite};

/// Skill identifier for an agent file name (`gsd-planner.md` → `planner`).
#[must_use]
pub fn skill_id(agent_file_name: &str) -> &str {
    let stem = Path::new(agent_file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(agent_file_name);
    strip_namespace(stem)
}

/// Compile an agent definition into a skill document.
///
/// The skill keeps `name` and `description` only; the body gets the path
/// and host-neutral rewrites but no call rewriting.
#[must_use]
pub fn compile_skill(agent_file_name: &str, source: &str) -> Satellite {
    let id = skill_id(agent_file_name).to_string();
    let parsed = parse_frontmatter(source);
    let description = parsed
        .frontmatter
        .get("description")
        .unwrap_or(DEFAULT_AGENT_DESCRIPTION);

    let body = make_platform_agnostic(&rewrite_resource_paths(&parsed.body));
    let frontmatter = Frontmatter::new()
        .with("name", id.as_str())
        .with("description", description);

    Satellite {
        document: Document::new(frontmatter, format!("{body}\n")),
        id,
    }
}
