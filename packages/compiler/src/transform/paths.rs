//! Rewriting of source install paths to the host's project-local layout.

use regex::Regex;
use std::sync::LazyLock;

/// `~/.claude/get-shit-done/<resource dir>/`, optionally `@`-prefixed.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static RESOURCE_DIR_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@?~/\.claude/get-shit-done/(?P<dir>templates|references|workflows)/")
        .expect("valid regex")
});

/// `~/.claude/agents/gsd-<name>.md`, optionally `@`-prefixed.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static AGENT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@?~/\.claude/agents/gsd-(?P<name>[a-z-]+)\.md").expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PACKAGE_ROOT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~/\.claude/get-shit-done/").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INSTALL_ROOT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~/\.claude/").expect("valid regex"));

/// Rewrite install-location paths into `.agent/` paths.
///
/// Resource directories map to `.agent/resources/<dir>/`, agent definitions
/// map to their compiled skill file, and any other install path falls back
/// to `.agent/resources/`. Rules apply in that order.
///
/// # Examples
/// ```
/// use antigravity_compiler::transform::rewrite_resource_paths;
///
/// assert_eq!(
///     rewrite_resource_paths("See @~/.claude/agents/gsd-planner.md"),
///     "See .agent/skills/planner/SKILL.md"
/// );
/// ```
#[must_use]
pub fn rewrite_resource_paths(text: &str) -> String {
    let text = RESOURCE_DIR_PATH.replace_all(text, ".agent/resources/${dir}/");
    let text = AGENT_PATH.replace_all(&text, ".agent/skills/${name}/SKILL.md");
    let text = PACKAGE_ROOT_PATH.replace_all(&text, ".agent/resources/");
    INSTALL_ROOT_PATH
        .replace_all(&text, ".agent/resources/")
        .into_owned()
}
