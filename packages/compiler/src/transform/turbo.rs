//! `// turbo` annotations for read-only shell snippets.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const TURBO_MARKER: &str = "// turbo\n";

/// Single-line bash block running a file test, `git status`, `ls`, `cat` or `echo`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SAFE_COMMAND_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```bash\n((?:\[ -[fd] .*?\]|git status|ls |cat |echo ).*?\n)```")
        .expect("valid regex")
});

/// Mark safe single-command bash blocks so the host may auto-run them.
///
/// Blocks that already carry the marker are left alone.
///
/// # Examples
/// ```
/// use antigravity_compiler::transform::add_turbo_annotations;
///
/// let text = "```bash\nls .planning/\n```";
/// assert_eq!(add_turbo_annotations(text), "// turbo\n```bash\nls .planning/\n```");
/// ```
#[must_use]
pub fn add_turbo_annotations(text: &str) -> String {
    SAFE_COMMAND_BLOCK
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let already_marked = caps
                .get(0)
                .is_some_and(|m| text[..m.start()].ends_with(TURBO_MARKER));
            if already_marked {
                whole.to_string()
            } else {
                format!("{TURBO_MARKER}{whole}")
            }
        })
        .into_owned()
}
