//! Host-neutral rewriting of assistant-specific wording.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::config::{HOST_NAME, HOST_RULES_FILE};

/// Numbered "Resolve Model Profile" step heading.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBERED_MODEL_PROFILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## \d+\. Resolve Model Profile").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBERED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## \d+\.").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MODEL_PROFILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## Resolve Model Profile").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MODEL_LOOKUP_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Model lookup table:\*\*").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ANY_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"## ").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PRODUCT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bClaude(?: Code|\.ai)\b").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static RULES_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCLAUDE\.md\b").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ASSISTANT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bClaude\b").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ASSISTANT_NAME_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bCLAUDE\b").expect("valid regex"));

const PROCESS_TAG: &str = "<process>";

/// Marker of the working-directory notice; present once injected.
const CWD_NOTICE_MARKER: &str = "**CRITICAL:** Execute all commands";

const CWD_NOTICE: &str = "\n\n> [!IMPORTANT]\n> **Context:** You are operating in the user's PROJECT DIRECTORY.\n> **CRITICAL:** Execute all commands (ls, cat, mkdir) in the current working directory. DO NOT cd into the workflow source directories.\n";

/// Rewrite a document so it reads as written for the host assistant.
///
/// Removes model-profile sections and model lookup tables, renames the
/// source assistant and its rules file, and injects a working-directory
/// notice after each `<process>` tag unless one is already present.
///
/// # Examples
/// ```
/// use antigravity_compiler::transform::make_platform_agnostic;
///
/// assert_eq!(
///     make_platform_agnostic("Ask Claude Code to read CLAUDE.md"),
///     "Ask Antigravity to read GEMINI.md"
/// );
/// ```
#[must_use]
pub fn make_platform_agnostic(text: &str) -> String {
    let text = remove_blocks(text, &NUMBERED_MODEL_PROFILE, &NUMBERED_HEADING);
    let text = remove_blocks(&text, &MODEL_PROFILE, &ANY_HEADING);
    let text = remove_blocks(&text, &MODEL_LOOKUP_TABLE, &ANY_HEADING);

    let upper_host = HOST_NAME.to_uppercase();
    let text = PRODUCT_NAME.replace_all(&text, NoExpand(HOST_NAME));
    let text = ASSISTANT_NAME.replace_all(&text, NoExpand(HOST_NAME));
    let text = RULES_FILE.replace_all(&text, NoExpand(HOST_RULES_FILE));
    let text = ASSISTANT_NAME_UPPER.replace_all(&text, NoExpand(upper_host.as_str()));

    inject_cwd_notice(&text)
}

/// Cut every region from a `start` match up to the next `stop` match after
/// it, or to the end of the text.
fn remove_blocks(text: &str, start: &Regex, stop: &Regex) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(found) = start.find_at(text, cursor) {
        out.push_str(&text[cursor..found.start()]);
        cursor = stop
            .find_at(text, found.end())
            .map_or(text.len(), |next| next.start());
        tracing::trace!(removed = cursor - found.start(), "Removed model profile block");
    }

    out.push_str(&text[cursor..]);
    out
}

fn inject_cwd_notice(text: &str) -> String {
    if !text.contains(PROCESS_TAG) || text.contains(CWD_NOTICE_MARKER) {
        return text.to_string();
    }
    text.replace(PROCESS_TAG, &format!("{PROCESS_TAG}{CWD_NOTICE}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_removes_numbered_model_profile_section() {
        let text = "## 1. Setup\nA\n## 2. Resolve Model Profile\nlookup\n## 3. Run\nB\n";
        assert_eq!(
            make_platform_agnostic(text),
            "## 1. Setup\nA\n## 3. Run\nB\n"
        );
    }

    #[test]
    fn test_removes_unnumbered_model_profile_to_end() {
        let text = "Intro\n## Resolve Model Profile\nprofile table\nmore\n";
        assert_eq!(make_platform_agnostic(text), "Intro\n");
    }

    #[test]
    fn test_removes_model_lookup_table() {
        let text = "Step\n**Model lookup table:**\n| a | b |\n## Next\nrest";
        assert_eq!(make_platform_agnostic(text), "Step\n## Next\nrest");
    }

    #[test]
    fn test_renames_assistant() {
        assert_eq!(
            make_platform_agnostic("claude code, Claude.ai and Claude's notes"),
            "Antigravity, Antigravity and Antigravity's notes"
        );
        assert_eq!(
            make_platform_agnostic("CLAUDE rules live in CLAUDE.md"),
            "ANTIGRAVITY rules live in GEMINI.md"
        );
    }

    #[test]
    fn test_rename_respects_word_boundaries() {
        let text = "Claudette and claude stay";
        assert_eq!(make_platform_agnostic(text), text);
    }

    #[test]
    fn test_injects_cwd_notice_once() {
        let once = make_platform_agnostic("<process>\nStep 1\n</process>");
        assert!(once.starts_with("<process>\n\n> [!IMPORTANT]\n> **Context:**"));
        assert_eq!(once.matches(CWD_NOTICE_MARKER).count(), 1);

        assert_eq!(make_platform_agnostic(&once), once);
    }

    #[test]
    fn test_no_process_tag_no_notice() {
        let text = "Plain instructions";
        assert_eq!(make_platform_agnostic(text), text);
    }
}
