//! Rendering of embedded `Task(...)` calls as skill invocation blocks.

use crate::config::{HOST_NAME, NAMESPACE_PREFIX, SKILLS_DIR, TASK_CALL_NAMES};
use crate::scanner::{ArgValue, CallExpression, CallScanner};

/// Task context used when a call carries no prompt.
pub const DEFAULT_PROMPT: &str = "Follow the skill instructions";

/// Template expansion from a call expression to an instruction block.
#[derive(Debug, Clone)]
pub struct InvocationRenderer {
    namespace_prefix: String,
    skills_dir: String,
    host_name: String,
}

impl InvocationRenderer {
    /// Renderer with explicit naming.
    #[must_use]
    pub fn new(
        namespace_prefix: impl Into<String>,
        skills_dir: impl Into<String>,
        host_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace_prefix: namespace_prefix.into(),
            skills_dir: skills_dir.into(),
            host_name: host_name.into(),
        }
    }

    /// Skill name for a handler identifier (`gsd-plan-checker` → `plan-checker`).
    #[must_use]
    pub fn skill_name<'a>(&self, handler: &'a str) -> &'a str {
        handler
            .strip_prefix(self.namespace_prefix.as_str())
            .unwrap_or(handler)
    }

    /// Render the instruction block for one call.
    ///
    /// A call without a handler renders against an empty skill name; callers
    /// that need to leave such calls untouched should use
    /// [`rewrite_invocations`].
    #[must_use]
    pub fn render(&self, call: &CallExpression) -> String {
        let skill = self.skill_name(call.handler().unwrap_or_default());
        let prompt = match call.prompt() {
            Some(ArgValue::Text(text)) if !text.is_empty() => text.clone(),
            Some(ArgValue::Identifier(name)) => format!("{{{name}}}"),
            Some(ArgValue::Expression(expr)) if !expr.is_empty() => expr.clone(),
            _ => DEFAULT_PROMPT.to_string(),
        };
        let host = &self.host_name;
        let skills_dir = &self.skills_dir;

        format!(
            "
## {heading}

**Context:** You are operating in the user's PROJECT DIRECTORY.
**CRITICAL:** Execute all commands (ls, cat, mkdir) in the current working directory. DO NOT cd into the workflow source directories.

**Task Context:**
{prompt}

**How to proceed:**
1. Read the {skill} skill:
   ```
   View file: {skills_dir}/{skill}/SKILL.md
   ```
2. Follow the skill's instructions, applying them to the task context above. Note: You are {host}, follow the instructions as {host}.
3. Create outputs as specified in the skill
",
            heading = title_case(skill),
        )
    }
}

impl Default for InvocationRenderer {
    fn default() -> Self {
        Self::new(NAMESPACE_PREFIX, SKILLS_DIR, HOST_NAME)
    }
}

/// Title-case a dash-separated name (`plan-checker` → `Plan Checker`).
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Replace every call with a handler by its rendered block.
///
/// Calls without a handler and malformed candidates are copied unchanged.
#[must_use]
pub fn rewrite_invocations(
    text: &str,
    scanner: &CallScanner,
    renderer: &InvocationRenderer,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for call in scanner.scan(text) {
        let Some(handler) = call.handler() else {
            tracing::debug!(name = %call.name, "Call without handler left as text");
            continue;
        };
        tracing::debug!(name = %call.name, handler, "Rewriting call");
        out.push_str(&text[cursor..call.span.start]);
        out.push_str(&renderer.render(&call));
        cursor = call.span.end;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Rewrite `Task(...)` calls with the default renderer.
#[must_use]
pub fn rewrite_task_calls(text: &str) -> String {
    rewrite_invocations(
        text,
        &CallScanner::for_names(TASK_CALL_NAMES.iter().copied()),
        &InvocationRenderer::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn first_call(text: &str) -> CallExpression {
        CallScanner::for_names(["Task"])
            .scan(text)
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("plan-checker"), "Plan Checker");
        assert_eq!(title_case("writer"), "Writer");
        assert_eq!(title_case("a--b"), "A  B");
    }

    #[test]
    fn test_render_escaped_quote_prompt() {
        let call = first_call(r#"Task(prompt="Say \"hi\"", subagent_type="gsd-writer")"#);
        let block = InvocationRenderer::default().render(&call);

        assert!(block.contains("\n## Writer\n"));
        assert!(block.contains("**Task Context:**\nSay \"hi\"\n"));
        assert!(block.contains("1. Read the writer skill:"));
        assert!(block.contains("View file: .agent/skills/writer/SKILL.md"));
        assert!(!block.contains("gsd-"));
    }

    #[test]
    fn test_render_default_prompt() {
        let call = first_call(r#"Task(subagent_type="gsd-plan-checker")"#);
        let block = InvocationRenderer::default().render(&call);

        assert!(block.contains("## Plan Checker"));
        assert!(block.contains(&format!("**Task Context:**\n{DEFAULT_PROMPT}\n")));
    }

    #[test]
    fn test_render_identifier_prompt_is_symbolic() {
        let call = first_call("Task(prompt=filled_prompt, subagent_type=\"gsd-executor\")");
        let block = InvocationRenderer::default().render(&call);
        assert!(block.contains("**Task Context:**\n{filled_prompt}\n"));
    }

    #[test]
    fn test_render_custom_naming() {
        let renderer = InvocationRenderer::new("acme-", "skills", "Helper");
        let call = first_call(r#"Task(prompt="p", subagent_type="acme-reviewer")"#);
        let block = renderer.render(&call);

        assert!(block.contains("## Reviewer"));
        assert!(block.contains("View file: skills/reviewer/SKILL.md"));
        assert!(block.contains("Note: You are Helper, follow the instructions as Helper."));
    }

    #[test]
    fn test_skill_name_strips_only_configured_prefix() {
        let default = InvocationRenderer::default();
        assert_eq!(default.skill_name("gsd-plan-checker"), "plan-checker");
        assert_eq!(default.skill_name("acme-reviewer"), "acme-reviewer");

        let custom = InvocationRenderer::new("acme-", "skills", "Helper");
        assert_eq!(custom.skill_name("acme-reviewer"), "reviewer");
        assert_eq!(custom.skill_name("gsd-writer"), "gsd-writer");
    }

    #[test]
    fn test_render_is_deterministic() {
        let call = first_call(r#"Task(prompt="x", subagent_type="gsd-y")"#);
        let renderer = InvocationRenderer::default();
        assert_eq!(renderer.render(&call), renderer.render(&call));
    }

    #[test]
    fn test_rewrite_removes_call_syntax() {
        let text = "Spawn:\n\nTask(\n  prompt=\"Research (deeply), then report\",\n  subagent_type=\"gsd-project-researcher\",\n  description=\"Research\"\n)\n\nDone.";
        let out = rewrite_task_calls(text);

        assert!(!out.contains("Task("));
        assert!(!out.contains("subagent_type"));
        assert!(out.contains("## Project Researcher"));
        assert!(out.contains("Research (deeply), then report"));
        assert!(out.starts_with("Spawn:\n\n"));
        assert!(out.ends_with("\n\nDone."));
    }

    #[test]
    fn test_rewrite_leaves_handlerless_call_untouched() {
        let text = r#"Task(prompt="no target") stays"#;
        assert_eq!(rewrite_task_calls(text), text);
    }

    #[test]
    fn test_rewrite_leaves_malformed_call_byte_identical() {
        let text = "Before Task(prompt=\"unterminated, subagent_type=\"gsd-x\") after\nTask(prompt=(open, subagent_type=\"gsd-y\"";
        assert_eq!(rewrite_task_calls(text), text);
    }

    #[test]
    fn test_rewrite_mixed_valid_and_malformed() {
        let text = "A Task(subagent_type=\"gsd-writer\") B Task(prompt=\"oops";
        let out = rewrite_task_calls(text);
        assert!(out.starts_with("A \n## Writer\n"));
        assert!(out.ends_with(" B Task(prompt=\"oops"));
    }
}
