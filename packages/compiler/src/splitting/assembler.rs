//! Builds the main document and its satellites from a split plan.

use std::collections::HashSet;

use super::types::{Section, SplitNaming, SplitPlan};
use crate::types::{CompiledOutput, Document, Frontmatter, Satellite};

/// Assemble the compiled output of workflow `name` from `plan`.
///
/// Each overflow section becomes a satellite carrying a `parent` reference
/// and a footer pointing back to the main document. The main document keeps
/// `frontmatter` and the retained content, followed by one stub per overflow
/// section in the same order.
///
/// Sections sharing an ordinal would map to the same satellite id; later
/// ones get a `-2`, `-3`, ... suffix so every satellite has its own file.
#[must_use]
pub fn assemble(
    name: &str,
    frontmatter: &Frontmatter,
    plan: SplitPlan,
    naming: &SplitNaming,
) -> CompiledOutput {
    let total = plan.overflow.len();
    let parent = naming.qualified(name);

    let mut body = plan.retained_content;
    if !body.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }

    let mut satellites = Vec::with_capacity(total);
    let mut taken = HashSet::with_capacity(total);
    for (index, section) in plan.overflow.iter().enumerate() {
        let id = unique_id(&mut taken, naming.satellite_id(name, section));
        body.push_str(&render_stub(section, &naming.qualified(&id)));

        let frontmatter = Frontmatter::new()
            .with(
                "description",
                format!("{name} - Phase {}: {}", section.ordinal, section.title),
            )
            .with("parent", parent.as_str());
        let satellite_body = format!(
            "{}\n\n{}",
            section.content.trim(),
            render_footer(section, index + 1, total, &parent)
        );

        tracing::debug!(id = %id, chars = section.size, "Extracted satellite");
        satellites.push(Satellite {
            id,
            document: Document::new(frontmatter, satellite_body),
        });
    }

    CompiledOutput {
        name: name.to_string(),
        main: Document::new(frontmatter.clone(), body),
        satellites,
    }
}

/// First of `base`, `base-2`, `base-3`, ... not yet in `taken`.
fn unique_id(taken: &mut HashSet<String>, base: String) -> String {
    let mut id = base.clone();
    let mut n = 2;
    while taken.contains(&id) {
        id = format!("{base}-{n}");
        n += 1;
    }
    if id != base {
        tracing::warn!(id = %base, renamed = %id, "Duplicate phase ordinal, satellite renamed");
    }
    taken.insert(id.clone());
    id
}

/// Placeholder left in the main document for an extracted section.
///
/// The heading carries an `[Extracted]` marker so it is not indexed as a
/// section when the output is compiled again.
fn render_stub(section: &Section, target: &str) -> String {
    format!(
        "## [Extracted] Phase {n}: {title}

> [!NOTE]
> This phase has been extracted to a separate workflow for size management.

**To continue this phase:**
```
@{target}.md
```

After completing Phase {n}, return here to proceed.

",
        n = section.ordinal,
        title = section.title,
    )
}

fn render_footer(section: &Section, position: usize, total: usize, parent: &str) -> String {
    format!(
        "---

> [!NOTE]
> **Phase {n} complete** ({position} of {total} extracted phases)
>
> Return to the main workflow to continue: `@{parent}.md`
",
        n = section.ordinal,
    )
}
