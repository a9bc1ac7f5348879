//! Decides which trailing sections leave an oversized document.

use super::types::{Section, SplitPlan};
use crate::config::SplitConfig;

/// Plan a split of `body` along `sections`.
///
/// Sizes accumulate from the preamble. The first section whose inclusion
/// would exceed the cutoff (`budget * threshold`) starts the overflow, and
/// every later section is overflow as well, even if it is small. When all
/// sections fit, the plan has an empty overflow.
///
/// Returns `None` when there are no sections to split on.
///
/// # Examples
/// ```
/// use antigravity_compiler::config::SplitConfig;
/// use antigravity_compiler::splitting::{index_sections, plan_split};
///
/// let body = format!("## Phase 1: A\n{}\n## Phase 2: B\nshort\n", "x".repeat(80));
/// let sections = index_sections(&body);
/// let config = SplitConfig::new(100, 1.0).unwrap();
///
/// let plan = plan_split(&body, &sections, &config).unwrap();
/// assert_eq!(plan.overflow.len(), 1);
/// assert_eq!(plan.overflow[0].ordinal, "2");
/// ```
#[must_use]
pub fn plan_split(body: &str, sections: &[Section], config: &SplitConfig) -> Option<SplitPlan> {
    plan_split_with_overhead(body, sections, config, 0)
}

/// Plan a split like [`plan_split`], counting `overhead` characters of
/// rendered output outside `body` (frontmatter) toward the cutoff.
#[must_use]
pub fn plan_split_with_overhead(
    body: &str,
    sections: &[Section],
    config: &SplitConfig,
    overhead: usize,
) -> Option<SplitPlan> {
    let first = sections.first()?;
    let preamble = &body[..first.range.start];

    let mut accumulated = overhead + preamble.chars().count();
    let mut retained_content = preamble.to_string();
    let mut split_at = sections.len();

    for (i, section) in sections.iter().enumerate() {
        if (accumulated + section.size) as f64 > config.cutoff() {
            split_at = i;
            break;
        }
        accumulated += section.size;
        retained_content.push_str(&section.content);
    }

    tracing::debug!(
        retained_chars = accumulated,
        overflow = sections.len() - split_at,
        cutoff = config.cutoff(),
        "Planned split"
    );

    Some(SplitPlan {
        preamble: preamble.to_string(),
        retained_content,
        overflow: sections[split_at..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitting::index_sections;
    use pretty_assertions::assert_eq;

    /// A section of exactly `size` characters, ending in a newline.
    fn section_text(ordinal: &str, size: usize) -> String {
        let heading = format!("## Phase {ordinal}: Part {ordinal}\n");
        let filler = size - heading.chars().count() - 1;
        format!("{heading}{}\n", "x".repeat(filler))
    }

    fn body_of(preamble: &str, sizes: &[usize]) -> String {
        let mut body = preamble.to_string();
        for (i, size) in sizes.iter().enumerate() {
            body.push_str(&section_text(&(i + 1).to_string(), *size));
        }
        body
    }

    fn plan(body: &str, budget: usize, threshold: f64) -> Option<SplitPlan> {
        let config = SplitConfig::new(budget, threshold).unwrap();
        plan_split(body, &index_sections(body), &config)
    }

    #[test]
    fn test_plan_no_sections_is_none() {
        let body = "x".repeat(20_000);
        assert_eq!(plan(&body, 10_000, 0.9), None);
    }

    #[test]
    fn test_plan_everything_fits() {
        let body = body_of("intro\n", &[100, 100]);
        let plan = plan(&body, 10_000, 0.9).unwrap();

        assert!(!plan.has_overflow());
        assert_eq!(plan.retained_content, body);
        assert_eq!(plan.preamble, "intro\n");
    }

    #[test]
    fn test_plan_crossing_section_starts_overflow() {
        // Cutoff 9,000: 4,000 fits, 4,000 + 6,000 does not.
        let body = body_of("", &[4_000, 6_000, 2_000]);
        let plan = plan(&body, 10_000, 0.9).unwrap();

        let ordinals: Vec<_> = plan.overflow.iter().map(|s| s.ordinal.as_str()).collect();
        assert_eq!(ordinals, vec!["2", "3"]);
        assert_eq!(plan.retained_content.chars().count(), 4_000);
    }

    #[test]
    fn test_plan_overflow_is_suffix_even_for_small_sections() {
        // Section 3 would fit on its own after section 2 is removed.
        let body = body_of("", &[3_000, 8_000, 100, 100]);
        let plan = plan(&body, 10_000, 0.9).unwrap();

        let ordinals: Vec<_> = plan.overflow.iter().map(|s| s.ordinal.as_str()).collect();
        assert_eq!(ordinals, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_plan_equal_sections_only_last_crosses() {
        // 4,000 + 4,000 = 8,000 stays under the 9,000 cutoff.
        let body = body_of("", &[4_000, 4_000, 4_000]);
        let plan = plan(&body, 10_000, 0.9).unwrap();

        assert_eq!(plan.overflow.len(), 1);
        assert_eq!(plan.overflow[0].ordinal, "3");
    }

    #[test]
    fn test_plan_preamble_counts_toward_budget() {
        let preamble = format!("{}\n", "p".repeat(949));
        let body = body_of(&preamble, &[100]);
        let plan = plan(&body, 1_000, 1.0).unwrap();

        assert_eq!(plan.overflow.len(), 1);
        assert_eq!(plan.retained_content, preamble);
    }

    #[test]
    fn test_plan_exact_cutoff_is_retained() {
        let body = body_of("", &[500, 500]);
        let plan = plan(&body, 1_000, 1.0).unwrap();
        assert!(!plan.has_overflow());
    }

    #[test]
    fn test_plan_is_lossless_partition() {
        let body = body_of("# Title\n\nIntro ünïcode.\n\n", &[300, 700, 200, 900]);
        let plan = plan(&body, 1_000, 0.9).unwrap();

        let overflow_chars: usize = plan.overflow.iter().map(|s| s.size).sum();
        assert_eq!(
            plan.retained_content.chars().count() + overflow_chars,
            body.chars().count()
        );

        let mut rebuilt = plan.retained_content.clone();
        for section in &plan.overflow {
            rebuilt.push_str(&section.content);
        }
        assert_eq!(rebuilt, body);
    }

    #[test]
    fn test_plan_overhead_counts_toward_cutoff() {
        let body = body_of("", &[50, 50]);
        let sections = index_sections(&body);
        let config = SplitConfig::new(110, 1.0).unwrap();

        assert!(!plan_split(&body, &sections, &config).unwrap().has_overflow());

        let plan = plan_split_with_overhead(&body, &sections, &config, 40).unwrap();
        let ordinals: Vec<_> = plan.overflow.iter().map(|s| s.ordinal.as_str()).collect();
        assert_eq!(ordinals, vec!["2"]);
    }

    #[test]
    fn test_plan_counts_characters_not_bytes() {
        // 60 two-byte characters: 120 bytes but 60 characters.
        let body = format!("## Phase 1: A\n{}", "é".repeat(60));
        let plan = plan(&body, 80, 1.0).unwrap();
        assert!(!plan.has_overflow());
    }
}
