//! Canonical section rendering and document splicing.
//!
//! # Responsibility
//! - Render a goal list into canonical section lines.
//! - Splice the rendered section into a document, replacing the located
//!   range or inserting one under a top-level title.
//!
//! # Invariants
//! - Replacement rewrites only the located section; lines outside it
//!   survive verbatim and in order, including the blank run at the
//!   section's tail, which stays put as separation from what follows.
//! - Writes always emit the exact-case heading and lowercase `x` boxes.
//! - A document never gains a second title: an existing leading `# ` line
//!   is reused, otherwise one is synthesized from the period key.
//! - Splicing is a fixed point: applying the same goal list to its own
//!   output reproduces it byte for byte.

use crate::model::goal::Goal;
use crate::model::period::PeriodKey;
use crate::section::locator::{self, SectionRange};
use once_cell::sync::Lazy;
use regex::Regex;

/// Exact heading line written for the managed section.
pub const SECTION_HEADING: &str = "## Weekly Goals";

static TOP_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\s+").expect("valid title regex"));

/// Renders the canonical section: heading plus one line per goal, in input
/// order, no blank separators.
pub fn render(goals: &[Goal]) -> Vec<String> {
    let mut lines = Vec::with_capacity(goals.len() + 1);
    lines.push(SECTION_HEADING.to_string());
    for goal in goals {
        let mark = if goal.checked { 'x' } else { ' ' };
        lines.push(format!("- [{mark}] {}", goal.text));
    }
    lines
}

/// Splices the rendered goal list into `content`.
///
/// Three cases, in order:
/// 1. A managed section exists: its lines are replaced, except that blank
///    lines at the section's tail are left in place; nothing else changes.
/// 2. No section, but the document opens with a top-level `# ` title: the
///    section is inserted right below that title, set off by one blank
///    line on each side.
/// 3. No section and no title (including the empty document): a title is
///    synthesized from `period`, then the blank-separated section, then
///    any pre-existing content.
///
/// For cases 2 and 3, blank lines at the head of the remaining content
/// fold into the single structural separator; the remainder, trailing
/// newline included, is appended unchanged.
pub fn apply(content: &str, goals: &[Goal], period: &PeriodKey) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let rendered = render(goals);

    if let Some(range) = locator::locate(&lines) {
        let end = splice_end(&lines, range);
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        out.extend(lines[..range.start].iter().map(|line| line.to_string()));
        out.extend(rendered);
        out.extend(lines[end..].iter().map(|line| line.to_string()));
        return out.join("\n");
    }

    // `split('\n')` never yields an empty vec, so indexing line 0 is safe.
    let (title, rest): (String, &[&str]) = if TOP_TITLE_RE.is_match(lines[0]) {
        (lines[0].to_string(), &lines[1..])
    } else {
        (format!("# {period}"), &lines[..])
    };

    let rest = trim_leading_empty(rest);
    let mut out: Vec<String> = Vec::with_capacity(rest.len() + rendered.len() + 3);
    out.push(title);
    out.push(String::new());
    out.extend(rendered);
    out.push(String::new());
    out.extend(rest.iter().map(|line| line.to_string()));
    out.join("\n")
}

/// End of the replaced range: the located `range.end`, pulled back past
/// the blank run at the section's tail.
///
/// Those blanks separate the section from following content. Replacing
/// them would make an insert-then-rewrite sequence collapse the structural
/// separator the insert just emitted.
fn splice_end(lines: &[&str], range: SectionRange) -> usize {
    let mut end = range.end;
    while end > range.start + 1 && lines[end - 1].trim().is_empty() {
        end -= 1;
    }
    end
}

fn trim_leading_empty<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let skip = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    &lines[skip..]
}

#[cfg(test)]
mod tests {
    use super::{apply, render};
    use crate::model::goal::Goal;
    use crate::model::period::PeriodKey;
    use chrono::NaiveDate;

    fn period() -> PeriodKey {
        PeriodKey::for_date(NaiveDate::from_ymd_opt(2025, 1, 29).unwrap())
    }

    #[test]
    fn render_emits_canonical_lines() {
        let lines = render(&[Goal::new("a"), Goal::with_state("b", true)]);
        assert_eq!(lines, vec!["## Weekly Goals", "- [ ] a", "- [x] b"]);
    }

    #[test]
    fn render_of_empty_list_is_heading_only() {
        assert_eq!(render(&[]), vec!["## Weekly Goals"]);
    }

    #[test]
    fn apply_replaces_existing_section_only() {
        let content = "# Week\n\nintro prose\n\n## weekly goals\n- [ ] old\nstray line\n\n## Notes\nkeep me";
        let updated = apply(content, &[Goal::new("new")], &period());
        assert_eq!(
            updated,
            "# Week\n\nintro prose\n\n## Weekly Goals\n- [ ] new\n\n## Notes\nkeep me"
        );
    }

    #[test]
    fn apply_inserts_below_existing_title() {
        let content = "# My Week\n\n## Notes\nbody";
        let updated = apply(content, &[Goal::new("a")], &period());
        assert_eq!(
            updated,
            "# My Week\n\n## Weekly Goals\n- [ ] a\n\n## Notes\nbody"
        );
    }

    #[test]
    fn apply_synthesizes_title_for_untitled_content() {
        let updated = apply("plain prose", &[Goal::new("a")], &period());
        assert_eq!(updated, "# 2025-W05\n\n## Weekly Goals\n- [ ] a\n\nplain prose");
    }

    #[test]
    fn apply_synthesizes_title_for_empty_document() {
        let updated = apply("", &[Goal::new("x")], &period());
        assert_eq!(updated, "# 2025-W05\n\n## Weekly Goals\n- [ ] x\n");
    }

    #[test]
    fn insertion_keeps_the_documents_trailing_newline() {
        let updated = apply("# T\n\nprose\n", &[Goal::new("a")], &period());
        assert_eq!(updated, "# T\n\n## Weekly Goals\n- [ ] a\n\nprose\n");
    }

    #[test]
    fn apply_insertion_is_a_fixed_point() {
        let goals = [Goal::new("a"), Goal::with_state("b", true)];
        let first = apply("# 2025-W05\n\n", &goals, &period());
        let second = apply(&first, &goals, &period());
        assert_eq!(first, second);
    }

    #[test]
    fn insert_below_title_then_rewrite_is_byte_identical() {
        let goals = [Goal::new("a")];
        let first = apply("# My Week\n\n## Notes\nbody", &goals, &period());
        let second = apply(&first, &goals, &period());
        assert_eq!(
            first,
            "# My Week\n\n## Weekly Goals\n- [ ] a\n\n## Notes\nbody"
        );
        assert_eq!(first, second);
    }

    #[test]
    fn rewrite_keeps_the_blank_before_the_next_heading() {
        let content = "## Weekly Goals\n- [ ] old\n\n## Next\nbody";
        let updated = apply(content, &[Goal::new("new")], &period());
        assert_eq!(updated, "## Weekly Goals\n- [ ] new\n\n## Next\nbody");
    }
}
