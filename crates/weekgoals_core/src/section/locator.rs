//! Managed-section locator and checkbox parser.
//!
//! # Responsibility
//! - Find the managed section's half-open line range `[start, end)`.
//! - Parse checkbox list items into `Goal` records.
//!
//! # Invariants
//! - The scan is a two-pointer pass over an indexed line slice; no nested
//!   structure is built, so spliced ranges map 1:1 to input lines.
//! - The section heading matches case-insensitively; the first match wins.
//! - Lines that are not checkbox items are skipped, never errors.

use crate::model::goal::Goal;
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*##\s+weekly goals\s*$").expect("valid section heading regex"));
static ANY_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+").expect("valid heading regex"));
static CHECKBOX_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s*\[( |x|X)\]\s+(.*)$").expect("valid checkbox regex"));

/// Half-open line range `[start, end)` of the managed section.
///
/// `start` indexes the heading line itself; `end` indexes the next heading
/// of any level, or one past the last line when the section runs to
/// end-of-document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub start: usize,
    pub end: usize,
}

impl SectionRange {
    /// Line range holding the section body (items without the heading).
    pub fn body(&self) -> std::ops::Range<usize> {
        (self.start + 1)..self.end
    }
}

/// Locates the managed section within `lines`.
///
/// Returns `None` when no line matches the section heading. Only the first
/// matching heading is considered; any later duplicates fall inside or
/// after the located range and are never treated as section starts.
pub fn locate(lines: &[&str]) -> Option<SectionRange> {
    let start = lines
        .iter()
        .position(|line| SECTION_HEADING_RE.is_match(line))?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| ANY_HEADING_RE.is_match(line))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());
    Some(SectionRange { start, end })
}

/// Parses checkbox items from `lines` into goal records.
///
/// A line yields a goal only when it matches
/// `- [<space|x|X>] <text>` (leading whitespace allowed). Everything else
/// is skipped: blank lines, prose, other list markers. Skipped lines are
/// not preserved by the writer, which is the documented lossy
/// normalization of the managed section.
pub fn parse_items(lines: &[&str]) -> Vec<Goal> {
    lines
        .iter()
        .filter_map(|line| {
            let caps = CHECKBOX_ITEM_RE.captures(line)?;
            let checked = caps[1].eq_ignore_ascii_case("x");
            Some(Goal::with_state(caps[2].trim(), checked))
        })
        .collect()
}

/// Extracts the goal list from full document text.
///
/// Convenience for the read path: locate the section, then parse its body.
/// Returns an empty list when no section exists.
pub fn extract_goals(content: &str) -> Vec<Goal> {
    let lines: Vec<&str> = content.split('\n').collect();
    match locate(&lines) {
        Some(range) => parse_items(&lines[range.body()]),
        None => Vec::new(),
    }
}
