use chrono::NaiveDate;
use weekgoals_core::section::{apply, extract_goals, locate, render};
use weekgoals_core::{Goal, PeriodKey};

fn period() -> PeriodKey {
    PeriodKey::for_date(NaiveDate::from_ymd_opt(2025, 1, 29).unwrap())
}

#[test]
fn only_the_first_section_heading_is_authoritative() {
    let content = "## Weekly Goals\n- [ ] first\n\n# Divider\n\n## Weekly Goals\n- [ ] impostor\n";
    assert_eq!(extract_goals(content), vec![Goal::new("first")]);

    let updated = apply(content, &[Goal::new("rewritten")], &period());
    // The first section is replaced; the later duplicate is untouched
    // content below the divider heading.
    assert_eq!(
        updated,
        "## Weekly Goals\n- [ ] rewritten\n\n# Divider\n\n## Weekly Goals\n- [ ] impostor\n"
    );
}

#[test]
fn heading_matches_case_insensitively_but_writes_exact_case() {
    let content = "# W\n\n## wEeKlY gOaLs\n- [ ] a\n";
    let lines: Vec<&str> = content.split('\n').collect();
    assert!(locate(&lines).is_some());

    let updated = apply(content, &[Goal::new("a")], &period());
    assert!(updated.contains("## Weekly Goals"));
    assert!(!updated.contains("wEeKlY"));
}

#[test]
fn uppercase_checkboxes_read_as_checked_and_write_lowercase() {
    let content = "## Weekly Goals\n- [X] shouted\n";
    let goals = extract_goals(content);
    assert_eq!(goals, vec![Goal::with_state("shouted", true)]);

    let updated = apply(content, &goals, &period());
    assert!(updated.contains("- [x] shouted"));
    assert!(!updated.contains("- [X]"));
}

#[test]
fn non_goal_lines_inside_the_section_are_dropped_on_rewrite() {
    let content = "## Weekly Goals\n- [ ] keep\nstray prose\n* [ ] wrong marker\n\n## Next\nbody";
    let goals = extract_goals(content);
    assert_eq!(goals, vec![Goal::new("keep")]);

    let updated = apply(content, &goals, &period());
    assert_eq!(updated, "## Weekly Goals\n- [ ] keep\n\n## Next\nbody");
}

#[test]
fn section_running_to_end_of_document_is_fully_replaced() {
    let content = "# Title\n\n## Weekly Goals\n- [ ] a\ntrailing junk\nmore junk";
    let updated = apply(content, &[Goal::new("b")], &period());
    assert_eq!(updated, "# Title\n\n## Weekly Goals\n- [ ] b");
}

#[test]
fn lines_before_and_after_survive_verbatim() {
    let before = "# Title\n\npreamble one\npreamble two\n";
    let after = "## After\nline a\nline b\n";
    let content = format!("{before}\n## Weekly Goals\n- [ ] old\n{after}");

    let updated = apply(&content, &[Goal::new("new")], &period());
    assert!(updated.starts_with(before));
    assert!(updated.ends_with(&after));
}

#[test]
fn render_then_extract_preserves_order_and_state() {
    let goals = vec![
        Goal::new("first"),
        Goal::with_state("second", true),
        Goal::new("third"),
    ];
    let content = render(&goals).join("\n");
    assert_eq!(extract_goals(&content), goals);
}
