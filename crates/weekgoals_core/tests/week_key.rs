use chrono::NaiveDate;
use weekgoals_core::{previous_week, PeriodKey};

fn key(y: i32, m: u32, d: u32) -> String {
    PeriodKey::for_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
        .as_str()
        .to_string()
}

#[test]
fn every_day_of_a_week_shares_one_key() {
    // 2025-W05 runs Monday 2025-01-27 through Sunday 2025-02-02.
    for day in 27..=31 {
        assert_eq!(key(2025, 1, day), "2025-W05");
    }
    assert_eq!(key(2025, 2, 1), "2025-W05");
    assert_eq!(key(2025, 2, 2), "2025-W05");
    assert_eq!(key(2025, 2, 3), "2025-W06");
}

#[test]
fn january_days_can_belong_to_the_previous_iso_year() {
    assert_eq!(key(2021, 1, 1), "2020-W53");
    assert_eq!(key(2021, 1, 3), "2020-W53");
    assert_eq!(key(2021, 1, 4), "2021-W01");
}

#[test]
fn december_days_can_belong_to_the_next_iso_year() {
    assert_eq!(key(2024, 12, 30), "2025-W01");
    assert_eq!(key(2024, 12, 31), "2025-W01");
    assert_eq!(key(2024, 12, 29), "2024-W52");
}

#[test]
fn previous_week_crosses_year_boundaries() {
    let jan6 = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let prev = previous_week(jan6);
    assert_eq!(PeriodKey::for_date(prev).as_str(), "2025-W01");
    assert_eq!(
        PeriodKey::for_date(previous_week(prev)).as_str(),
        "2024-W52"
    );
}

#[test]
fn key_is_filesystem_safe() {
    let name = PeriodKey::for_date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).file_name();
    assert_eq!(name, "2025-W24.md");
    assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.'));
}
