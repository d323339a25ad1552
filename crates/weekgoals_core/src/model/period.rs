//! Period key derivation.
//!
//! # Responsibility
//! - Map a calendar date to the canonical weekly period identifier.
//! - Provide the backward step used by carry-forward.
//!
//! # Invariants
//! - Derivation follows ISO-8601 week numbering: a week belongs to the year
//!   that owns its Thursday, so year-boundary days map to the adjacent
//!   year's first/last week.
//! - The key string is filesystem-safe and stable across processes.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt::{Display, Formatter};

/// Canonical identifier for one ISO week, formatted `<weekYear>-W<ww>`.
///
/// Used both as the cache key component and as the document file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeriodKey(String);

impl PeriodKey {
    /// Derives the period key owning `date`.
    ///
    /// Pure and total; every date belongs to exactly one ISO week.
    pub fn for_date(date: NaiveDate) -> Self {
        let week = date.iso_week();
        Self(format!("{}-W{:02}", week.year(), week.week()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the document file name for this period (`<key>.md`).
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl Display for PeriodKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the date one week before `date`.
///
/// Carry-forward reads exactly one period back; deeper chains are never
/// followed.
pub fn previous_week(date: NaiveDate) -> NaiveDate {
    // NaiveDate covers +/- ~262_000 years; a 7-day step cannot leave it
    // for any date a goals document would carry.
    date.checked_sub_days(Days::new(7)).unwrap_or(date)
}
