//! Weekly goals use-case service.
//!
//! # Responsibility
//! - Expose `read_goals` / `write_goals` over a document store and cache.
//! - Apply carry-forward, bounding and write-through cache population.
//!
//! # Invariants
//! - The cache entry for a period always mirrors exactly what was last
//!   persisted by this service, never an intermediate list.
//! - Carry-forward fires only when writing an empty list into a document
//!   that has no managed section, and looks back exactly one week.
//! - Concurrent writes for the same period are not serialized: last write
//!   wins, silently. Callers needing isolation must provide it.

use crate::config::{GoalsConfig, DEFAULT_GOALS_FOLDER};
use crate::model::goal::Goal;
use crate::model::period::{previous_week, PeriodKey};
use crate::section::{locator, writer};
use crate::store::cache::{cache_key, GoalCache};
use crate::store::document_store::{DocumentStore, StoreResult};
use chrono::NaiveDate;
use log::{debug, info};

/// Read/write service for one user's weekly goal documents.
///
/// Generic over the document store (source of truth) and the cache
/// (best-effort); both are constructor-injected so tests can substitute
/// in-memory fakes and assert on staleness behavior directly.
pub struct GoalsService<S: DocumentStore, C: GoalCache> {
    store: S,
    cache: C,
    config: GoalsConfig,
}

impl<S: DocumentStore, C: GoalCache> GoalsService<S, C> {
    /// Creates a service over the given store, cache and settings.
    pub fn new(store: S, cache: C, config: GoalsConfig) -> Self {
        Self {
            store,
            cache,
            config,
        }
    }

    /// Reads the goal list for the week owning `date`.
    ///
    /// Read-through: a valid cache entry is returned as-is; a corrupt
    /// entry counts as a miss. On miss the weekly document is loaded and
    /// parsed, and the cache is populated. A missing document yields an
    /// empty list without touching the cache.
    ///
    /// # Errors
    /// Returns `StoreError` when the document store fails; cache problems
    /// are never surfaced.
    pub fn read_goals(&self, date: NaiveDate) -> StoreResult<Vec<Goal>> {
        let period = PeriodKey::for_date(date);
        let key = cache_key(&period);

        if let Some(raw) = self.cache.get(&key) {
            match serde_json::from_str::<Vec<Goal>>(&raw) {
                Ok(goals) => {
                    debug!(
                        "event=goals_read module=service status=ok period={period} source=cache count={}",
                        goals.len()
                    );
                    return Ok(goals);
                }
                Err(err) => {
                    debug!(
                        "event=cache_corrupt module=service status=recovered period={period} error={err}"
                    );
                }
            }
        }

        let path = self.document_path(&period);
        let content = match self.store.read(&path)? {
            Some(content) => content,
            None => {
                debug!("event=goals_read module=service status=ok period={period} source=absent");
                return Ok(Vec::new());
            }
        };

        let goals = locator::extract_goals(&content);
        self.cache_goals(&period, &goals);
        debug!(
            "event=goals_read module=service status=ok period={period} source=document count={}",
            goals.len()
        );
        Ok(goals)
    }

    /// Writes the goal list for the week owning `date` and returns the
    /// list actually persisted (after carry-forward and bounding).
    ///
    /// Sequence: load or synthesize the document, carry forward last
    /// week's unchecked goals when the precondition holds, clamp to the
    /// configured bound, splice the section, persist, then populate the
    /// cache with the persisted list.
    ///
    /// # Errors
    /// Returns `StoreError` when loading or persisting the document fails.
    /// A failed call leaves the cache untouched.
    pub fn write_goals(&self, date: NaiveDate, goals: Vec<Goal>) -> StoreResult<Vec<Goal>> {
        let period = PeriodKey::for_date(date);
        let path = self.document_path(&period);

        let content = match self.store.read(&path)? {
            Some(content) => content,
            None => format!("# {period}\n\n"),
        };

        let lines: Vec<&str> = content.split('\n').collect();
        let had_section = locator::locate(&lines).is_some();

        let goals = if !had_section && goals.is_empty() {
            let carried = self.previous_week_unchecked(date)?;
            if !carried.is_empty() {
                info!(
                    "event=carry_forward module=service status=ok period={period} count={}",
                    carried.len()
                );
            }
            carried
        } else {
            goals
        };

        let bounded = bound_goals(self.config.max_goals, goals);
        let updated = writer::apply(&content, &bounded, &period);
        self.persist_document(&path, &updated)?;
        self.cache_goals(&period, &bounded);

        info!(
            "event=goals_write module=service status=ok period={period} count={} path={path}",
            bounded.len()
        );
        Ok(bounded)
    }

    /// Folder documents live under; empty configuration falls back to the
    /// default.
    fn goals_folder(&self) -> &str {
        if self.config.goals_folder.is_empty() {
            DEFAULT_GOALS_FOLDER
        } else {
            &self.config.goals_folder
        }
    }

    fn document_path(&self, period: &PeriodKey) -> String {
        format!("{}/{}", self.goals_folder(), period.file_name())
    }

    /// Unchecked goals of the immediately preceding week. One hop only:
    /// the read path never carries forward itself, so an empty previous
    /// week ends the lookup.
    fn previous_week_unchecked(&self, date: NaiveDate) -> StoreResult<Vec<Goal>> {
        let goals = self.read_goals(previous_week(date))?;
        Ok(goals.into_iter().filter(|goal| !goal.checked).collect())
    }

    fn persist_document(&self, path: &str, content: &str) -> StoreResult<()> {
        if self.store.exists(path)? {
            self.store.overwrite(path, content)
        } else {
            self.store.create_folder(self.goals_folder())?;
            self.store.create(path, content)
        }
    }

    fn cache_goals(&self, period: &PeriodKey, goals: &[Goal]) {
        if let Ok(raw) = serde_json::to_string(goals) {
            self.cache.set(&cache_key(period), &raw);
        }
    }
}

/// Order-preserving truncation to `max(1, min(configured, len))` entries.
///
/// The floor of 1 shields against a pathological configured bound of 0;
/// it has no observable effect on an empty list, which stays empty.
fn bound_goals(configured_max: u32, mut goals: Vec<Goal>) -> Vec<Goal> {
    let effective = (configured_max as usize).min(goals.len()).max(1);
    goals.truncate(effective);
    goals
}
