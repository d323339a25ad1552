//! Per-period goal cache contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the best-effort key-value seam used by read-through /
//!   write-through caching of goal lists.
//! - Provide the process-local `MemoryGoalCache`.
//!
//! # Invariants
//! - The cache is never authoritative; losing or corrupting an entry only
//!   costs a document re-read.
//! - Keys are namespaced as `<namespace>.<PeriodKey>`.
//! - Entries are never proactively invalidated; external document edits
//!   leave stale values behind by design.

use crate::model::period::PeriodKey;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Namespace prefixed to every cache key.
pub const CACHE_NAMESPACE: &str = "weekgoals.goals";

/// Builds the cache key for one period.
pub fn cache_key(period: &PeriodKey) -> String {
    format!("{CACHE_NAMESPACE}.{period}")
}

/// Best-effort string key-value cache.
///
/// Intentionally infallible: implementations swallow their own failures
/// and degrade to "no cached value". Values are JSON-serialized goal
/// lists produced by the service.
pub trait GoalCache {
    /// Returns the last value stored for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` for `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

impl<T: GoalCache + ?Sized> GoalCache for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Process-local in-memory cache, one instance per service.
#[derive(Debug, Default)]
pub struct MemoryGoalCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryGoalCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl GoalCache for MemoryGoalCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }
}
