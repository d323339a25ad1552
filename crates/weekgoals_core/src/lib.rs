//! Core domain logic for WeekGoals.
//!
//! Synchronizes a bounded, user-editable goal list with the managed
//! `## Weekly Goals` section of one markdown document per ISO week, with
//! carry-forward of unfinished goals and a write-through cache. This crate
//! is the single source of truth for those invariants; storage and cache
//! backends plug in at the trait seams.

pub mod config;
pub mod logging;
pub mod model;
pub mod section;
pub mod service;
pub mod store;

pub use config::{GoalsConfig, DEFAULT_GOALS_FOLDER, DEFAULT_MAX_GOALS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::Goal;
pub use model::period::{previous_week, PeriodKey};
pub use service::goals_service::GoalsService;
pub use store::cache::{cache_key, GoalCache, MemoryGoalCache, CACHE_NAMESPACE};
pub use store::document_store::{
    DocumentStore, FsDocumentStore, MemoryDocumentStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
