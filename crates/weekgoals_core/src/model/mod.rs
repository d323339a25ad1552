//! Domain model for weekly goal tracking.
//!
//! # Responsibility
//! - Define the canonical goal record shared by parser, writer and cache.
//! - Derive the canonical period key for a calendar date.
//!
//! # Invariants
//! - A `Goal` has no identity beyond its position in a list.
//! - Two dates in the same ISO week map to the identical `PeriodKey`.

pub mod goal;
pub mod period;
