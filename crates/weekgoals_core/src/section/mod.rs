//! Managed-section handling for weekly documents.
//!
//! # Responsibility
//! - Locate the single managed section inside a line-oriented document.
//! - Parse checkbox items into goal records and render them back.
//! - Splice the canonical section into a document without touching
//!   surrounding content.
//!
//! # Invariants
//! - Only the first occurrence of the section heading is authoritative.
//! - Content outside the managed line range is preserved verbatim.
//! - Non-goal lines inside the managed range are dropped on rewrite.

pub mod locator;
pub mod writer;

pub use locator::{extract_goals, locate, parse_items, SectionRange};
pub use writer::{apply, render, SECTION_HEADING};
