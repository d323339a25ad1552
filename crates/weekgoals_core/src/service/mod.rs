//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, cache and section handling into the
//!   read/write goal APIs.
//! - Keep callers decoupled from storage and parsing details.

pub mod goals_service;
