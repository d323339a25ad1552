//! Storage contracts and implementations.
//!
//! # Responsibility
//! - Define the document-store and cache seams the service is generic over.
//! - Provide the filesystem-backed store and in-memory fakes.
//!
//! # Invariants
//! - The document store is the source of truth; the cache is best-effort
//!   and never authoritative.
//! - Store APIs return semantic errors (`StoreError`) instead of leaking
//!   raw I/O errors without path context.

pub mod cache;
pub mod document_store;
