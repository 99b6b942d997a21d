//! Repository layer over the key-value backing slot.
//!
//! # Responsibility
//! - Define the use-case oriented post data access API.
//! - Isolate JSON encoding and store access from callers.
//!
//! # Invariants
//! - Repository writes validate input before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to storage read/write errors.

pub mod post_repo;
