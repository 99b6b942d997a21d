//! Read-side querying over post collections.
//!
//! # Responsibility
//! - Filter posts by status, category and free text.
//! - Aggregate collection statistics.

pub mod filter;
