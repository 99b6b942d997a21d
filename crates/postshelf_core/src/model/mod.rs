//! Blog post domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by the repository and queries.
//! - Own slug derivation, the only pure transform on post data.
//!
//! # Invariants
//! - Every post is identified by a positive integer `PostId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod post;
pub mod slug;
