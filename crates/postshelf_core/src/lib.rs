//! Core blog post storage for postshelf.
//! This crate is the single source of truth for post invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{RepoConfig, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::post::{
    parse_post_id, IntoPostId, NewPost, Post, PostId, PostPatch, PostStats, PostStatus,
    PostValidationError,
};
pub use model::slug::generate_slug;
pub use repo::post_repo::{PostRepository, RepoError, RepoResult, StorageFailure};
pub use store::{KeyValueStore, MemoryStore, SqliteKvStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
