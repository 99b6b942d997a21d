//! Post repository over a single key-value slot.
//!
//! # Responsibility
//! - Provide CRUD and read-side queries over the stored post collection.
//! - Own id assignment, slug defaulting and timestamping.
//!
//! # Invariants
//! - Every operation reads the whole collection; every write replaces it.
//! - New posts are prepended, so stored order is most-recent-first.
//! - An unreadable stored value counts as an empty collection for writes,
//!   unless `RepoConfig::protect_unreadable` is set.
//! - Public operations never panic; failures are logged and returned.

use crate::clock::{Clock, SystemClock};
use crate::config::RepoConfig;
use crate::model::post::{
    IntoPostId, NewPost, Post, PostId, PostPatch, PostStats, PostValidationError,
};
use crate::model::slug::generate_slug;
use crate::search::filter;
use crate::seed::default_posts;
use crate::store::{KeyValueStore, StoreError};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Underlying cause of a storage read or write failure.
#[derive(Debug)]
pub enum StorageFailure {
    Store(StoreError),
    Json(serde_json::Error),
}

impl Display for StorageFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "json: {err}"),
        }
    }
}

impl Error for StorageFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

/// Repository error for post persistence and lookups.
#[derive(Debug)]
pub enum RepoError {
    /// Stored value is inaccessible or malformed.
    StorageRead { key: String, source: StorageFailure },
    /// Encoding failed or the store rejected the write.
    StorageWrite { key: String, source: StorageFailure },
    NotFound(PostId),
    /// Textual id without a leading integer.
    InvalidId,
    Validation(PostValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageRead { key, source } => {
                write!(f, "failed to load posts from `{key}`: {source}")
            }
            Self::StorageWrite { key, source } => {
                write!(f, "failed to save posts to `{key}`: {source}")
            }
            Self::NotFound(id) => write!(f, "post not found: {id}"),
            Self::InvalidId => write!(f, "post id is not an integer"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageRead { source, .. } | Self::StorageWrite { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::InvalidId => None,
        }
    }
}

impl From<PostValidationError> for RepoError {
    fn from(value: PostValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Blog post repository bound to one store slot.
///
/// Owned by the application's composition root; there is no global instance.
pub struct PostRepository<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    config: RepoConfig,
}

impl<S: KeyValueStore> PostRepository<S> {
    /// Creates a repository with default config and the system clock.
    ///
    /// Seeds example posts when the slot is empty.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SystemClock, RepoConfig::default())
    }
}

impl<S: KeyValueStore, C: Clock> PostRepository<S, C> {
    /// Creates a repository and runs [`Self::initialize`] when
    /// `config.seed_defaults` is set.
    ///
    /// Seeding failures are logged and do not prevent construction.
    pub fn with_config(store: S, clock: C, config: RepoConfig) -> Self {
        let mut repo = Self {
            store,
            clock,
            config,
        };
        if repo.config.seed_defaults {
            if let Err(err) = repo.initialize() {
                warn!(
                    "event=posts_seed module=repo status=skipped key={} error={}",
                    repo.config.storage_key, err
                );
            }
        }
        repo
    }

    /// Seeds example posts when the stored collection is empty.
    ///
    /// Returns `Ok(true)` when seeds were written and `Ok(false)` when the
    /// slot already held posts.
    ///
    /// An unreadable stored value counts as empty and is replaced by the seeds.
    ///
    /// # Errors
    /// - `StorageRead` only with `protect_unreadable`; the value is left as is.
    /// - `StorageWrite` when persisting the seeds fails.
    pub fn initialize(&mut self) -> RepoResult<bool> {
        if !self.load_for_write()?.is_empty() {
            return Ok(false);
        }

        let seeds = default_posts(self.clock.now());
        self.save(&seeds)?;
        info!(
            "event=posts_seed module=repo status=ok key={} count={}",
            self.config.storage_key,
            seeds.len()
        );
        Ok(true)
    }

    /// Reads and decodes the stored collection.
    ///
    /// A missing key is an empty collection.
    pub fn load(&self) -> RepoResult<Vec<Post>> {
        let key = self.config.storage_key.as_str();
        let raw = self.store.get(key).map_err(|err| {
            self.read_error(StorageFailure::Store(err))
        })?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|err| self.read_error(StorageFailure::Json(err)))
    }

    /// Collection that a write starts from.
    ///
    /// Read failures are already logged by `load`; they degrade to an empty
    /// collection unless `protect_unreadable` is set.
    fn load_for_write(&self) -> RepoResult<Vec<Post>> {
        match self.load() {
            Ok(posts) => Ok(posts),
            Err(err) if self.config.protect_unreadable => Err(err),
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Returns every stored post in stored order.
    ///
    /// Read failures are logged and yield an empty list.
    pub fn get_all(&self) -> Vec<Post> {
        self.load().unwrap_or_default()
    }

    /// Returns posts with status `published`.
    pub fn get_published(&self) -> Vec<Post> {
        filter::published(&self.get_all())
    }

    /// Returns the first post whose slug equals `slug`.
    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        self.get_all().into_iter().find(|post| post.slug == slug)
    }

    /// Returns the first post with the given id.
    ///
    /// Text ids are coerced to their leading integer; non-numeric text finds
    /// nothing.
    pub fn get_by_id(&self, id: impl IntoPostId) -> Option<Post> {
        let id = id.into_post_id()?;
        self.get_all().into_iter().find(|post| post.id == id)
    }

    /// Encodes and persists the full collection, replacing the stored value.
    pub fn save(&mut self, posts: &[Post]) -> RepoResult<()> {
        let key = self.config.storage_key.as_str();
        let encoded = serde_json::to_string(posts)
            .map_err(|err| write_error(key, StorageFailure::Json(err)))?;
        self.store
            .set(key, &encoded)
            .map_err(|err| write_error(key, StorageFailure::Store(err)))?;

        debug!(
            "event=posts_save module=repo status=ok key={} count={} bytes={}",
            key,
            posts.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Creates a post and prepends it to the collection.
    ///
    /// # Contract
    /// - `id` is one more than the largest stored id, or 1 when empty.
    /// - `slug` is derived from `title` when absent or empty.
    /// - `views` starts at 0; `created_at == updated_at == now`.
    ///
    /// # Errors
    /// - `Validation` for a blank title.
    /// - `StorageRead` (only with `protect_unreadable`) or `StorageWrite`.
    pub fn add(&mut self, new_post: NewPost) -> RepoResult<Post> {
        new_post.validate()?;
        let mut posts = self.load_for_write()?;
        let now = self.clock.now();

        let NewPost {
            title,
            excerpt,
            content,
            image,
            date,
            author,
            slug,
            category,
            status,
            featured,
        } = new_post;
        let slug = match slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => generate_slug(&title),
        };

        let post = Post {
            id: next_id(&posts),
            title,
            excerpt,
            content,
            image,
            date,
            author,
            slug,
            category,
            status,
            views: 0,
            featured,
            created_at: now,
            updated_at: Some(now),
        };

        posts.insert(0, post.clone());
        self.save(&posts)?;
        info!(
            "event=post_add module=repo status=ok post_id={} total={}",
            post.id,
            posts.len()
        );
        Ok(post)
    }

    /// Merges `patch` into the post with the given id and refreshes
    /// `updated_at`. Returns the merged post.
    ///
    /// # Errors
    /// - `InvalidId`/`NotFound` without touching storage.
    /// - `Validation` when the patch sets a non-positive or duplicate id.
    /// - `StorageRead` (only with `protect_unreadable`) or `StorageWrite`.
    pub fn update(&mut self, id: impl IntoPostId, patch: PostPatch) -> RepoResult<Post> {
        let id = id.into_post_id().ok_or(RepoError::InvalidId)?;
        let mut posts = self.load_for_write()?;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(RepoError::NotFound(id))?;

        if let Some(new_id) = patch.id {
            if new_id <= 0 {
                return Err(PostValidationError::NonPositiveId(new_id).into());
            }
            let taken = posts
                .iter()
                .enumerate()
                .any(|(other, post)| other != index && post.id == new_id);
            if taken {
                return Err(PostValidationError::DuplicateId(new_id).into());
            }
        }

        let post = &mut posts[index];
        post.apply_patch(patch);
        post.updated_at = Some(self.clock.now());
        let updated = post.clone();

        self.save(&posts)?;
        info!(
            "event=post_update module=repo status=ok post_id={} lookup_id={}",
            updated.id, id
        );
        Ok(updated)
    }

    /// Removes every post with the given id and persists the result.
    ///
    /// Returns how many posts were removed; zero is still a success because
    /// the outcome reflects the persist step.
    pub fn delete(&mut self, id: impl IntoPostId) -> RepoResult<usize> {
        let id = id.into_post_id();
        let mut posts = self.load_for_write()?;
        let before = posts.len();
        if let Some(id) = id {
            posts.retain(|post| post.id != id);
        }
        let removed = before - posts.len();

        self.save(&posts)?;
        info!(
            "event=post_delete module=repo status=ok post_id={} removed={}",
            id.map_or_else(|| "invalid".to_string(), |id| id.to_string()),
            removed
        );
        Ok(removed)
    }

    /// Published posts in `category` (case-insensitive); `"all"` returns all
    /// published posts.
    pub fn get_by_category(&self, category: &str) -> Vec<Post> {
        filter::by_category(&self.get_all(), category)
    }

    /// Published posts whose title, excerpt, author or category contains `query`.
    pub fn search(&self, query: &str) -> Vec<Post> {
        filter::matching_text(&self.get_all(), query)
    }

    /// Totals across all posts, drafts included.
    pub fn get_stats(&self) -> PostStats {
        filter::stats(&self.get_all())
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn read_error(&self, source: StorageFailure) -> RepoError {
        error!(
            "event=posts_load module=repo status=error key={} error={}",
            self.config.storage_key, source
        );
        RepoError::StorageRead {
            key: self.config.storage_key.clone(),
            source,
        }
    }
}

fn write_error(key: &str, source: StorageFailure) -> RepoError {
    error!(
        "event=posts_save module=repo status=error key={} error={}",
        key, source
    );
    RepoError::StorageWrite {
        key: key.to_string(),
        source,
    }
}

fn next_id(posts: &[Post]) -> PostId {
    posts.iter().map(|post| post.id).fold(0, PostId::max) + 1
}
