//! Post domain model.
//!
//! # Responsibility
//! - Define the canonical blog post record and its wire shape.
//! - Define input shapes for create (`NewPost`) and partial update (`PostPatch`).
//!
//! # Invariants
//! - `id` is positive and unique within one stored collection.
//! - `created_at` is set once at creation and never patched.
//! - Wire field names are camelCase (`createdAt`, `updatedAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Integer identifier assigned as `max(existing) + 1` on creation.
pub type PostId = i64;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Visible to readers and to all read-side queries.
    Published,
    /// Only visible through `get_all`/`get_by_id`/`get_by_slug`.
    #[default]
    Draft,
}

/// Canonical blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// HTML/markup body.
    #[serde(default)]
    pub content: String,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Human-readable display date, e.g. `December 15, 2024`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: PostStatus,
    /// Missing values are treated as zero.
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    /// Absent for records that were never written through `add`/`update`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Returns whether this post is visible to reader-facing queries.
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Applies a shallow merge: present patch fields overwrite, absent fields stay.
    ///
    /// Does not touch timestamps; callers own `updated_at`.
    pub fn apply_patch(&mut self, patch: PostPatch) {
        let PostPatch {
            id,
            title,
            excerpt,
            content,
            image,
            date,
            author,
            slug,
            category,
            status,
            views,
            featured,
        } = patch;

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(views) = views {
            self.views = views;
        }
        if let Some(featured) = featured {
            self.featured = featured;
        }
    }
}

/// Input for creating a post.
///
/// `id`, `views` and timestamps are owned by the repository and are not part
/// of this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub date: String,
    pub author: String,
    /// Derived from `title` when `None` or empty.
    pub slug: Option<String>,
    pub category: String,
    pub status: PostStatus,
    pub featured: bool,
}

impl NewPost {
    /// Creates a draft with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Rejects inputs that cannot become a valid post.
    pub fn validate(&self) -> Result<(), PostValidationError> {
        if self.title.trim().is_empty() {
            return Err(PostValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Partial update for an existing post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPatch {
    /// Overwrites the record id. Must stay positive and unique.
    pub id: Option<PostId>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub status: Option<PostStatus>,
    pub views: Option<u64>,
    pub featured: Option<bool>,
}

impl PostPatch {
    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Aggregate counters over the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    pub total_views: u64,
}

/// Domain validation failures for post writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyTitle,
    NonPositiveId(PostId),
    DuplicateId(PostId),
}

impl Display for PostValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "post title cannot be empty"),
            Self::NonPositiveId(id) => write!(f, "post id must be positive, got {id}"),
            Self::DuplicateId(id) => write!(f, "post id {id} is already in use"),
        }
    }
}

impl Error for PostValidationError {}

/// Conversion into a post id with integer coercion for textual input.
///
/// Text is read like a lenient integer parse: leading whitespace and an
/// optional sign are accepted, digits are consumed until the first
/// non-digit, and input without leading digits yields `None`.
pub trait IntoPostId {
    fn into_post_id(self) -> Option<PostId>;
}

impl IntoPostId for PostId {
    fn into_post_id(self) -> Option<PostId> {
        Some(self)
    }
}

impl IntoPostId for i32 {
    fn into_post_id(self) -> Option<PostId> {
        Some(PostId::from(self))
    }
}

impl IntoPostId for u32 {
    fn into_post_id(self) -> Option<PostId> {
        Some(PostId::from(self))
    }
}

impl IntoPostId for &str {
    fn into_post_id(self) -> Option<PostId> {
        parse_post_id(self)
    }
}

impl IntoPostId for &String {
    fn into_post_id(self) -> Option<PostId> {
        parse_post_id(self.as_str())
    }
}

impl IntoPostId for String {
    fn into_post_id(self) -> Option<PostId> {
        parse_post_id(self.as_str())
    }
}

/// Parses the leading integer of `input`.
pub fn parse_post_id(input: &str) -> Option<PostId> {
    let trimmed = input.trim_start();
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };

    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }

    trimmed[..sign_len + digit_len].parse::<PostId>().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_post_id, IntoPostId, NewPost, PostPatch, PostValidationError};

    #[test]
    fn parse_post_id_reads_leading_integer() {
        assert_eq!(parse_post_id("12"), Some(12));
        assert_eq!(parse_post_id("  7abc"), Some(7));
        assert_eq!(parse_post_id("-3"), Some(-3));
        assert_eq!(parse_post_id("abc"), None);
        assert_eq!(parse_post_id(""), None);
        assert_eq!(parse_post_id("+"), None);
    }

    #[test]
    fn parse_post_id_covers_the_full_i64_range() {
        assert_eq!(parse_post_id("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_post_id("9223372036854775807x"), Some(i64::MAX));
        assert_eq!(parse_post_id("+42"), Some(42));
        assert_eq!(parse_post_id("9223372036854775808"), None);
    }

    #[test]
    fn into_post_id_covers_numeric_and_text_inputs() {
        assert_eq!(5_i64.into_post_id(), Some(5));
        assert_eq!(5_i32.into_post_id(), Some(5));
        assert_eq!("5".into_post_id(), Some(5));
        assert_eq!(String::from("x5").into_post_id(), None);
    }

    #[test]
    fn new_post_rejects_blank_title() {
        assert_eq!(
            NewPost::new("   ").validate(),
            Err(PostValidationError::EmptyTitle)
        );
        assert!(NewPost::new("Hello").validate().is_ok());
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(PostPatch::default().is_empty());
        let patch = PostPatch {
            featured: Some(true),
            ..PostPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
