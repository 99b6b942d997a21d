//! Pure read-side filters over post slices.
//!
//! # Invariants
//! - Reader-facing filters (`by_category`, `matching_text`) only ever return
//!   published posts.
//! - Input order is preserved in every returned list.

use crate::model::post::{Post, PostStats, PostStatus};

/// Category value that disables category filtering. Matched exactly.
pub const ALL_CATEGORIES: &str = "all";

/// Returns published posts in their stored order.
pub fn published(posts: &[Post]) -> Vec<Post> {
    posts.iter().filter(|post| post.is_published()).cloned().collect()
}

/// Returns published posts whose category equals `category` ignoring case.
///
/// `"all"` returns every published post.
pub fn by_category(posts: &[Post], category: &str) -> Vec<Post> {
    if category == ALL_CATEGORIES {
        return published(posts);
    }

    let wanted = category.to_lowercase();
    posts
        .iter()
        .filter(|post| post.is_published() && post.category.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Returns published posts whose title, excerpt, author or category contains
/// `query` as a case-insensitive substring. An empty query matches all.
pub fn matching_text(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.is_published() && text_matches(post, &needle))
        .cloned()
        .collect()
}

/// Counts totals by status and sums views across every post.
///
/// The view total saturates at `u64::MAX`.
pub fn stats(posts: &[Post]) -> PostStats {
    posts.iter().fold(PostStats::default(), |mut acc, post| {
        acc.total += 1;
        match post.status {
            PostStatus::Published => acc.published += 1,
            PostStatus::Draft => acc.drafts += 1,
        }
        acc.total_views = acc.total_views.saturating_add(post.views);
        acc
    })
}

fn text_matches(post: &Post, needle: &str) -> bool {
    [
        post.title.as_str(),
        post.excerpt.as_str(),
        post.author.as_str(),
        post.category.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
