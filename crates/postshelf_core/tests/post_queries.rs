use chrono::{TimeZone, Utc};
use postshelf_core::{
    FixedClock, MemoryStore, NewPost, PostRepository, PostStats, PostStatus, RepoConfig,
};

fn seeded_repo() -> PostRepository<MemoryStore, FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 12, 20, 9, 0, 0).unwrap());
    PostRepository::with_config(MemoryStore::new(), clock, RepoConfig::default())
}

fn ids(posts: &[postshelf_core::Post]) -> Vec<i64> {
    posts.iter().map(|post| post.id).collect()
}

#[test]
fn published_excludes_drafts_and_keeps_order() {
    let repo = seeded_repo();
    assert_eq!(ids(&repo.get_published()), vec![1, 2]);
}

#[test]
fn get_by_slug_finds_exact_match_only() {
    let repo = seeded_repo();
    assert_eq!(repo.get_by_slug("building-hope-healthcare").unwrap().id, 2);
    assert_eq!(repo.get_by_slug("sustainable-development-change").unwrap().id, 3);
    assert!(repo.get_by_slug("Building-Hope-Healthcare").is_none());
    assert!(repo.get_by_slug("").is_none());
}

#[test]
fn category_all_returns_published_subset() {
    let repo = seeded_repo();
    assert_eq!(repo.get_by_category("all"), repo.get_published());
}

#[test]
fn category_filter_ignores_case_and_skips_drafts() {
    let mut repo = seeded_repo();
    for category in ["education", "EDUCATION"] {
        repo.add(NewPost {
            category: category.to_string(),
            status: PostStatus::Published,
            ..NewPost::new(format!("{category} update"))
        })
        .unwrap();
    }
    repo.add(NewPost {
        category: "Education".to_string(),
        ..NewPost::new("draft education note")
    })
    .unwrap();

    assert_eq!(ids(&repo.get_by_category("Education")), vec![5, 4, 1]);
    assert!(repo.get_by_category("Development").is_empty());
    assert!(repo.get_by_category("unknown").is_empty());
}

#[test]
fn search_matches_author_case_insensitively_and_skips_drafts() {
    let mut repo = seeded_repo();
    assert_eq!(ids(&repo.search("chen")), vec![2]);
    assert_eq!(ids(&repo.search("HEALTHCARE")), vec![2]);

    repo.add(NewPost {
        author: "Anna Chen".to_string(),
        ..NewPost::new("Unpublished thoughts")
    })
    .unwrap();
    assert_eq!(ids(&repo.search("chen")), vec![2]);
    assert!(repo.search("sustainable development").is_empty());
}

#[test]
fn search_covers_title_excerpt_and_category() {
    let repo = seeded_repo();
    assert_eq!(ids(&repo.search("empowering")), vec![1]);
    assert_eq!(ids(&repo.search("mobile healthcare clinics")), vec![2]);
    assert_eq!(ids(&repo.search("education")), vec![1]);
    assert_eq!(ids(&repo.search("")), vec![1, 2]);
    assert!(repo.search("<h2>").is_empty());
}

#[test]
fn stats_count_by_status_and_sum_views() {
    let mut repo = seeded_repo();
    assert_eq!(
        repo.get_stats(),
        PostStats {
            total: 3,
            published: 2,
            drafts: 1,
            total_views: 2140,
        }
    );

    repo.add(NewPost {
        status: PostStatus::Published,
        ..NewPost::new("Fresh")
    })
    .unwrap();
    let stats = repo.get_stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.published, 3);
    assert_eq!(stats.total_views, 2140);
}

#[test]
fn stats_serialize_with_camel_case_keys() {
    let repo = seeded_repo();
    let json = serde_json::to_value(repo.get_stats()).unwrap();
    assert_eq!(json["totalViews"], 2140);
    assert_eq!(json["drafts"], 1);
}
