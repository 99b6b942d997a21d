use chrono::{TimeZone, Utc};
use postshelf_core::seed::default_posts;
use postshelf_core::{generate_slug, NewPost, Post, PostPatch, PostStatus};

#[test]
fn post_serialization_uses_camel_case_wire_fields() {
    let created_at = Utc.with_ymd_and_hms(2024, 12, 15, 8, 30, 0).unwrap();
    let post = default_posts(created_at).remove(0);

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["status"], "published");
    assert_eq!(json["createdAt"], "2024-12-15T08:30:00Z");
    assert!(json.get("updatedAt").is_none());
    assert!(json.get("created_at").is_none());
    assert_eq!(json["featured"], true);
}

#[test]
fn sparse_records_decode_with_defaults() {
    let raw = r#"{
        "id": 7,
        "title": "Legacy",
        "status": "draft",
        "createdAt": "2024-12-01T10:00:00.000Z"
    }"#;

    let post: Post = serde_json::from_str(raw).unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.views, 0);
    assert!(!post.featured);
    assert_eq!(post.slug, "");
    assert_eq!(post.status, PostStatus::Draft);
    assert_eq!(post.updated_at, None);
}

#[test]
fn unknown_status_is_rejected() {
    let raw = r#"{"id": 1, "status": "archived", "createdAt": "2024-12-01T10:00:00Z"}"#;
    assert!(serde_json::from_str::<Post>(raw).is_err());
}

#[test]
fn patch_overwrites_only_present_fields() {
    let mut post = default_posts(Utc::now()).remove(1);
    let original = post.clone();

    post.apply_patch(PostPatch {
        views: Some(5),
        category: Some("Health".to_string()),
        ..PostPatch::default()
    });

    assert_eq!(post.views, 5);
    assert_eq!(post.category, "Health");
    assert_eq!(post.title, original.title);
    assert_eq!(post.author, original.author);
    assert_eq!(post.updated_at, original.updated_at);
}

#[test]
fn patch_and_new_post_decode_from_partial_json() {
    let patch: PostPatch = serde_json::from_str(r#"{"title": "T", "featured": true}"#).unwrap();
    assert_eq!(patch.title.as_deref(), Some("T"));
    assert_eq!(patch.featured, Some(true));
    assert_eq!(patch.views, None);

    let new_post: NewPost =
        serde_json::from_str(r#"{"title": "Draft", "status": "published"}"#).unwrap();
    assert_eq!(new_post.status, PostStatus::Published);
    assert_eq!(new_post.slug, None);
}

#[test]
fn seed_slugs_differ_from_generated_title_slugs() {
    let seeds = default_posts(Utc::now());
    assert_eq!(
        generate_slug(&seeds[0].title),
        "empowering-communities-through-education"
    );
    assert_eq!(seeds[0].slug, "empowering-communities-education");
}
