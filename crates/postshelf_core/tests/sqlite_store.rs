use postshelf_core::db::open_db;
use postshelf_core::db::open_db_in_memory;
use postshelf_core::{
    KeyValueStore, NewPost, PostRepository, PostStatus, SqliteKvStore, DEFAULT_STORAGE_KEY,
};

#[test]
fn get_set_remove_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::new(&conn);

    assert_eq!(store.get("missing").unwrap(), None);

    store.set("b", "first").unwrap();
    store.set("a", "other").unwrap();
    store.set("b", "second").unwrap();
    assert_eq!(store.get("b").unwrap().as_deref(), Some("second"));
    assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);

    store.remove("b").unwrap();
    assert_eq!(store.get("b").unwrap(), None);
    store.remove("b").unwrap();
}

#[test]
fn repository_seeds_sqlite_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = PostRepository::new(SqliteKvStore::new(&conn));

    assert_eq!(repo.get_all().len(), 3);
    let raw = repo.store().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"createdAt\""));
}

#[test]
fn posts_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posts.db");

    let created_id = {
        let conn = open_db(&path).unwrap();
        let mut repo = PostRepository::new(SqliteKvStore::new(&conn));
        let created = repo
            .add(NewPost {
                status: PostStatus::Published,
                category: "Community".to_string(),
                ..NewPost::new("Persisted Across Restarts")
            })
            .unwrap();
        repo.delete(1).unwrap();
        created.id
    };

    let conn = open_db(&path).unwrap();
    let repo = PostRepository::new(SqliteKvStore::new(&conn));
    let all = repo.get_all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, created_id);
    assert_eq!(
        repo.get_by_slug("persisted-across-restarts").unwrap().category,
        "Community"
    );
    assert!(repo.get_by_id(1).is_none());
}
