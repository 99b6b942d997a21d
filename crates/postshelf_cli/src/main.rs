//! Inspection entry point for a SQLite-backed post store.
//!
//! Usage: `postshelf_cli [DB_PATH] [QUERY]`
//! - Without `DB_PATH`, runs against a throwaway in-memory database.
//! - With `QUERY`, lists published posts matching it; otherwise lists all
//!   published posts.
//! - `POSTSHELF_LOG_DIR` (absolute path) enables rolling file logs at the
//!   build's default level.

use postshelf_core::db::{open_db, open_db_in_memory};
use postshelf_core::{core_version, default_log_level, init_logging, PostRepository, SqliteKvStore};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "POSTSHELF_LOG_DIR";

fn main() -> ExitCode {
    if let Some(log_dir) = configured_log_dir(std::env::var(LOG_DIR_ENV).ok()) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("postshelf: logging disabled: {err}");
        }
    }

    let mut args = std::env::args().skip(1);
    let db_path = args.next();
    let query = args.next();

    let opened = match db_path.as_deref() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("postshelf: failed to open database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo = PostRepository::new(SqliteKvStore::new(&conn));
    let stats = repo.get_stats();
    println!("postshelf_core version={}", core_version());
    println!(
        "posts total={} published={} drafts={} views={}",
        stats.total, stats.published, stats.drafts, stats.total_views
    );

    let posts = match query.as_deref() {
        Some(query) => repo.search(query),
        None => repo.get_published(),
    };
    for post in posts {
        println!("{:>4}  {:<12} {}", post.id, post.category, post.slug);
    }
    ExitCode::SUCCESS
}

/// Blank values leave logging off.
fn configured_log_dir(value: Option<String>) -> Option<String> {
    value.filter(|dir| !dir.trim().is_empty())
}
