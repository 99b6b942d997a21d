//! URL slug derivation from post titles.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug char regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static HYPHEN_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

/// Derives a lowercase, hyphenated, ASCII-alphanumeric slug from `title`.
///
/// Steps: lowercase, drop everything except `a-z`, `0-9`, whitespace and `-`,
/// turn whitespace runs into `-`, collapse hyphen runs, trim edge hyphens.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_SLUG_CHARS_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches(|ch: char| ch == '-' || ch.is_whitespace()).to_string()
}
