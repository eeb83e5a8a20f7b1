use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("valid slug regex"));

/// Lowercase `s`, replace every run of characters outside `[a-z0-9]` with a
/// single '-', and strip leading/trailing '-'.
pub fn slugify(s: &str) -> String {
    let lowered = s.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
