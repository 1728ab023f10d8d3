use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Fold free text down to trimmed plain ASCII: NFKD, drop combining marks,
/// drop whatever is still outside ASCII.
pub fn normalize(text: &str) -> String {
    let ascii: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .collect();
    ascii.trim().to_string()
}

/// Lowercase `[a-z0-9_]` identifier with no leading, trailing or doubled underscores.
pub fn slugify(text: &str) -> String {
    let lower = normalize(text).to_lowercase().replace('&', " and ");
    collapse(&lower)
}

/// Slug variant without the ampersand rule, used when listing raw subcategory keys.
pub fn slugify_plain(text: &str) -> String {
    collapse(&normalize(text).to_lowercase())
}

fn collapse(lower: &str) -> String {
    NON_ALNUM_RE
        .replace_all(lower, "_")
        .trim_matches('_')
        .to_string()
}

// ── Tests ──
