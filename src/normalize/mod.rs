//! String canonicalization used for name matching and attribute comparison

use once_cell::sync::Lazy;
use regex::Regex;


/// Everything outside letters, digits, whitespace and the list separators
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s/,\-]").expect("static regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Canonicalize free text for equality checks.
///
/// Lower-cases, treats `_` as a space, drops every character except
/// `a-z`, `0-9`, whitespace, `/`, `,` and `-`, collapses whitespace runs
/// and trims. Applying it twice yields the same result as applying it once.
pub fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase().replace('_', " ");
    let kept = DISALLOWED.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUN.replace_all(&kept, " ");
    collapsed.trim().to_string()
}

/// Stricter canonical form for a single token of a multi-value attribute.
///
/// Only `a-z` and `0-9` survive; separators are expected to be gone already.
#[inline]
pub fn normalize_item(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Whether two strings are the same once normalized
#[inline]
pub fn same_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
