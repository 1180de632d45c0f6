//! Plain-text helpers shared across the pipeline.

use std::collections::HashSet;

use crate::patterns::WHITESPACE_NORMALIZE;

/// Collapse runs of whitespace into single spaces and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Number of whitespace-separated words.
#[inline]
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Character count (not bytes).
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Lowercased whitespace-split word set.
#[must_use]
pub fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Jaccard similarity of the two texts' lowercased word sets.
///
/// Returns `0.0` when either side has no words.
#[must_use]
pub fn jaccard(a: &str, b: &str) -> f64 {
    let left = word_set(a);
    let right = word_set(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let shared = left.intersection(&right).count();
    let union = left.union(&right).count();
    shared as f64 / union as f64
}

/// First `max` characters of `text`, cut on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// True if `haystack` contains any of `terms` as a substring.
#[inline]
#[must_use]
pub fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| haystack.contains(t))
}

/// Number of distinct `terms` found in `haystack`.
#[must_use]
pub fn count_terms(haystack: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| haystack.contains(*t)).count()
}

/// Push `value` unless an equal string is already present.
pub fn push_unique(items: &mut Vec<String>, value: String) {
    if !items.contains(&value) {
        items.push(value);
    }
}
