//! Navigation-text heuristic.
//!
//! Storefront menus on the archived pages leak into body containers as short
//! runs of department names. This test is reused by the description
//! extractor and by the field builders to keep those runs out.

use crate::patterns::{NAVIGATION_AMPERSAND_LABEL, NAVIGATION_PHRASE, NAVIGATION_TERMS};
use crate::text::{count_terms, word_count};

/// Returns true if `text` reads like menu or link-label text.
///
/// Any one of these is enough:
/// - it names a storefront term and has fewer than 8 words
/// - storefront terms exceed 30% of its word count
/// - it matches a link-label shape such as `shop <x>`
/// - the whole text is a short `A & B C` department label
#[must_use]
pub fn is_navigation_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    let matches = count_terms(&lower, NAVIGATION_TERMS);
    let words = word_count(text);

    if matches > 0 && words < 8 {
        return true;
    }

    if words > 0 && matches as f64 / words as f64 > 0.3 {
        return true;
    }

    NAVIGATION_PHRASE.is_match(&lower) || NAVIGATION_AMPERSAND_LABEL.is_match(lower.trim())
}
