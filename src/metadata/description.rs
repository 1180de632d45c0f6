//! Description extraction.

use dom_query::Selection;

use super::PageInfo;
use crate::dom;
use crate::navigation::is_navigation_text;
use crate::patterns::CONSENT_TERMS;
use crate::text::{char_len, contains_any, truncate_chars, word_count};

const MIN_CHARS: usize = 50;
const MAX_CHARS: usize = 500;
const MIN_WORDS: usize = 8;
const DESCRIPTION_CHARS: usize = 200;

/// True if a paragraph could serve as the page description.
#[must_use]
pub fn is_description_candidate(text: &str) -> bool {
    let length = char_len(text);
    (MIN_CHARS..MAX_CHARS).contains(&length)
        && word_count(text) > MIN_WORDS
        && !is_navigation_text(text)
        && !contains_any(&text.to_lowercase(), CONSENT_TERMS)
}

/// Fill `description` from the first qualifying `<p>` in `main`,
/// truncated to 200 characters.
#[must_use]
pub fn extract_description(main: &Selection, original: PageInfo) -> PageInfo {
    let description = main
        .select("p")
        .iter()
        .map(|p| dom::normalized_text(&p))
        .find(|text| is_description_candidate(text))
        .map(|text| truncate_chars(&text, DESCRIPTION_CHARS))
        .unwrap_or_default();

    PageInfo {
        description,
        ..original
    }
}
