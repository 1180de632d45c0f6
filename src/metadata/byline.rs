//! Byline extraction.

use dom_query::Document;

use super::PageInfo;
use crate::dom;
use crate::patterns::BYLINE_PATTERNS;
use crate::result::ContentType;
use crate::text::word_count;

/// Captured names longer than this are prose, not bylines.
const MAX_NAME_WORDS: usize = 6;

fn is_plausible_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase) && word_count(name) <= MAX_NAME_WORDS
}

/// First plausible author name in `text`, as `"By <name>"`.
///
/// Patterns are tried in priority order; within a pattern, matches are
/// tried in text order until one captures a capitalized name of at most
/// six words.
///
/// ```rust
/// use connection_extract::metadata::find_byline;
///
/// let text = "Made by hand\nRecipe and photo courtesy of Kylie Lato";
/// assert_eq!(find_byline(text).as_deref(), Some("By Kylie Lato"));
/// ```
#[must_use]
pub fn find_byline(text: &str) -> Option<String> {
    BYLINE_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .find(|name| is_plausible_name(name))
            .map(|name| format!("By {name}"))
    })
}

/// Fill `byline` from the block text of the whole cleaned document.
#[must_use]
pub fn extract_byline(doc: &Document, original: PageInfo) -> PageInfo {
    let text = dom::block_text(&doc.select("body"));
    match find_byline(&text) {
        Some(byline) => PageInfo { byline, ..original },
        None => original,
    }
}

/// House byline used when a page names no author.
#[must_use]
pub const fn default_byline(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Recipe => "By Costco Kitchen Team",
        ContentType::Travel => "By Costco Travel",
        ContentType::Tech => "By Tech Connection",
        ContentType::Editorial => "By Costco Connection Editorial",
        ContentType::Shopping => "By Costco Buying Team",
        ContentType::Member => "By Member Services",
        ContentType::Lifestyle | ContentType::MagazineFrontCover | ContentType::General => {
            "By Costco Connection"
        }
    }
}
