//! Image collection, scoring and ordering.
//!
//! Score components:
//!
//! | signal                                    | points |
//! |-------------------------------------------|--------|
//! | src on the magazine CDN host              | +60    |
//! | src under a `static-us-connection` folder | +40    |
//! | width > 400 and height > 300              | +30    |
//! | else width > 200 and height > 150         | +20    |
//! | alt longer than 5 characters              | +25    |
//! | alt with at least 3 words                 | +15    |
//! | each content term in alt or src           | +10    |
//! | each author term in alt or src            | +40    |
//! | `headshot` in src                         | +60    |
//! | `First_Last_Headshot` filename            | +80    |
//! | each penalty term in alt or src           | -15    |
//! | standalone `ad`/`ads` word in alt or src  | -15    |
//!
//! The total is floored at zero.

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::patterns::{
    AD_WORD, AUTHOR_IMAGE_TERMS, CDN_FOLDER_PREFIX, CDN_HOST, HEADSHOT_FILENAME,
    IMAGE_CONTENT_TERMS, IMAGE_PENALTY_TERMS,
};
use crate::result::ImageRef;
use crate::text::{char_len, word_count};
use crate::url_utils::resolve_image_url;

const CONTENT_TERM_POINTS: i64 = 10;
const PENALTY_TERM_POINTS: i64 = 15;
const AUTHOR_TERM_POINTS: i64 = 40;
const HEADSHOT_SRC_POINTS: i64 = 60;
const NAMED_HEADSHOT_POINTS: i64 = 80;

/// `src`, falling back to lazy-loading `data-src`.
fn image_source(img: &Selection) -> Option<String> {
    dom::non_empty_attribute(img, "src").or_else(|| dom::non_empty_attribute(img, "data-src"))
}

fn dimension(img: &Selection, name: &str) -> Option<u32> {
    dom::non_empty_attribute(img, name).and_then(|v| v.parse().ok())
}

/// Resolved absolute URL for an `<img>`, or `None` when it has no source.
#[must_use]
pub fn resolved_source(img: &Selection, page: Option<&Url>) -> Option<String> {
    image_source(img)
        .map(|src| resolve_image_url(&src, page))
        .filter(|src| !src.is_empty())
}

/// Relevance score for an image with resolved `src`.
#[must_use]
pub fn score_image(src: &str, alt: &str, width: Option<u32>, height: Option<u32>) -> u32 {
    let src_lower = src.to_lowercase();
    let alt_lower = alt.to_lowercase();
    let mut score: i64 = 0;

    if src_lower.contains(CDN_HOST) {
        score += 60;
    }
    if src_lower.contains(CDN_FOLDER_PREFIX) {
        score += 40;
    }

    if let (Some(w), Some(h)) = (width, height) {
        if w > 400 && h > 300 {
            score += 30;
        } else if w > 200 && h > 150 {
            score += 20;
        }
    }

    if char_len(alt) > 5 {
        score += 25;
    }
    if word_count(alt) >= 3 {
        score += 15;
    }

    let in_either = |terms: &[&str]| {
        terms
            .iter()
            .filter(|term| alt_lower.contains(**term) || src_lower.contains(**term))
            .count() as i64
    };
    score += CONTENT_TERM_POINTS * in_either(IMAGE_CONTENT_TERMS);
    score += AUTHOR_TERM_POINTS * in_either(AUTHOR_IMAGE_TERMS);
    score -= PENALTY_TERM_POINTS * in_either(IMAGE_PENALTY_TERMS);
    if src_lower.contains("headshot") {
        score += HEADSHOT_SRC_POINTS;
    }
    // Case matters: the filename convention is `First_Last_Headshot`.
    if HEADSHOT_FILENAME.is_match(src) {
        score += NAMED_HEADSHOT_POINTS;
    }
    if AD_WORD.is_match(&alt_lower) || AD_WORD.is_match(&src_lower) {
        score -= PENALTY_TERM_POINTS;
    }

    u32::try_from(score.max(0)).unwrap_or(u32::MAX)
}

/// Every `<img>` under `root` in document order, deduplicated by resolved
/// URL (first occurrence wins) and scored.
#[must_use]
pub fn collect_images(root: &Selection, page: Option<&Url>) -> Vec<ImageRef> {
    let mut images: Vec<ImageRef> = Vec::new();

    for img in root.select("img").iter() {
        let Some(src) = resolved_source(&img, page) else {
            continue;
        };
        if images.iter().any(|seen| seen.src == src) {
            continue;
        }
        let alt = dom::non_empty_attribute(&img, "alt").unwrap_or_default();
        let width = dimension(&img, "width");
        let height = dimension(&img, "height");
        let score = score_image(&src, &alt, width, height);
        images.push(ImageRef {
            src,
            alt,
            score,
            width,
            height,
        });
    }

    images
}

/// Stable sort by descending score; equal scores keep their order.
pub fn sort_by_score(images: &mut [ImageRef]) {
    images.sort_by(|a, b| b.score.cmp(&a.score));
}

/// All images of the cleaned document, best first.
#[must_use]
pub fn extract_images(doc: &Document, page: Option<&Url>) -> Vec<ImageRef> {
    let mut images = collect_images(&doc.select("html"), page);
    sort_by_score(&mut images);
    images
}
