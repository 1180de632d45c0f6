//! Completeness score for an extraction result.

use crate::result::{ContentType, ExtractedContent};
use crate::text::char_len;

const BASE: usize = 20;
const MAX_SCORE: usize = 100;

/// Capped `count * weight`.
fn capped(count: usize, weight: usize, cap: usize) -> usize {
    (count * weight).min(cap)
}

/// Score in `0..=100`. Higher means more fields were found.
#[must_use]
pub fn quality_score(content: &ExtractedContent) -> u8 {
    let mut score = BASE;

    if !content.title.is_empty() {
        score += 15;
    }
    if char_len(&content.description) > 50 {
        score += 10;
    }
    if !content.images.is_empty() {
        score += 20;
    }
    if !content.byline.is_empty() {
        score += 5;
    }

    score += capped(content.main_content.len(), 2, 20);
    score += capped(content.images.len(), 3, 15);
    score += capped(content.headings.len(), 2, 10);

    // Images are sorted, so the first carries the best score.
    score += match content.images.first().map(|image| image.score) {
        Some(best) if best > 100 => 15,
        Some(best) if best > 50 => 10,
        _ => 5,
    };

    match content.content_type {
        ContentType::Recipe => {
            let real = |key: &str| {
                content
                    .metadata
                    .list(key)
                    .iter()
                    .filter(|line| !line.starts_with("==="))
                    .count()
            };
            score += capped(real("ingredients"), 2, 20);
            score += capped(real("instructions"), 3, 15);
        }
        ContentType::Travel if !content.metadata.list("destinations").is_empty() => score += 10,
        _ => {}
    }

    u8::try_from(score.min(MAX_SCORE)).unwrap_or(u8::MAX)
}
