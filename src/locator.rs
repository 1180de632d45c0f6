//! Main-content locator.
//!
//! Picks the subtree that holds the article body. Candidates come from three
//! selector groups (semantic tags, common content-container classes, then
//! every `div`); each group keeps only candidates scoring above its floor.

use crate::dom::{self, Document, Selection};
use crate::patterns::{LOCATOR_GROUPS, TOPIC_TERMS};
use crate::text::{char_len, contains_any};

/// Structure and text score of one candidate container.
///
/// - text length: >1000 chars +50, >500 +30, >200 +15
/// - +5 per `<p>`, +8 per `<h1>`-`<h3>`, +5 per list
/// - +20 if it mentions "costco connection", +10 if it names a topic
#[must_use]
pub fn score_element(sel: &Selection) -> u32 {
    if !sel.exists() {
        return 0;
    }

    let text = dom::normalized_text(sel);
    let length = char_len(&text);
    let mut score = if length > 1000 {
        50
    } else if length > 500 {
        30
    } else if length > 200 {
        15
    } else {
        0
    };

    score += 5 * sel.select("p").length() as u32;
    score += 8 * sel.select("h1, h2, h3").length() as u32;
    score += 5 * sel.select("ul, ol").length() as u32;

    let lower = text.to_lowercase();
    if lower.contains("costco connection") {
        score += 20;
    }
    if contains_any(&lower, TOPIC_TERMS) {
        score += 10;
    }

    score
}

/// Best-scoring candidate container, or `<body>` (then the root) if no
/// candidate clears its floor. Equal scores keep the earlier candidate.
#[must_use]
pub fn find_main_content(doc: &Document) -> Selection<'_> {
    let mut best: Option<(Selection<'_>, u32)> = None;

    for (selectors, floor) in LOCATOR_GROUPS {
        for selector in *selectors {
            let elements = doc.select(selector);
            for node in elements.nodes() {
                let candidate = Selection::from(*node);
                let score = score_element(&candidate);
                if score <= *floor {
                    continue;
                }
                if best.as_ref().is_none_or(|(_, top)| score > *top) {
                    best = Some((candidate, score));
                }
            }
        }
    }

    match best {
        Some((sel, score)) => {
            log::debug!(
                "main content: <{}> scored {score}",
                dom::tag_name(&sel).unwrap_or_default()
            );
            sel
        }
        None => {
            log::debug!("main content: no candidate cleared its floor, using <body>");
            let body = doc.select("body");
            if body.exists() {
                body
            } else {
                doc.select("html")
            }
        }
    }
}
