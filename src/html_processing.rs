//! HTML Processing and Pruning
//!
//! Strips site chrome from a parsed page before any extraction runs. Three
//! passes, in order:
//!
//! 1. tags that never hold article text (`script`, `nav`, `footer`, ...)
//! 2. elements whose class marks navigation, consent popups or ads
//! 3. short blocks whose text is a storefront or cookie phrase
//!
//! `<html>` and `<body>` are never removed.

use crate::dom::{self, Document, NodeRef, Selection};
use crate::patterns::{AD_CLASS_TOKEN, REMOVED_TAGS, UNWANTED_CLASS_TERMS, UNWANTED_PHRASES};
use crate::text::word_count;

/// Blocks with at least this many words survive the phrase pass.
const SHORT_BLOCK_WORDS: usize = 20;

/// Element counts removed by each cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub tags: usize,
    pub classes: usize,
    pub phrases: usize,
}

impl CleaningReport {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.tags + self.classes + self.phrases
    }
}

/// Remove chrome, consent and ad elements from `doc` in place.
pub fn clean_document(doc: &Document) -> CleaningReport {
    let removed_tags = doc.select(&REMOVED_TAGS.join(", "));
    let tags = removed_tags.length();
    dom::remove(&removed_tags);

    let classes = remove_nodes(doc.select("[class]").nodes(), has_unwanted_class);

    let phrases = remove_nodes(doc.select("div, section, p").nodes(), is_unwanted_phrase_block);

    let report = CleaningReport {
        tags,
        classes,
        phrases,
    };
    log::debug!(
        "cleaner removed {} elements ({} tags, {} by class, {} by phrase)",
        report.total(),
        report.tags,
        report.classes,
        report.phrases
    );
    report
}

fn remove_nodes(nodes: &[NodeRef], predicate: impl Fn(&Selection) -> bool) -> usize {
    let doomed: Vec<Selection> = nodes
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| !is_protected(sel) && predicate(sel))
        .collect();
    for sel in &doomed {
        dom::remove(sel);
    }
    doomed.len()
}

fn is_protected(sel: &Selection) -> bool {
    matches!(dom::tag_name(sel).as_deref(), Some("html" | "body"))
}

/// True if any class token names chrome, a consent popup, or an ad slot.
#[must_use]
pub fn has_unwanted_class(sel: &Selection) -> bool {
    let Some(class) = dom::class_name(sel) else {
        return false;
    };
    class.split_whitespace().any(is_unwanted_class_token)
}

/// Single class-token test; `ad` only counts as a delimited part.
#[must_use]
pub fn is_unwanted_class_token(token: &str) -> bool {
    let lower = token.to_lowercase();
    UNWANTED_CLASS_TERMS.iter().any(|term| lower.contains(term)) || AD_CLASS_TOKEN.is_match(&lower)
}

fn is_unwanted_phrase_block(sel: &Selection) -> bool {
    let text = dom::text_content(sel);
    if word_count(&text) >= SHORT_BLOCK_WORDS {
        return false;
    }
    let lower = text.to_lowercase();
    UNWANTED_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
