//! Structured content extraction from the main content area.
//!
//! Paragraphs, headings, lists and quotes, each in document order.

use dom_query::Selection;

use crate::dom;
use crate::patterns::EXCLUDED_HEADING_TERMS;
use crate::result::{Heading, ListBlock, ListKind};
use crate::text::{char_len, contains_any, jaccard, push_unique};

const MIN_PARAGRAPH_CHARS: usize = 15;
const MIN_DIV_CHARS: usize = 30;
const MIN_HEADING_CHARS: usize = 2;
const MIN_QUOTE_CHARS: usize = 10;

/// A list together with the text of the element right before it.
///
/// Recipe pages label sub-recipes with a short heading or paragraph
/// ("FILLING", "STREUSEL") directly above each ingredient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledList {
    pub label: String,
    pub list: ListBlock,
}

/// Everything the structure pass collects from one content area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredContent {
    pub paragraphs: Vec<String>,
    pub headings: Vec<Heading>,
    pub lists: Vec<LabeledList>,
    pub quotes: Vec<String>,
    pub full_text: String,
}

/// Collect structured content from `main`.
#[must_use]
pub fn extract_structure(main: &Selection, similarity_threshold: f64) -> StructuredContent {
    StructuredContent {
        paragraphs: extract_paragraphs(main, similarity_threshold),
        headings: extract_headings(main),
        lists: extract_lists(main),
        quotes: extract_quotes(main),
        full_text: dom::block_text(main),
    }
}

fn is_near_duplicate(text: &str, collected: &[String], threshold: f64) -> bool {
    collected.iter().any(|seen| jaccard(text, seen) > threshold)
}

/// Paragraph texts: `<p>` elements over 15 characters, then `<div>`s over
/// 30 characters that hold no `<p>`. A candidate is dropped if its word-set
/// similarity with any paragraph already kept exceeds `threshold`.
#[must_use]
pub fn extract_paragraphs(main: &Selection, threshold: f64) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();

    let p_texts: Vec<String> = main
        .select("p")
        .iter()
        .map(|p| dom::normalized_text(&p))
        .filter(|text| char_len(text) > MIN_PARAGRAPH_CHARS)
        .collect();

    let div_texts: Vec<String> = main
        .select("div")
        .iter()
        .filter(|div| !div.select("p").exists())
        .map(|div| dom::normalized_text(&div))
        .filter(|text| char_len(text) > MIN_DIV_CHARS)
        .collect();

    for text in p_texts.into_iter().chain(div_texts) {
        if !is_near_duplicate(&text, &paragraphs, threshold) {
            paragraphs.push(text);
        }
    }

    paragraphs
}

/// True for heading text that belongs to a storefront widget.
#[must_use]
pub fn is_excluded_heading(text: &str) -> bool {
    contains_any(&text.to_lowercase(), EXCLUDED_HEADING_TERMS)
}

/// Heading text if `sel` is a heading worth keeping.
#[must_use]
pub fn heading_of(sel: &Selection) -> Option<Heading> {
    let level = dom::tag_name(sel).as_deref().and_then(dom::heading_level)?;
    let text = dom::normalized_text(sel);
    if char_len(&text) <= MIN_HEADING_CHARS || is_excluded_heading(&text) {
        return None;
    }
    Some(Heading { text, level })
}

/// `<h1>`-`<h6>` in document order, minus short and storefront headings.
#[must_use]
pub fn extract_headings(main: &Selection) -> Vec<Heading> {
    main.select("h1, h2, h3, h4, h5, h6")
        .iter()
        .filter_map(|h| heading_of(&h))
        .collect()
}

fn list_items(list: &Selection) -> Vec<String> {
    list.nodes()
        .first()
        .map(|node| {
            node.children()
                .into_iter()
                .filter(|child| {
                    child
                        .node_name()
                        .is_some_and(|name| name.eq_ignore_ascii_case("li"))
                })
                .map(|li| dom::normalized_text(&Selection::from(li)))
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Every `<ul>`/`<ol>` with at least one non-empty item, labelled with the
/// text of its previous element sibling.
#[must_use]
pub fn extract_lists(main: &Selection) -> Vec<LabeledList> {
    main.select("ul, ol")
        .iter()
        .filter_map(|list| {
            let items = list_items(&list);
            if items.is_empty() {
                return None;
            }
            let kind = match dom::tag_name(&list).as_deref() {
                Some("ol") => ListKind::Ordered,
                _ => ListKind::Unordered,
            };
            let label = dom::previous_element_sibling(&list)
                .map(|prev| dom::normalized_text(&prev))
                .unwrap_or_default();
            Some(LabeledList {
                label,
                list: ListBlock { kind, items },
            })
        })
        .collect()
}

/// `<blockquote>` and `<q>` texts over 10 characters, without repeats.
#[must_use]
pub fn extract_quotes(main: &Selection) -> Vec<String> {
    let mut quotes = Vec::new();
    for quote in main.select("blockquote, q").iter() {
        let text = dom::normalized_text(&quote);
        if char_len(&text) > MIN_QUOTE_CHARS {
            push_unique(&mut quotes, text);
        }
    }
    quotes
}
