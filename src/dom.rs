//! DOM Operations Adapter
//!
//! Thin wrappers over `dom_query` giving the rest of the crate one place
//! for tag names, attributes, text flattening and element walks.

pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::patterns::BLOCK_TAGS;
use crate::text::normalize_whitespace;

/// Parse an HTML string into a document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute value, trimmed, with empty values treated as missing.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Heading level for `h1`..`h6`, `None` for any other tag.
#[must_use]
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_block_node(node: &NodeRef) -> bool {
    node.node_name()
        .is_some_and(|name| BLOCK_TAGS.iter().any(|b| name.eq_ignore_ascii_case(b)))
}

fn is_script_node(node: &NodeRef) -> bool {
    node.node_name().is_some_and(|name| {
        name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style")
    })
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with whitespace collapsed and trimmed.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    normalize_whitespace(&sel.text())
}

/// Text with a line break at every block-element boundary.
///
/// Adjacent blocks never run together, so line-oriented regexes (bylines,
/// times, destinations) cannot capture across a paragraph end. Each line
/// is whitespace-normalized and blank lines are dropped.
#[must_use]
pub fn block_text(sel: &Selection) -> String {
    enum Step<'a> {
        Enter(NodeRef<'a>),
        Close,
    }

    let mut raw = String::new();
    let mut stack: Vec<Step> = sel.nodes().iter().rev().map(|n| Step::Enter(*n)).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Close => raw.push('\n'),
            Step::Enter(node) => {
                if node.is_text() {
                    raw.push_str(&node.text());
                    continue;
                }
                if is_script_node(&node) {
                    continue;
                }
                if is_block_node(&node) {
                    raw.push('\n');
                    stack.push(Step::Close);
                }
                for child in node.children().into_iter().rev() {
                    stack.push(Step::Enter(child));
                }
            }
        }
    }

    raw.lines()
        .map(normalize_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// === Tree Navigation ===

/// Every element below `sel` in document (pre-)order, excluding `sel` itself.
#[must_use]
pub fn descendant_elements<'a>(sel: &Selection<'a>) -> Vec<NodeRef<'a>> {
    sel.nodes()
        .iter()
        .flat_map(|root| {
            root.descendants()
                .into_iter()
                .filter(move |n| n.id != root.id && n.is_element())
        })
        .collect()
}

/// Get previous element sibling (skipping text nodes)
#[must_use]
pub fn previous_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.prev_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.prev_sibling();
        }
        None
    })
}

// === Mutation ===

/// Remove every element of the selection from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
