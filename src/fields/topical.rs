//! Fields for tech, lifestyle, editorial and shopping pages.
//!
//! These are keyword filters over paragraphs, list items and headings.

use std::sync::LazyLock;

use regex::Regex;

use super::{take_unique, ContentView};
use crate::navigation::is_navigation_text;
use crate::patterns::{
    COSTCO_VALUE_TERMS, FAMILY_TERMS, KIRKLAND_SIGNATURE, TECH_BRANDS, TECH_FEATURE_TERMS,
    WELLNESS_TERMS,
};
use crate::result::{FieldValue, Metadata};
use crate::text::{char_len, contains_any, push_unique};

const MAX_FEATURES: usize = 10;
const MAX_TOPICS: usize = 10;
const MAX_TIPS: usize = 5;
const MAX_EDITORIAL_ITEMS: usize = 3;
const MAX_KIRKLAND_ITEMS: usize = 5;
const MIN_EDITORIAL_CHARS: usize = 50;

static BRAND_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TECH_BRANDS
        .iter()
        .map(|brand| {
            #[allow(clippy::expect_used)]
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(brand)))
                .expect("brand regex");
            (*brand, re)
        })
        .collect()
});

fn mentions(text: &str, terms: &[&str]) -> bool {
    contains_any(&text.to_lowercase(), terms)
}

/// Known brands named in `text`, in table order.
#[must_use]
pub fn find_brands(text: &str) -> Vec<String> {
    BRAND_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(brand, _)| (*brand).to_string())
        .collect()
}

#[must_use]
pub fn tech_fields(view: &ContentView) -> Metadata {
    let items = view.lists.iter().flat_map(|l| &l.list.items);
    let features = take_unique(items, MAX_FEATURES, |item| mentions(item, TECH_FEATURE_TERMS));

    Metadata::new()
        .with("brands", FieldValue::List(find_brands(&view.full_text)))
        .with("features", FieldValue::List(features))
}

#[must_use]
pub fn lifestyle_fields(view: &ContentView) -> Metadata {
    let subheadings = view
        .headings
        .iter()
        .filter(|h| (2..=4).contains(&h.level))
        .map(|h| &h.text);
    let topics = take_unique(subheadings, MAX_TOPICS, |_| true);
    let wellness = take_unique(&view.paragraphs, MAX_TIPS, |p| mentions(p, WELLNESS_TERMS));
    let family = take_unique(&view.paragraphs, MAX_TIPS, |p| mentions(p, FAMILY_TERMS));

    Metadata::new()
        .with("topics", FieldValue::List(topics))
        .with("wellness_tips", FieldValue::List(wellness))
        .with("family_activities", FieldValue::List(family))
}

#[must_use]
pub fn editorial_fields(view: &ContentView) -> Metadata {
    let mut values = Vec::new();
    let mut messages = Vec::new();

    for paragraph in view.paragraphs.iter().filter(|p| char_len(p) > MIN_EDITORIAL_CHARS) {
        let bucket = if mentions(paragraph, COSTCO_VALUE_TERMS) {
            &mut values
        } else {
            &mut messages
        };
        if bucket.len() < MAX_EDITORIAL_ITEMS {
            push_unique(bucket, paragraph.clone());
        }
    }

    Metadata::new()
        .with("costco_values", FieldValue::List(values))
        .with("key_messages", FieldValue::List(messages))
}

/// Product names following "Kirkland Signature", up to the next period.
#[must_use]
pub fn kirkland_products(text: &str) -> Vec<String> {
    let mut products = Vec::new();
    for caps in KIRKLAND_SIGNATURE.captures_iter(text) {
        if products.len() >= MAX_KIRKLAND_ITEMS {
            break;
        }
        let Some(product) = caps.get(1).map(|m| m.as_str().trim()) else {
            continue;
        };
        if !product.is_empty() && !is_navigation_text(product) {
            push_unique(&mut products, product.to_string());
        }
    }
    products
}

#[must_use]
pub fn shopping_fields(view: &ContentView) -> Metadata {
    Metadata::new().with(
        "kirkland_signature",
        FieldValue::List(kirkland_products(&view.full_text)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Heading, ListBlock, ListKind};
    use crate::structure::LabeledList;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_brands_are_word_bounded() {
        let text = "The new apple watch pairs with Samsung phones. Hpmaster is not HP.";
        assert_eq!(find_brands(text), ["Apple", "Samsung", "HP"]);
        assert!(find_brands("Allegedly a delightful hotel").is_empty());
    }

    #[test]
    fn test_tech_features_from_list_items() {
        let view = ContentView {
            lists: vec![LabeledList {
                label: String::new(),
                list: ListBlock {
                    kind: ListKind::Unordered,
                    items: strings(&["Noise-canceling feature", "Blue color", "Smart home technology"]),
                },
            }],
            ..ContentView::default()
        };
        assert_eq!(
            tech_fields(&view).list("features"),
            ["Noise-canceling feature", "Smart home technology"]
        );
    }

    #[test]
    fn test_lifestyle_topics_use_mid_level_headings() {
        let heading = |text: &str, level| Heading {
            text: text.into(),
            level,
        };
        let view = ContentView {
            headings: vec![
                heading("Going Batty", 1),
                heading("Batty bridge habitat", 2),
                heading("Fun facts", 4),
                heading("Small print", 5),
            ],
            paragraphs: strings(&["Kids love building bat houses as a family project."]),
            ..ContentView::default()
        };
        let fields = lifestyle_fields(&view);
        assert_eq!(fields.list("topics"), ["Batty bridge habitat", "Fun facts"]);
        assert_eq!(fields.list("family_activities").len(), 1);
        assert!(fields.list("wellness_tips").is_empty());
    }

    #[test]
    fn test_editorial_buckets() {
        let view = ContentView {
            paragraphs: strings(&[
                "Our members expect quality at a fair price, every single visit to the warehouse.",
                "This month we look back at forty years of the magazine and its readers.",
                "Too short to count.",
            ]),
            ..ContentView::default()
        };
        let fields = editorial_fields(&view);
        assert_eq!(fields.list("costco_values").len(), 1);
        assert_eq!(fields.list("key_messages").len(), 1);
    }

    #[test]
    fn test_kirkland_products() {
        let text = "Try Kirkland Signature Organic Maple Syrup. Also kirkland signature Coffee Beans.";
        assert_eq!(kirkland_products(text), ["Organic Maple Syrup", "Coffee Beans"]);
    }
}
