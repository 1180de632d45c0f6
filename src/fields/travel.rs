//! Travel fields.

use super::{take_unique, ContentView};
use crate::navigation::is_navigation_text;
use crate::patterns::{CULTURE_TERMS, DESTINATION_PATTERNS, TRAVEL_TIP_TERMS};
use crate::result::{FieldValue, Metadata};
use crate::text::{contains_any, push_unique};

const MAX_DESTINATIONS: usize = 10;
const MAX_NOTES: usize = 5;

/// Place names following "visit" or "explore", first-seen order.
#[must_use]
pub fn find_destinations(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = DESTINATION_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1).map(|m| (m.start(), m.as_str().to_string())))
        .collect();
    found.sort_by_key(|(start, _)| *start);

    let mut destinations = Vec::new();
    for (_, name) in found {
        if destinations.len() >= MAX_DESTINATIONS {
            break;
        }
        push_unique(&mut destinations, name);
    }
    destinations
}

fn paragraphs_mentioning(view: &ContentView, terms: &[&str]) -> Vec<String> {
    take_unique(&view.paragraphs, MAX_NOTES, |p| {
        contains_any(&p.to_lowercase(), terms) && !is_navigation_text(p)
    })
}

#[must_use]
pub fn travel_fields(view: &ContentView) -> Metadata {
    Metadata::new()
        .with("destinations", FieldValue::List(find_destinations(&view.full_text)))
        .with("travel_tips", FieldValue::List(paragraphs_mentioning(view, TRAVEL_TIP_TERMS)))
        .with("cultural_notes", FieldValue::List(paragraphs_mentioning(view, CULTURE_TERMS)))
}
