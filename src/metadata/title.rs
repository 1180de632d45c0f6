//! Title extraction.
//!
//! `<h1>` headings outrank the `<title>` element; the site suffix is cut
//! from `<title>` first. With no usable candidate the title is rebuilt
//! from the saved filename.

use dom_query::Document;

use super::PageInfo;
use crate::patterns::TITLE_SITE_SUFFIX;
use crate::text::{char_len, normalize_whitespace};
use crate::url_utils::title_from_filename;
use crate::Options;

const H1_WEIGHT: u8 = 20;
const TITLE_ELEMENT_WEIGHT: u8 = 15;

/// Candidates must be longer than this many characters.
const MIN_TITLE_CHARS: usize = 3;

/// A possible page title and the weight of the element it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCandidate {
    pub text: String,
    pub weight: u8,
}

/// Text of the `<title>` element, whitespace-normalized.
#[must_use]
pub fn title_element_text(doc: &Document) -> String {
    doc.select("title")
        .iter()
        .next()
        .map(|t| normalize_whitespace(&t.text()))
        .unwrap_or_default()
}

/// Every title candidate in document order: `<h1>`s not naming the site,
/// then the `<title>` element minus its `| Costco` suffix.
#[must_use]
pub fn title_candidates(doc: &Document) -> Vec<TitleCandidate> {
    let mut candidates: Vec<TitleCandidate> = doc
        .select("h1")
        .iter()
        .map(|h1| normalize_whitespace(&h1.text()))
        .filter(|text| char_len(text) > MIN_TITLE_CHARS && !text.to_lowercase().contains("costco"))
        .map(|text| TitleCandidate {
            text,
            weight: H1_WEIGHT,
        })
        .collect();

    let element = title_element_text(doc);
    let stripped = TITLE_SITE_SUFFIX.replace(&element, "").trim().to_string();
    if char_len(&stripped) > MIN_TITLE_CHARS {
        candidates.push(TitleCandidate {
            text: stripped,
            weight: TITLE_ELEMENT_WEIGHT,
        });
    }

    candidates
}

/// Highest weight wins, then the longer text, then the earlier candidate.
#[must_use]
pub fn best_title(candidates: &[TitleCandidate]) -> Option<&TitleCandidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current)
            if (current.weight, char_len(&current.text))
                >= (candidate.weight, char_len(&candidate.text)) =>
        {
            Some(current)
        }
        _ => Some(candidate),
    })
}

/// Fill `title` and `title_element`.
#[must_use]
pub fn extract_title(doc: &Document, original: PageInfo, opts: &Options) -> PageInfo {
    let candidates = title_candidates(doc);
    let title = match best_title(&candidates) {
        Some(candidate) => candidate.text.clone(),
        None => title_from_filename(opts.effective_filename()),
    };

    PageInfo {
        title,
        title_element: title_element_text(doc),
        ..original
    }
}
