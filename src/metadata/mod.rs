//! Page-level metadata extraction.
//!
//! Title, byline, description and source information. Each stage takes the
//! value built so far and returns a new one, so the order of stages is
//! visible in [`extract_page_info`].

pub mod byline;
pub mod description;
pub mod source;
pub mod title;

use dom_query::{Document, Selection};

use crate::result::SourceInfo;
use crate::Options;

pub use byline::{default_byline, extract_byline, find_byline};
pub use description::{extract_description, is_description_candidate};
pub use source::{extract_source, source_info};
pub use title::{extract_title, title_candidates, TitleCandidate};

/// Page-level fields gathered before the content-type stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub title: String,
    /// `<title>` text as written, used by the classifier.
    pub title_element: String,
    /// `"By <name>"`, or empty.
    pub byline: String,
    pub description: String,
    pub source: SourceInfo,
}

/// Run every metadata stage over a cleaned document.
///
/// `main` is the main content area picked by the locator; the description
/// is taken from its paragraphs.
#[must_use]
pub fn extract_page_info(doc: &Document, main: &Selection, opts: &Options) -> PageInfo {
    let info = PageInfo::default();
    let info = extract_source(info, opts);
    let info = extract_title(doc, info, opts);
    let info = extract_byline(doc, info);
    extract_description(main, info)
}
