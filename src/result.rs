//! Result types for extraction output.
//!
//! `ExtractedContent` is the record the pipeline produces for one page. It
//! serializes with the field names shown here; `content_type` serializes as
//! its snake_case tag.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of article kinds found in the magazine archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Recipe,
    Travel,
    Tech,
    Editorial,
    Member,
    Shopping,
    Lifestyle,
    MagazineFrontCover,
    /// No type cleared its required score.
    #[default]
    General,
}

impl ContentType {
    /// Tag used in serialized output and in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Travel => "travel",
            Self::Tech => "tech",
            Self::Editorial => "editorial",
            Self::Member => "member",
            Self::Shopping => "shopping",
            Self::Lifestyle => "lifestyle",
            Self::MagazineFrontCover => "magazine_front_cover",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading found in the main content area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    /// 1 for `<h1>` through 6 for `<h6>`.
    pub level: u8,
}

/// An image with its resolved URL and relevance score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute URL after CDN/relative resolution.
    pub src: String,
    pub alt: String,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Whether a list was `<ol>` or `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// A `<ul>`/`<ol>` with its non-empty item texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    #[serde(rename = "type")]
    pub kind: ListKind,
    pub items: Vec<String>,
}

/// Content owned by one heading: the paragraphs up to the next heading and
/// the images the assignment engine attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub level: u8,
    pub content: Vec<String>,
    pub images: Vec<ImageRef>,
}

/// Value stored in the type-specific metadata bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    /// Small string-keyed records such as magazine article links.
    Records(Vec<BTreeMap<String, String>>),
}

/// String-keyed bag holding the type-specific fields (`ingredients`,
/// `destinations`, `poll_questions`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, FieldValue>);

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of `self` with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: &str, value: FieldValue) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// List-valued field, or an empty slice if absent or not a list.
    #[must_use]
    pub fn list(&self, key: &str) -> &[String] {
        match self.0.get(key) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    /// Text-valued field, or `""` if absent or not text.
    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Record-valued field, or an empty slice.
    #[must_use]
    pub fn records(&self, key: &str) -> &[BTreeMap<String, String>] {
        match self.0.get(key) {
            Some(FieldValue::Records(records)) => records,
            _ => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Where the page came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub url: Option<String>,
    pub filename: Option<String>,
    /// Issue month read from the filename or URL, e.g. "October 2023".
    pub publication_date: String,
}

/// Everything extracted from one magazine page.
///
/// Built once per document by the pipeline. The optional enhancer stage
/// produces a new value rather than editing this one in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub content_type: ContentType,
    pub title: String,
    pub byline: String,
    pub description: String,

    /// Paragraph texts in document order, near-duplicates removed.
    pub main_content: Vec<String>,

    /// Block text of the main content area.
    pub full_text: String,

    pub headings: Vec<Heading>,

    /// One section per heading, in heading order.
    pub sections: Vec<Section>,

    /// Images sorted by descending score; ties keep document order.
    pub images: Vec<ImageRef>,

    pub quotes: Vec<String>,
    pub lists: Vec<ListBlock>,

    /// Type-specific fields.
    pub metadata: Metadata,

    pub source: SourceInfo,

    /// Completeness estimate in `0..=100`.
    pub quality_score: u8,

    /// True when the enhancer changed at least one field.
    pub enhanced: bool,
}

impl ExtractedContent {
    /// Highest-scoring image, if any.
    #[must_use]
    pub fn best_image(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    /// Section whose heading text equals `heading`.
    #[must_use]
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}
