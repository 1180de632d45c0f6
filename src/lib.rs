//! # connection-extract
//!
//! Content extraction for saved Costco Connection magazine pages.
//!
//! Each page is cleaned of storefront chrome, its main content area is
//! located, and the article is classified into one of a fixed set of
//! content types. The result carries the title, byline, paragraphs,
//! headings, scored images, per-heading sections and type-specific fields
//! such as recipe ingredients or travel destinations.
//!
//! ## Quick Start
//!
//! ```rust
//! use connection_extract::{extract_with_options, ContentType, Options};
//!
//! let html = r#"<html><body><article>
//!   <h1>Spinach Lasagna Roll Ups</h1>
//!   <p>Recipe and photo courtesy of Kylie Lato</p>
//!   <ul><li>2 cups ricotta cheese</li><li>8 lasagna noodles</li></ul>
//! </article></body></html>"#;
//!
//! let options = Options {
//!     url: Some("https://www.costco.com/connection-recipe-october-2023.html".into()),
//!     ..Options::default()
//! };
//! let result = extract_with_options(html, &options)?;
//! assert_eq!(result.content_type, ContentType::Recipe);
//! assert_eq!(result.byline, "By Kylie Lato");
//! assert_eq!(result.metadata.list("ingredients").len(), 2);
//! # Ok::<(), connection_extract::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Cleaning**: strips navigation, consent popups, ads and shop widgets
//! - **Classification**: keyword table over URL, filename, title and text
//! - **Images**: CDN URL resolution and relevance scoring
//! - **Sections**: images attached to the heading they illustrate
//! - **Enhancement**: optional gap filling through an [`Enhancer`]

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Text normalization and similarity helpers.
pub mod text;

/// Chrome, consent and ad removal.
pub mod html_processing;

/// Menu and link-label text detection.
pub mod navigation;

/// Main content area selection.
pub mod locator;

/// Keyword-table content-type classifier.
pub mod classifier;

/// Title, byline, description and source information.
pub mod metadata;

/// Paragraphs, headings, lists and quotes.
pub mod structure;

/// Image collection and scoring.
pub mod images;

/// Interview question paragraphs.
pub mod interview;

/// Heading windows over the main content area.
pub mod sections;

/// Image to heading assignment.
pub mod assignment;

/// Content-type specific fields.
pub mod fields;

/// Completeness score.
pub mod quality;

/// Optional gap filling by an external model.
pub mod enhancer;

/// URL resolution and issue dates.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use classifier::{classify, Classification, ClassificationInput, ContentTypeRule};
pub use enhancer::{enhance, Enhancer, EnhancerResponse, NoopEnhancer};
pub use error::{Error, Result};
pub use options::Options;
pub use result::{
    ContentType, ExtractedContent, FieldValue, Heading, ImageRef, ListBlock, ListKind, Metadata,
    Section, SourceInfo,
};

/// Extracts a page using default options.
///
/// # Example
///
/// ```rust
/// use connection_extract::{extract, ContentType};
///
/// let result = extract("<html><body><p>Nothing to classify here.</p></body></html>")?;
/// assert_eq!(result.content_type, ContentType::General);
/// # Ok::<(), connection_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractedContent> {
    extract_with_options(html, &Options::default())
}

/// Extracts a page with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if `options.url` is set but cannot be
/// parsed. Malformed markup never fails.
///
/// # Example
///
/// ```rust
/// use connection_extract::{extract_with_options, Options};
///
/// let html = r#"<html><body><article><img src="./10_23_UF_CostcoLife_Card.jpg"></article></body></html>"#;
/// let options = Options {
///     url: Some("https://www.costco.com/connection-costco-life-october-2023.html".into()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(
///     result.images[0].src,
///     "https://mobilecontent.costco.com/live/resource/img/static-us-connection-october-23/10_23_UF_CostcoLife_Card.jpg"
/// );
/// # Ok::<(), connection_extract::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractedContent> {
    extract::extract_content(html, options)
}

/// Extracts a page from raw bytes, detecting the character encoding from a
/// byte-order mark or `<meta>` declaration first.
///
/// Saved magazine pages are often windows-1252. Invalid sequences become
/// U+FFFD rather than errors.
///
/// # Errors
///
/// Same as [`extract_with_options`].
///
/// # Example
///
/// ```rust
/// use connection_extract::{extract_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body><article><h1>Caf\xE9 Favorites</h1></article></body></html>";
/// let result = extract_bytes(html, &Options::default())?;
/// assert_eq!(result.title, "Caf\u{e9} Favorites");
/// # Ok::<(), connection_extract::Error>(())
/// ```
pub fn extract_bytes(html: &[u8], options: &Options) -> Result<ExtractedContent> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Extracts a page, then lets `enhancer` fill fields the extractor missed.
///
/// Enhancer failures are logged and leave the extraction as is.
///
/// # Errors
///
/// Same as [`extract_with_options`].
///
/// # Example
///
/// ```rust
/// use connection_extract::{extract_and_enhance, NoopEnhancer, Options};
///
/// let html = "<html><body><article><h1>Hi</h1></article></body></html>";
/// let result = extract_and_enhance(html, &Options::default(), &NoopEnhancer)?;
/// assert!(!result.enhanced);
/// # Ok::<(), connection_extract::Error>(())
/// ```
pub fn extract_and_enhance(
    html: &str,
    options: &Options,
    enhancer: &dyn Enhancer,
) -> Result<ExtractedContent> {
    let content = extract_with_options(html, options)?;
    Ok(enhance(content, options, enhancer))
}
