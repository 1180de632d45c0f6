//! Configuration options for content extraction.
//!
//! The `Options` struct carries the page identity (URL, filename), the
//! classifier table, and the thresholds the structure and enhancement
//! stages use.

use url::Url;

use crate::classifier::ContentTypeRule;
use crate::error::Result;
use crate::url_utils::filename_of;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use connection_extract::Options;
///
/// let options = Options {
///     url: Some("https://www.costco.com/connection-recipe-pie.html".into()),
///     default_byline: true,
///     ..Options::default()
/// };
/// assert_eq!(options.effective_filename(), "connection-recipe-pie.html");
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Page URL. Used as the base for image resolution and for URL
    /// keyword hits in the classifier.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Name of the saved HTML file. When unset, the last path segment of
    /// `url` is used.
    ///
    /// Default: `None`
    pub filename: Option<String>,

    /// Keyword table for content-type classification, in tie-break order.
    ///
    /// Default: [`ContentTypeRule::defaults`]
    pub content_type_rules: Vec<ContentTypeRule>,

    /// Word-set Jaccard similarity above which a paragraph counts as a
    /// duplicate of one already collected.
    ///
    /// Default: `0.8`
    pub similarity_threshold: f64,

    /// Maximum paragraphs kept per section.
    ///
    /// Default: `5`
    pub max_section_paragraphs: usize,

    /// Keep images that were assigned to a section in the document-level
    /// `images` list as well. When false, the document list only holds
    /// images no section claimed.
    ///
    /// Default: `true`
    pub keep_section_images_in_document: bool,

    /// Assign images that matched no heading to the heading whose content
    /// window contains them, unless their categories conflict.
    ///
    /// Default: `false`
    pub proximity_fallback: bool,

    /// Fill a per-type house byline ("By Costco Kitchen Team", ...) when
    /// the page names no author.
    ///
    /// Default: `false`
    pub default_byline: bool,

    /// Character cap on the content excerpt sent to an enhancer.
    ///
    /// Default: `12000`
    pub prompt_content_limit: usize,

    /// Number of top-scored images listed in the enhancer prompt.
    ///
    /// Default: `5`
    pub prompt_image_limit: usize,

    /// Call the enhancer even when the extraction looks complete.
    ///
    /// Default: `false`
    pub always_enhance: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            filename: None,
            content_type_rules: ContentTypeRule::defaults(),
            similarity_threshold: 0.8,
            max_section_paragraphs: 5,
            keep_section_images_in_document: true,
            proximity_fallback: false,
            default_byline: false,
            prompt_content_limit: 12_000,
            prompt_image_limit: 5,
            always_enhance: false,
        }
    }
}

impl Options {
    /// Parsed page URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUrl`] if `url` is set but does not
    /// parse.
    pub fn page_url(&self) -> Result<Option<Url>> {
        match self.url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Ok(Some(Url::parse(raw)?)),
            _ => Ok(None),
        }
    }

    /// `filename`, or the last path segment of `url`, or `""`.
    #[must_use]
    pub fn effective_filename(&self) -> &str {
        if let Some(name) = self.filename.as_deref() {
            return name;
        }
        self.url.as_deref().map(filename_of).unwrap_or_default()
    }
}
