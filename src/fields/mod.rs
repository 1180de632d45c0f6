//! Content-type specific fields.
//!
//! Builders are pure functions over a [`ContentView`], a DOM-free snapshot
//! of what the structure pass found. Each returns a fresh [`Metadata`] map
//! that the pipeline merges into the result.

pub mod magazine;
pub mod member;
pub mod recipe;
pub mod topical;
pub mod travel;

use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::images::resolved_source;
use crate::result::{ContentType, Heading, ImageRef, Metadata};
use crate::structure::{LabeledList, StructuredContent};

/// An anchor with its visible text and raw `href`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
    /// Resolved URL of the image that goes with the anchor, or empty.
    pub image: String,
    pub image_alt: String,
}

/// Input to the field builders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentView {
    pub paragraphs: Vec<String>,
    pub headings: Vec<Heading>,
    pub lists: Vec<LabeledList>,
    /// Every anchor of the cleaned document.
    pub links: Vec<Link>,
    /// Every image of the cleaned document in document order, with resolved
    /// URLs.
    pub images: Vec<ImageRef>,
    pub full_text: String,
}

impl ContentView {
    #[must_use]
    pub fn new(structure: StructuredContent, links: Vec<Link>, images: Vec<ImageRef>) -> Self {
        Self {
            paragraphs: structure.paragraphs,
            headings: structure.headings,
            lists: structure.lists,
            links,
            images,
            full_text: structure.full_text,
        }
    }
}

/// The image inside the anchor, or else inside its parent when the parent
/// holds no other link.
fn anchor_image(anchor: &Selection, page: Option<&Url>) -> Option<(String, String)> {
    let own = anchor.select("img");
    let parent = anchor.parent();
    let img = if own.exists() {
        own.first()
    } else if parent.select("a[href]").length() == 1 {
        parent.select("img").first()
    } else {
        return None;
    };
    let src = resolved_source(&img, page)?;
    Some((src, dom::non_empty_attribute(&img, "alt").unwrap_or_default()))
}

/// Anchors under `root` that carry an `href`.
#[must_use]
pub fn collect_links(root: &Selection, page: Option<&Url>) -> Vec<Link> {
    root.select("a[href]")
        .iter()
        .filter_map(|a| {
            let href = dom::non_empty_attribute(&a, "href")?;
            let (image, image_alt) = anchor_image(&a, page).unwrap_or_default();
            Some(Link {
                text: dom::normalized_text(&a),
                href,
                image,
                image_alt,
            })
        })
        .collect()
}

/// Fields for `content_type`. General pages get none.
#[must_use]
pub fn build_fields(content_type: ContentType, view: &ContentView) -> Metadata {
    match content_type {
        ContentType::Recipe => recipe::recipe_fields(view),
        ContentType::Travel => travel::travel_fields(view),
        ContentType::Member => member::member_fields(view),
        ContentType::Tech => topical::tech_fields(view),
        ContentType::Lifestyle => topical::lifestyle_fields(view),
        ContentType::Editorial => topical::editorial_fields(view),
        ContentType::Shopping => topical::shopping_fields(view),
        ContentType::MagazineFrontCover => magazine::front_cover_fields(view),
        ContentType::General => Metadata::new(),
    }
}

/// Up to `limit` items from `candidates` that pass `keep`, first-seen order,
/// without repeats.
pub(crate) fn take_unique<'a, I, F>(candidates: I, limit: usize, mut keep: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
    F: FnMut(&str) -> bool,
{
    let mut out: Vec<String> = Vec::new();
    for candidate in candidates {
        if out.len() >= limit {
            break;
        }
        if keep(candidate) && !out.contains(candidate) {
            out.push(candidate.clone());
        }
    }
    out
}
