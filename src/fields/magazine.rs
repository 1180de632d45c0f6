//! Front-cover fields: the table of contents, the PDF link and the cover.
//!
//! Each table-of-contents record carries the article's picture: the image
//! beside its link when there is one, else the first page image whose
//! filename contains a distinctive word of the article slug.

use std::collections::BTreeMap;

use super::{ContentView, Link};
use crate::patterns::{ARTICLE_CATEGORIES, DEFAULT_ARTICLE_CATEGORY, MASTHEAD_AND_MONTH_WORDS};
use crate::result::{FieldValue, ImageRef, Metadata};
use crate::text::char_len;

const ARTICLE_LINK_MARKER: &str = "/connection-";
const SPECIAL_SECTION: &str = "Special Section";
const MIN_ARTICLE_TITLE_CHARS: usize = 3;
const MIN_SLUG_WORD_CHARS: usize = 4;

/// Magazine department for an article link, from its slug.
#[must_use]
pub fn article_category(href: &str) -> &'static str {
    let lower = href.to_lowercase();
    ARTICLE_CATEGORIES
        .iter()
        .find(|(slugs, _)| slugs.iter().any(|slug| lower.contains(slug)))
        .map_or(DEFAULT_ARTICLE_CATEGORY, |(_, category)| *category)
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Distinctive words of an article slug:
/// `/connection-cover-soft-sell-october-2023.html` gives `cover`, `soft`
/// and `sell`.
fn slug_words(href: &str) -> Vec<String> {
    let slug = last_segment(href).split(['.', '?', '#']).next().unwrap_or_default();
    slug.to_lowercase()
        .split('-')
        .filter(|word| {
            char_len(word) >= MIN_SLUG_WORD_CHARS
                && word.chars().all(char::is_alphabetic)
                && !MASTHEAD_AND_MONTH_WORDS.contains(word)
        })
        .map(str::to_string)
        .collect()
}

/// First image whose filename, ignoring `_` and `-`, contains a slug word
/// of `href`.
#[must_use]
pub fn article_image<'a>(href: &str, images: &'a [ImageRef]) -> Option<&'a ImageRef> {
    let words = slug_words(href);
    if words.is_empty() {
        return None;
    }
    images.iter().find(|image| {
        let file = last_segment(&image.src).to_lowercase().replace(['_', '-'], "");
        words.iter().any(|word| file.contains(word.as_str()))
    })
}

fn article_record(link: &Link, images: &[ImageRef]) -> BTreeMap<String, String> {
    let (image, image_alt) = if link.image.is_empty() {
        article_image(&link.href, images)
            .map(|found| (found.src.clone(), found.alt.clone()))
            .unwrap_or_default()
    } else {
        (link.image.clone(), link.image_alt.clone())
    };
    BTreeMap::from([
        ("title".to_string(), link.text.clone()),
        ("link".to_string(), link.href.clone()),
        ("category".to_string(), article_category(&link.href).to_string()),
        ("image".to_string(), image),
        ("image_alt".to_string(), image_alt),
    ])
}

/// One record per distinct article link on the cover page.
#[must_use]
pub fn article_links(links: &[Link], images: &[ImageRef]) -> Vec<BTreeMap<String, String>> {
    let mut kept: Vec<&Link> = Vec::new();

    for link in links {
        if !link.href.contains(ARTICLE_LINK_MARKER)
            || link.href.ends_with('#')
            || char_len(&link.text) <= MIN_ARTICLE_TITLE_CHARS
        {
            continue;
        }
        if kept.iter().any(|k| k.href == link.href || k.text == link.text) {
            continue;
        }
        kept.push(link);
    }

    kept.into_iter().map(|link| article_record(link, images)).collect()
}

/// `href` of the first "Download ... PDF" anchor.
#[must_use]
pub fn pdf_download_link(links: &[Link]) -> Option<&str> {
    links
        .iter()
        .find(|link| {
            let text = link.text.to_lowercase();
            text.contains("download") && text.contains("pdf")
        })
        .map(|link| link.href.as_str())
}

/// How much an image looks like the issue cover.
#[must_use]
pub fn cover_score(image: &ImageRef) -> u32 {
    let src = image.src.to_lowercase();
    let alt = image.alt.to_lowercase();
    let mut score = 0;

    if src.contains("cover") || alt.contains("cover") {
        score += 100;
    }
    if src.contains("lp_") {
        score += 50;
    }
    if ["cover_story", "main_image"].iter().any(|t| src.contains(t)) {
        score += 80;
    }
    if ["large", "main", "hero"].iter().any(|t| src.contains(t)) {
        score += 30;
    }
    if let (Some(w), Some(h)) = (image.width, image.height) {
        if w > 400 && h > 300 {
            score += 40;
        }
    }
    score
}

/// Highest-scoring image, first on ties, if any scores above zero.
#[must_use]
pub fn cover_image(images: &[ImageRef]) -> Option<&ImageRef> {
    let mut best: Option<(&ImageRef, u32)> = None;
    for image in images {
        let score = cover_score(image);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((image, score));
        }
    }
    best.map(|(image, _)| image)
}

#[must_use]
pub fn front_cover_fields(view: &ContentView) -> Metadata {
    let articles = article_links(&view.links, &view.images);
    let special: Vec<_> = articles
        .iter()
        .filter(|record| record.get("category").is_some_and(|c| c == SPECIAL_SECTION))
        .cloned()
        .collect();
    let cover = cover_image(&view.images);

    Metadata::new()
        .with("article_categories", FieldValue::Records(articles))
        .with("special_sections", FieldValue::Records(special))
        .with(
            "pdf_download_link",
            FieldValue::Text(pdf_download_link(&view.links).unwrap_or_default().to_string()),
        )
        .with(
            "cover_image",
            FieldValue::Text(cover.map(|c| c.src.clone()).unwrap_or_default()),
        )
        .with(
            "cover_image_alt",
            FieldValue::Text(cover.map(|c| c.alt.clone()).unwrap_or_default()),
        )
}
