//! Image-to-section assignment.
//!
//! Every image is scored against every section window:
//!
//! - 100 for a *specific* match (hand-tuned filename/heading pairs, alt and
//!   heading sharing a word, or telling words in the section text)
//! - 50 for a *contextual* match (shared keywords or a shared category
//!   family)
//! - 0 otherwise
//!
//! The image goes to the highest-scoring window; the first window wins a
//! tie and a best score of zero leaves the image unassigned. An image is
//! therefore attached to at most one section.

use std::collections::HashSet;

use crate::patterns::{
    CATEGORY_FAMILIES, COMMON_WORDS, MISMATCH_FAMILIES, SECTION_NOISE_WORDS, STOP_WORDS,
};
use crate::result::{ImageRef, Section};
use crate::sections::SectionWindow;
use crate::text::contains_any;
use crate::url_utils::filename_of;

pub const SPECIFIC_SCORE: u32 = 100;
pub const CONTEXTUAL_SCORE: u32 = 50;

/// A pair matches when the image filename contains one of the first terms
/// and the heading contains one of the second.
const FILENAME_HEADING_PAIRS: &[(&[&str], &[&str])] = &[
    (&["glasses"], &["donation", "optical", "program"]),
    (&["card"], &["card", "where", "been", "travel"]),
    (&["rollup", "lasagna", "recipe"], &["lasagna", "recipe", "roll", "spinach"]),
    (&["halloween", "costume"], &["halloween", "celebrate", "costume"]),
    (
        &["bookpick", "book", "author", "fye"],
        &["book", "author", "story", "writer", "entertainment", "spotlight", "strong", "women"],
    ),
    (&["pet", "animal", "cat", "dog"], &["pet", "animal", "planet", "cat", "dog"]),
];

/// Words in section text that tie it to an image filename.
const SECTION_WORD_FILENAME_PAIRS: &[(&[&str], &[&str])] = &[
    (&["glasses", "optical", "donation"], &["glasses"]),
    (&["card", "travel", "membership"], &["card"]),
    (&["lasagna", "recipe", "cooking", "spinach"], &["rollup", "lasagna"]),
    (&["halloween", "costume", "celebrate"], &["halloween"]),
];

/// Lowercased views of an image used by every rule.
struct ImageTerms {
    filename: String,
    alt: String,
}

impl ImageTerms {
    fn new(image: &ImageRef) -> Self {
        Self {
            filename: filename_of(&image.src.to_lowercase()).to_string(),
            alt: image.alt.to_lowercase(),
        }
    }

    /// Filename stem and alt text split into words.
    fn keywords(&self) -> HashSet<String> {
        let stem = self
            .filename
            .rsplit_once('.')
            .map_or(self.filename.as_str(), |(stem, _)| stem);
        stem.replace(['_', '-'], " ")
            .split_whitespace()
            .chain(self.alt.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    fn mentions_any(&self, terms: &[&str]) -> bool {
        contains_any(&self.filename, terms) || contains_any(&self.alt, terms)
    }
}

/// Lowercased views of a section window.
struct SectionTerms {
    heading: String,
    content: String,
}

impl SectionTerms {
    fn new(window: &SectionWindow) -> Self {
        Self {
            heading: window.heading.text.to_lowercase(),
            content: window.content_text().to_lowercase(),
        }
    }

    fn keywords(&self) -> HashSet<String> {
        self.heading
            .split_whitespace()
            .chain(self.content.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    fn mentions_any(&self, terms: &[&str]) -> bool {
        contains_any(&self.heading, terms) || contains_any(&self.content, terms)
    }
}

fn word_set_without_commas(text: &str) -> HashSet<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect()
}

fn is_specific_match(image: &ImageTerms, section: &SectionTerms) -> bool {
    let paired = FILENAME_HEADING_PAIRS.iter().any(|(file_terms, heading_terms)| {
        contains_any(&image.filename, file_terms) && contains_any(&section.heading, heading_terms)
    });
    if paired {
        return true;
    }

    let halloween_fun = contains_any(&image.filename, &["halloween", "costume"])
        && section.heading.contains("fun")
        && contains_any(&section.content, &["halloween", "costume"]);
    if halloween_fun {
        return true;
    }

    if !image.alt.is_empty() {
        let alt_words = word_set_without_commas(&image.alt);
        let heading_words = word_set_without_commas(&section.heading);
        if alt_words
            .intersection(&heading_words)
            .any(|w| !STOP_WORDS.contains(w))
        {
            return true;
        }
    }

    section
        .content
        .split_whitespace()
        .filter(|w| w.chars().count() > 4 && !SECTION_NOISE_WORDS.contains(w))
        .any(|word| {
            SECTION_WORD_FILENAME_PAIRS.iter().any(|(words, file_terms)| {
                words.contains(&word) && contains_any(&image.filename, file_terms)
            })
        })
}

fn meaningful(words: HashSet<String>) -> HashSet<String> {
    words
        .into_iter()
        .filter(|w| w.chars().count() > 2 && !COMMON_WORDS.contains(&w.as_str()))
        .collect()
}

fn is_contextual_match(image: &ImageTerms, section: &SectionTerms) -> bool {
    let image_words = meaningful(image.keywords());
    let section_words = meaningful(section.keywords());
    if !image_words.is_disjoint(&section_words) {
        return true;
    }

    let shared_family = CATEGORY_FAMILIES
        .iter()
        .any(|(_, terms)| section.mentions_any(terms) && image.mentions_any(terms));
    if shared_family {
        return true;
    }

    section
        .heading
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .any(|w| image.alt.contains(w) || image.filename.contains(w))
}

/// Match score of `image` against one section window: 100, 50 or 0.
#[must_use]
pub fn match_score(image: &ImageRef, window: &SectionWindow) -> u32 {
    let image = ImageTerms::new(image);
    let section = SectionTerms::new(window);
    if is_specific_match(&image, &section) {
        SPECIFIC_SCORE
    } else if is_contextual_match(&image, &section) {
        CONTEXTUAL_SCORE
    } else {
        0
    }
}

/// Index of the best-matching window for `image`, if any window scores.
#[must_use]
pub fn best_window(image: &ImageRef, windows: &[SectionWindow]) -> Option<(usize, u32)> {
    let mut best: Option<(usize, u32)> = None;
    for (index, window) in windows.iter().enumerate() {
        let score = match_score(image, window);
        if score > best.map_or(0, |(_, top)| top) {
            best = Some((index, score));
        }
    }
    best
}

fn family_of(text_sources: &[&str]) -> Option<&'static str> {
    MISMATCH_FAMILIES
        .iter()
        .find(|(_, terms)| text_sources.iter().any(|text| contains_any(text, terms)))
        .map(|(name, _)| *name)
}

/// True if the heading and the image fall into different categories.
#[must_use]
pub fn is_category_mismatch(image: &ImageRef, window: &SectionWindow) -> bool {
    let image = ImageTerms::new(image);
    let heading = window.heading.text.to_lowercase();
    let section_family = family_of(&[heading.as_str()]);
    let image_family = family_of(&[image.filename.as_str(), image.alt.as_str()]);
    match (section_family, image_family) {
        (Some(section_family), Some(image_family)) => section_family != image_family,
        _ => false,
    }
}

/// Window index chosen for each image, `None` when unassigned.
///
/// With `proximity_fallback`, an image that matched nothing is given to
/// the first window that physically contains it, unless the categories
/// conflict.
#[must_use]
pub fn assign_images(
    images: &[ImageRef],
    windows: &[SectionWindow],
    proximity_fallback: bool,
) -> Vec<Option<usize>> {
    images
        .iter()
        .map(|image| {
            if let Some((index, score)) = best_window(image, windows) {
                log::debug!(
                    "image {} -> section {:?} (score {score})",
                    image.src,
                    windows[index].heading.text
                );
                return Some(index);
            }
            if !proximity_fallback {
                return None;
            }
            let nearby = windows
                .iter()
                .position(|w| w.image_srcs.iter().any(|src| *src == image.src))?;
            if is_category_mismatch(image, &windows[nearby]) {
                log::debug!("image {} left unassigned: category mismatch", image.src);
                return None;
            }
            log::debug!(
                "image {} -> section {:?} by position",
                image.src,
                windows[nearby].heading.text
            );
            Some(nearby)
        })
        .collect()
}

/// Sections with their assigned images, and the images left over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub sections: Vec<Section>,
    pub unassigned: Vec<ImageRef>,
}

/// Build one [`Section`] per window and distribute `images` among them.
#[must_use]
pub fn build_sections(
    windows: &[SectionWindow],
    images: &[ImageRef],
    proximity_fallback: bool,
) -> AssignmentOutcome {
    let mut sections: Vec<Section> = windows
        .iter()
        .map(|w| Section {
            heading: w.heading.text.clone(),
            level: w.heading.level,
            content: w.paragraphs.clone(),
            images: Vec::new(),
        })
        .collect();
    let mut unassigned = Vec::new();

    for (image, target) in images
        .iter()
        .zip(assign_images(images, windows, proximity_fallback))
    {
        match target.and_then(|index| sections.get_mut(index)) {
            Some(section) => section.images.push(image.clone()),
            None => unassigned.push(image.clone()),
        }
    }

    AssignmentOutcome {
        sections,
        unassigned,
    }
}
