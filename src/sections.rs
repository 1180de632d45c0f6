//! Section windows over the main content area.
//!
//! The content area is flattened once, in document order, into a list of
//! blocks. Heading *i* owns every block after it up to the next heading or
//! storefront boundary, so section limits come from positions in that
//! list rather than from searching serialized markup.
//!
//! In interview mode a paragraph that carries a bold question becomes a
//! level-3 heading followed by the answer text from the same paragraph.

use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::images::resolved_source;
use crate::interview::split_question_paragraph;
use crate::result::Heading;
use crate::structure::{heading_of, is_excluded_heading};
use crate::text::char_len;

const MIN_SECTION_PARAGRAPH_CHARS: usize = 6;
const MAX_SECTION_PARAGRAPH_CHARS: usize = 999;

/// One element of the flattened content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    /// A storefront heading ("Shop ...", "Compare ..."); closes the
    /// current section without opening a new one.
    Boundary,
    Paragraph(String),
    /// Resolved image URL.
    Image(String),
}

/// Blocks owned by one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionWindow {
    pub heading: Heading,
    /// Paragraph texts, capped at the configured maximum.
    pub paragraphs: Vec<String>,
    /// Resolved URLs of images inside the window.
    pub image_srcs: Vec<String>,
}

impl SectionWindow {
    /// Heading and paragraphs joined by spaces.
    #[must_use]
    pub fn text(&self) -> String {
        std::iter::once(self.heading.text.as_str())
            .chain(self.paragraphs.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Paragraphs only.
    #[must_use]
    pub fn content_text(&self) -> String {
        self.paragraphs.join(" ")
    }
}

fn push_paragraph(blocks: &mut Vec<Block>, text: String) {
    let length = char_len(&text);
    if (MIN_SECTION_PARAGRAPH_CHARS..=MAX_SECTION_PARAGRAPH_CHARS).contains(&length) {
        blocks.push(Block::Paragraph(text));
    }
}

/// Flatten `main` into blocks with a single pre-order walk.
///
/// With `interview` set, question paragraphs open their own sections.
#[must_use]
pub fn flatten(main: &Selection, page: Option<&Url>, interview: bool) -> Vec<Block> {
    let mut blocks = Vec::new();

    for node in dom::descendant_elements(main) {
        let sel = Selection::from(node);
        let Some(tag) = dom::tag_name(&sel) else {
            continue;
        };

        if dom::heading_level(&tag).is_some() {
            if let Some(heading) = heading_of(&sel) {
                blocks.push(Block::Heading(heading));
            } else if is_excluded_heading(&dom::normalized_text(&sel)) {
                blocks.push(Block::Boundary);
            }
            continue;
        }

        match tag.as_str() {
            "p" => match interview.then(|| split_question_paragraph(&sel)).flatten() {
                Some(turn) => {
                    blocks.push(Block::Heading(turn.question));
                    if let Some(answer) = turn.answer {
                        push_paragraph(&mut blocks, answer);
                    }
                }
                None => push_paragraph(&mut blocks, dom::normalized_text(&sel)),
            },
            "img" => {
                if let Some(src) = resolved_source(&sel, page) {
                    blocks.push(Block::Image(src));
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Group blocks into one window per heading.
#[must_use]
pub fn build_windows(blocks: &[Block], max_paragraphs: usize) -> Vec<SectionWindow> {
    let mut windows: Vec<SectionWindow> = Vec::new();
    let mut open = false;

    for block in blocks {
        match block {
            Block::Heading(heading) => {
                windows.push(SectionWindow {
                    heading: heading.clone(),
                    paragraphs: Vec::new(),
                    image_srcs: Vec::new(),
                });
                open = true;
            }
            Block::Boundary => open = false,
            Block::Paragraph(text) if open => {
                if let Some(window) = windows.last_mut() {
                    if window.paragraphs.len() < max_paragraphs {
                        window.paragraphs.push(text.clone());
                    }
                }
            }
            Block::Image(src) if open => {
                if let Some(window) = windows.last_mut() {
                    window.image_srcs.push(src.clone());
                }
            }
            Block::Paragraph(_) | Block::Image(_) => {}
        }
    }

    windows
}
