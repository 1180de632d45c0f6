//! The extraction pipeline.
//!
//! Stages run in a fixed order over one parsed document: clean, locate the
//! main content area, read page-level metadata, classify, collect structure
//! and images, build sections, then the type-specific fields. Every stage
//! except URL parsing degrades to empty output instead of failing.

use log::{debug, info};

use crate::assignment::build_sections;
use crate::classifier::{classify, ClassificationInput};
use crate::dom::{self, Document};
use crate::error::Result;
use crate::fields::{build_fields, collect_links, ContentView};
use crate::html_processing::clean_document;
use crate::images::{collect_images, sort_by_score};
use crate::interview::has_interview_questions;
use crate::locator::find_main_content;
use crate::metadata::{default_byline, extract_page_info};
use crate::options::Options;
use crate::quality::quality_score;
use crate::result::{ContentType, ExtractedContent};
use crate::sections::{build_windows, flatten};
use crate::structure::extract_structure;

/// Run the whole pipeline over `html`.
pub(crate) fn extract_content(html: &str, opts: &Options) -> Result<ExtractedContent> {
    let page = opts.page_url()?;
    let doc: Document = dom::parse(html);

    clean_document(&doc);

    let main = find_main_content(&doc);
    let info = extract_page_info(&doc, &main, opts);

    let body_text = dom::normalized_text(&doc.select("body"));
    let classification = classify(
        &ClassificationInput {
            url: opts.url.as_deref().unwrap_or_default(),
            filename: opts.effective_filename(),
            title: &info.title_element,
            text: &body_text,
        },
        &opts.content_type_rules,
    );
    let content_type = classification.content_type;

    let structure = extract_structure(&main, opts.similarity_threshold);

    let document_images = collect_images(&doc.select("html"), page.as_ref());
    let mut images = document_images.clone();
    sort_by_score(&mut images);

    let interview = content_type == ContentType::Lifestyle && has_interview_questions(&main);
    let windows = build_windows(
        &flatten(&main, page.as_ref(), interview),
        opts.max_section_paragraphs,
    );
    let outcome = build_sections(&windows, &images, opts.proximity_fallback);
    debug!(
        "{} sections, {} of {} images unassigned",
        outcome.sections.len(),
        outcome.unassigned.len(),
        images.len()
    );
    if !opts.keep_section_images_in_document {
        images = outcome.unassigned;
    }

    let byline = if info.byline.is_empty() && opts.default_byline {
        default_byline(content_type).to_string()
    } else {
        info.byline
    };

    let links = collect_links(&doc.select("html"), page.as_ref());
    let lists = structure.lists.iter().map(|l| l.list.clone()).collect();
    let quotes = structure.quotes.clone();
    let view = ContentView::new(structure, links, document_images);
    let metadata = build_fields(content_type, &view);

    let mut content = ExtractedContent {
        content_type,
        title: info.title,
        byline,
        description: info.description,
        main_content: view.paragraphs,
        full_text: view.full_text,
        headings: view.headings,
        sections: outcome.sections,
        images,
        quotes,
        lists,
        metadata,
        source: info.source,
        quality_score: 0,
        enhanced: false,
    };
    content.quality_score = quality_score(&content);

    info!(
        "extracted {} page {:?}: {} paragraphs, {} images, {} sections, quality {}",
        content.content_type,
        content.title,
        content.main_content.len(),
        content.images.len(),
        content.sections.len(),
        content.quality_score
    );

    Ok(content)
}
