//! Optional enhancement of sparse results by an external text model.
//!
//! The model itself lives behind the [`Enhancer`] trait; this module only
//! decides when to ask, writes the prompt, and folds the answer back into
//! the result. The answer can only fill fields the extractor left empty or
//! obviously weak. Failures are logged and the input is returned as is.
//!
//! ```
//! use connection_extract::{enhance, ExtractedContent, NoopEnhancer, Options};
//!
//! let content = ExtractedContent::default();
//! let opts = Options { always_enhance: true, ..Options::default() };
//! let out = enhance(content.clone(), &opts, &NoopEnhancer);
//! assert_eq!(out, content);
//! ```

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::quality::quality_score;
use crate::result::{ContentType, ExtractedContent, FieldValue};
use crate::text::{char_len, truncate_chars};
use crate::Options;

const MIN_TITLE_CHARS: usize = 5;
const MIN_DESCRIPTION_CHARS: usize = 20;
const MIN_INGREDIENTS: usize = 2;
const PREVIEW_PARAGRAPHS: usize = 3;

/// A text-completion collaborator.
pub trait Enhancer {
    /// Completion for `prompt`. Expected to contain one JSON object.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Enhancer used when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnhancer;

impl Enhancer for NoopEnhancer {
    fn complete(&self, _prompt: &str) -> Result<String> {
        Err(Error::EnhancerUnavailable)
    }
}

/// Fields an enhancer may return. Anything else in the object is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnhancerResponse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub byline: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
}

/// True if the result is sparse enough to be worth an enhancer call.
#[must_use]
pub fn needs_enhancement(content: &ExtractedContent, opts: &Options) -> bool {
    if opts.always_enhance || char_len(&content.title) < MIN_TITLE_CHARS {
        return true;
    }
    content.content_type == ContentType::Recipe
        && (content.metadata.list("ingredients").len() < MIN_INGREDIENTS
            || content.metadata.list("instructions").is_empty())
}

fn image_lines(content: &ExtractedContent, limit: usize) -> String {
    if content.images.is_empty() {
        return "No quality images found".to_string();
    }
    let mut lines = Vec::new();
    for (idx, image) in content.images.iter().take(limit).enumerate() {
        let marker = if idx == 0 {
            "BEST".to_string()
        } else {
            format!("#{}", idx + 1)
        };
        lines.push(format!("{marker} (Score: {}): {}", image.score, image.src));
        if !image.alt.is_empty() {
            lines.push(format!("    Alt: {}", image.alt));
        }
    }
    lines.join("\n")
}

const GENERAL_TEMPLATE: &str = r#"{
  "title": "Only if current title is missing",
  "byline": "By <name>, only if the page credits an author",
  "description": "Only if current description is missing"
}"#;

const RECIPE_TEMPLATE: &str = r#"{
  "title": "Only if current title is missing or generic",
  "byline": "By <name>, only if the page credits an author",
  "description": "Only if current description is missing",
  "ingredients": ["Only if current ingredients are missing", "keep every sub-recipe section"],
  "instructions": ["Only if current instructions are missing", "steps exactly as written"],
  "prep_time": "Only if missing",
  "cook_time": "Only if missing",
  "servings": "Only if missing"
}"#;

/// Prompt asking the model to fill the missing fields of `content`.
#[must_use]
pub fn build_prompt(content: &ExtractedContent, opts: &Options) -> String {
    let kind = content.content_type.as_str().to_uppercase();
    let url = content.source.url.as_deref().unwrap_or_default();
    let filename = content.source.filename.as_deref().unwrap_or_default();
    let preview = truncate_chars(
        &content
            .main_content
            .iter()
            .take(PREVIEW_PARAGRAPHS)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n"),
        opts.prompt_content_limit,
    );

    let mut prompt = format!(
        "ENHANCE MISSING FIELDS ONLY for this {kind} page from Costco Connection magazine.\n\n\
         SOURCE INFO:\n\
         URL: {url}\n\
         Filename: {filename}\n\
         Current Title: \"{}\"\n\
         Current Byline: \"{}\"\n\n\
         AVAILABLE IMAGES (highest score first):\n{}\n\n\
         RULES:\n\
         1. Only provide fields that are currently missing or empty.\n\
         2. Do not modify existing good data.\n\
         3. Do not invent bylines; use only attribution found in the content.\n\
         4. Copy ingredients and instructions exactly as written.\n\
         5. Keep every recipe section (FILLING, STREUSEL, CAKE) if present.\n\n\
         CONTENT PREVIEW:\n{preview}\n",
        content.title,
        content.byline,
        image_lines(content, opts.prompt_image_limit),
    );

    if content.content_type == ContentType::Recipe {
        prompt.push_str(&format!(
            "\nCURRENT RECIPE DATA:\nIngredients: {} found\nInstructions: {} found\n",
            content.metadata.list("ingredients").len(),
            content.metadata.list("instructions").len(),
        ));
        prompt.push_str("\nOUTPUT (JSON only):\n");
        prompt.push_str(RECIPE_TEMPLATE);
    } else {
        prompt.push_str("\nOUTPUT (JSON only):\n");
        prompt.push_str(GENERAL_TEMPLATE);
    }
    prompt.push_str("\n\nProvide ONLY missing fields.");
    prompt
}

/// First brace-balanced `{...}` object in `text`. Braces inside JSON
/// strings do not count.
pub fn extract_json_object(text: &str) -> Result<&str> {
    let start = text
        .find('{')
        .ok_or_else(|| Error::MalformedResponse("no JSON object".into()))?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    Err(Error::MalformedResponse("unbalanced JSON object".into()))
}

/// Parse a completion into an [`EnhancerResponse`].
pub fn parse_response(text: &str) -> Result<EnhancerResponse> {
    let object = extract_json_object(text)?;
    Ok(serde_json::from_str(object)?)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

fn non_empty_list(value: Option<&Vec<String>>) -> Option<Vec<String>> {
    value.filter(|items| !items.is_empty()).cloned()
}

/// Fold `response` into `original`, filling only missing or weak fields.
#[must_use]
pub fn merge_response(original: ExtractedContent, response: &EnhancerResponse) -> ExtractedContent {
    let mut content = original;
    let mut changed = false;

    if let Some(title) = non_empty(response.title.as_ref()) {
        if char_len(&content.title) < MIN_TITLE_CHARS
            || content.title.to_lowercase().contains("untitled")
        {
            debug!("enhancer title: {title}");
            content.title = title;
            changed = true;
        }
    }

    if let Some(description) = non_empty(response.description.as_ref()) {
        if char_len(&content.description) < MIN_DESCRIPTION_CHARS {
            content.description = description;
            changed = true;
        }
    }

    if let Some(byline) = non_empty(response.byline.as_ref()) {
        if byline.starts_with("By ")
            && (content.byline.is_empty() || content.byline.to_lowercase().contains("costco"))
        {
            debug!("enhancer byline: {byline}");
            content.byline = byline;
            changed = true;
        }
    }

    if content.content_type == ContentType::Recipe {
        let mut metadata = content.metadata.clone();

        if let Some(items) = non_empty_list(response.ingredients.as_ref()) {
            if metadata.list("ingredients").len() < MIN_INGREDIENTS {
                metadata = metadata.with("ingredients", FieldValue::List(items));
                changed = true;
            }
        }
        if let Some(steps) = non_empty_list(response.instructions.as_ref()) {
            if metadata.list("instructions").is_empty() {
                metadata = metadata.with("instructions", FieldValue::List(steps));
                changed = true;
            }
        }
        for (key, value) in [
            ("prep_time", &response.prep_time),
            ("cook_time", &response.cook_time),
            ("servings", &response.servings),
        ] {
            if let Some(value) = non_empty(value.as_ref()) {
                if metadata.text(key).is_empty() {
                    metadata = metadata.with(key, FieldValue::Text(value));
                    changed = true;
                }
            }
        }

        content.metadata = metadata;
    }

    if changed {
        content.enhanced = true;
        content.quality_score = quality_score(&content);
    }
    content
}

/// Ask `enhancer` to fill gaps in `content` when it looks sparse.
///
/// Returns `content` unchanged if no call is needed or if the call or its
/// response fails.
#[must_use]
pub fn enhance(content: ExtractedContent, opts: &Options, enhancer: &dyn Enhancer) -> ExtractedContent {
    if !needs_enhancement(&content, opts) {
        return content;
    }

    let prompt = build_prompt(&content, opts);
    match enhancer.complete(&prompt).and_then(|text| parse_response(&text)) {
        Ok(response) => {
            let merged = merge_response(content, &response);
            if merged.enhanced {
                info!("enhanced {} page: {}", merged.content_type, merged.title);
            }
            merged
        }
        Err(e) => {
            warn!("enhancement skipped: {e}");
            content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ImageRef, Metadata};

    struct Canned(&'static str);

    impl Enhancer for Canned {
        fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn recipe(title: &str) -> ExtractedContent {
        ExtractedContent {
            content_type: ContentType::Recipe,
            title: title.to_string(),
            metadata: Metadata::new().with("ingredients", FieldValue::List(vec!["1 cup flour".into()])),
            ..ExtractedContent::default()
        }
    }

    #[test]
    fn test_extract_json_object_ignores_braces_in_strings() {
        let text = r#"Sure! {"title": "Fun {with} braces", "x": {"y": "\"}"}} trailing }"#;
        assert_eq!(
            extract_json_object(text).ok(),
            Some(r#"{"title": "Fun {with} braces", "x": {"y": "\"}"}}"#)
        );
        assert!(matches!(extract_json_object("no json"), Err(Error::MalformedResponse(_))));
        assert!(matches!(extract_json_object("{\"a\": 1"), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_needs_enhancement() {
        let opts = Options::default();
        assert!(needs_enhancement(&recipe("Spinach Lasagna Roll Ups"), &opts));
        let complete = ExtractedContent {
            title: "Going Batty".into(),
            ..ExtractedContent::default()
        };
        assert!(!needs_enhancement(&complete, &opts));
        assert!(needs_enhancement(&ExtractedContent::default(), &opts));
    }

    #[test]
    fn test_prompt_lists_images_and_recipe_template() {
        let mut content = recipe("Roll Ups");
        content.images = vec![
            ImageRef {
                src: "https://x/a.jpg".into(),
                alt: "Roll ups".into(),
                score: 160,
                ..ImageRef::default()
            },
            ImageRef {
                src: "https://x/b.jpg".into(),
                score: 40,
                ..ImageRef::default()
            },
        ];
        let prompt = build_prompt(&content, &Options::default());
        assert!(prompt.contains("this RECIPE page"));
        assert!(prompt.contains("BEST (Score: 160): https://x/a.jpg"));
        assert!(prompt.contains("    Alt: Roll ups"));
        assert!(prompt.contains("#2 (Score: 40): https://x/b.jpg"));
        assert!(prompt.contains("Ingredients: 1 found"));
        assert!(prompt.contains("\"servings\""));
    }

    #[test]
    fn test_prompt_content_limit() {
        let content = ExtractedContent {
            main_content: vec!["x".repeat(100)],
            ..ExtractedContent::default()
        };
        let opts = Options {
            prompt_content_limit: 10,
            ..Options::default()
        };
        let prompt = build_prompt(&content, &opts);
        assert!(prompt.contains(&format!("CONTENT PREVIEW:\n{}\n", "x".repeat(10))));
        assert!(!prompt.contains(&"x".repeat(11)));
    }

    #[test]
    fn test_merge_fills_only_gaps() {
        let content = ExtractedContent {
            byline: "By Costco Kitchen Team".into(),
            ..recipe("Roll Ups")
        };
        let response = EnhancerResponse {
            title: Some("Different Title".into()),
            byline: Some("By Kylie Lato".into()),
            ingredients: Some(vec!["2 cups ricotta".into(), "1 tsp salt".into()]),
            servings: Some("4".into()),
            ..EnhancerResponse::default()
        };
        let merged = merge_response(content, &response);
        assert_eq!(merged.title, "Roll Ups");
        assert_eq!(merged.byline, "By Kylie Lato");
        assert_eq!(merged.metadata.list("ingredients").len(), 2);
        assert_eq!(merged.metadata.text("servings"), "4");
        assert!(merged.enhanced);
    }

    #[test]
    fn test_merge_rejects_unprefixed_byline() {
        let response = EnhancerResponse {
            byline: Some("Kylie Lato".into()),
            ..EnhancerResponse::default()
        };
        let merged = merge_response(ExtractedContent::default(), &response);
        assert!(merged.byline.is_empty());
        assert!(!merged.enhanced);
    }

    #[test]
    fn test_enhance_swallows_failures() {
        let content = recipe("Roll Ups");
        assert_eq!(enhance(content.clone(), &Options::default(), &NoopEnhancer), content);
        assert_eq!(enhance(content.clone(), &Options::default(), &Canned("not json")), content);
    }

    #[test]
    fn test_enhance_merges_canned_response() {
        let canned = Canned(r#"Here you go: {"instructions": ["Roll the noodles."], "title": "x"}"#);
        let out = enhance(recipe("Roll Ups"), &Options::default(), &canned);
        assert_eq!(out.metadata.list("instructions"), ["Roll the noodles."]);
        assert!(out.enhanced);
        assert!(out.quality_score > 0);
    }
}
