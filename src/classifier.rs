//! Content-type classification.
//!
//! Each rule awards points for keyword hits in three places:
//!
//! | where               | points per keyword |
//! |---------------------|--------------------|
//! | URL or filename     | 20                 |
//! | `<title>` text      | 10                 |
//! | document text       | 5                  |
//!
//! The highest-scoring rule wins if it reaches its own `required_score`;
//! otherwise the page is [`ContentType::General`]. Rules are plain data
//! (see [`ContentTypeRule::defaults`]) and can be replaced through
//! [`crate::Options::content_type_rules`].

use crate::result::ContentType;

const URL_POINTS: u32 = 20;
const TITLE_POINTS: u32 = 10;
const CONTENT_POINTS: u32 = 5;

/// Keyword table entry for one content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeRule {
    pub content_type: ContentType,
    /// Matched against the lowercased URL and filename.
    pub url_keywords: Vec<String>,
    /// Matched against the lowercased `<title>` text.
    pub title_keywords: Vec<String>,
    /// Matched against the lowercased document text.
    pub content_keywords: Vec<String>,
    /// Minimum score for this type to be chosen.
    pub required_score: u32,
}

impl ContentTypeRule {
    /// Build a rule from string slices.
    #[must_use]
    pub fn new(
        content_type: ContentType,
        url_keywords: &[&str],
        title_keywords: &[&str],
        content_keywords: &[&str],
        required_score: u32,
    ) -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| (*w).to_lowercase()).collect();
        Self {
            content_type,
            url_keywords: owned(url_keywords),
            title_keywords: owned(title_keywords),
            content_keywords: owned(content_keywords),
            required_score,
        }
    }

    /// The built-in table for the magazine archive, in tie-break order.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                ContentType::Recipe,
                &["recipe"],
                &["recipe", "roll-ups", "jam", "crumble"],
                &["ingredients", "directions", "tablespoon", "cup", "cooking"],
                3,
            ),
            Self::new(
                ContentType::Travel,
                &["travel-connection", "tale-of"],
                &["travel", "cities", "destination"],
                &["destination", "attractions", "visit", "explore"],
                3,
            ),
            Self::new(
                ContentType::Tech,
                &["tech", "power-up"],
                &["tech", "power", "technology"],
                &["technology", "device", "features", "review"],
                3,
            ),
            Self::new(
                ContentType::Editorial,
                &["publisher", "note", "front-cover"],
                &["publisher", "note", "editorial"],
                &["costco", "members", "connection", "sandy torrey"],
                2,
            ),
            Self::new(
                ContentType::Member,
                &["member-poll", "member-comments"],
                &["member", "poll", "comments"],
                &["member", "poll", "facebook", "comments"],
                2,
            ),
            Self::new(
                ContentType::Shopping,
                &["treasure-hunt", "buying-smart"],
                &["treasure", "buying", "smart"],
                &[
                    "product",
                    "buying",
                    "costco",
                    "warehouse",
                    "featured products",
                    "item",
                    "merchandise",
                    "installation",
                    "dealers",
                    "kitchen",
                    "bathroom",
                    "countertop",
                ],
                2,
            ),
            Self::new(
                ContentType::Lifestyle,
                &["costco-life", "fye", "supplier", "refreshing-options"],
                &["celebrate", "entertainment", "author", "refreshing options"],
                &[
                    "lifestyle",
                    "entertainment",
                    "author",
                    "book",
                    "wellness",
                    "health",
                    "hydration",
                    "water",
                    "stay hydrated",
                    "question",
                    "answer",
                    "interview",
                ],
                2,
            ),
            Self::new(
                ContentType::MagazineFrontCover,
                &["edition", "front-cover", "connection-front"],
                &["edition", "front cover", "costco connection"],
                &[
                    "cover story",
                    "in this issue",
                    "special section",
                    "featured sections",
                    "download the pdf",
                ],
                2,
            ),
        ]
    }

    /// Score `input` against this rule.
    #[must_use]
    pub fn score(&self, input: &ClassificationInput<'_>) -> u32 {
        let url = input.url.to_lowercase();
        let filename = input.filename.to_lowercase();
        let title = input.title.to_lowercase();
        let text = input.text.to_lowercase();

        let url_hits = self
            .url_keywords
            .iter()
            .filter(|k| url.contains(k.as_str()) || filename.contains(k.as_str()))
            .count();
        let title_hits = hits(&self.title_keywords, &title);
        let content_hits = hits(&self.content_keywords, &text);

        URL_POINTS * url_hits as u32
            + TITLE_POINTS * title_hits as u32
            + CONTENT_POINTS * content_hits as u32
    }
}

fn hits(keywords: &[String], haystack: &str) -> usize {
    keywords
        .iter()
        .filter(|k| haystack.contains(k.as_str()))
        .count()
}

/// What the classifier looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationInput<'a> {
    pub url: &'a str,
    pub filename: &'a str,
    /// `<title>` element text.
    pub title: &'a str,
    /// Full text of the cleaned document.
    pub text: &'a str,
}

/// Classifier outcome with the per-rule scores that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub content_type: ContentType,
    /// Score of the best rule, whether or not it cleared its threshold.
    pub score: u32,
    /// Every rule's score, in rule order.
    pub scores: Vec<(ContentType, u32)>,
}

/// Pick a content type for `input` using `rules`.
///
/// Ties go to the rule declared first. An empty rule table always yields
/// [`ContentType::General`].
///
/// # Example
///
/// ```rust
/// use connection_extract::{classify, ClassificationInput, ContentType, ContentTypeRule};
///
/// let input = ClassificationInput {
///     url: "https://www.costco.com/connection-recipe-spinach-lasagna.html",
///     title: "Spinach Lasagna Roll-Ups",
///     ..ClassificationInput::default()
/// };
/// let result = classify(&input, &ContentTypeRule::defaults());
/// assert_eq!(result.content_type, ContentType::Recipe);
/// ```
#[must_use]
pub fn classify(input: &ClassificationInput<'_>, rules: &[ContentTypeRule]) -> Classification {
    let scores: Vec<(ContentType, u32)> = rules
        .iter()
        .map(|rule| (rule.content_type, rule.score(input)))
        .collect();

    let mut best: Option<(&ContentTypeRule, u32)> = None;
    for (rule, &(_, score)) in rules.iter().zip(&scores) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((rule, score));
        }
    }

    let (content_type, score) = match best {
        Some((rule, score)) if score >= rule.required_score => (rule.content_type, score),
        Some((_, score)) => (ContentType::General, score),
        None => (ContentType::General, 0),
    };

    log::debug!("classified as {content_type} (score {score}), scores: {scores:?}");

    Classification {
        content_type,
        score,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<ContentTypeRule> {
        ContentTypeRule::defaults()
    }

    #[test]
    fn test_default_table_order() {
        let order: Vec<ContentType> = rules().iter().map(|r| r.content_type).collect();
        assert_eq!(
            order,
            [
                ContentType::Recipe,
                ContentType::Travel,
                ContentType::Tech,
                ContentType::Editorial,
                ContentType::Member,
                ContentType::Shopping,
                ContentType::Lifestyle,
                ContentType::MagazineFrontCover,
            ]
        );
    }

    #[test]
    fn test_rule_weights() {
        let rule = ContentTypeRule::new(ContentType::Tech, &["tech"], &["power"], &["device"], 3);
        let input = ClassificationInput {
            url: "https://x/connection-tech-review.html",
            filename: "",
            title: "Power Up",
            text: "A new device",
        };
        assert_eq!(rule.score(&input), 35);
    }

    #[test]
    fn test_url_keyword_counts_once_for_url_and_filename() {
        let rule = ContentTypeRule::new(ContentType::Recipe, &["recipe"], &[], &[], 1);
        let input = ClassificationInput {
            url: "https://x/recipe.html",
            filename: "recipe.html",
            ..ClassificationInput::default()
        };
        assert_eq!(rule.score(&input), 20);
    }

    #[test]
    fn test_title_drives_recipe() {
        let input = ClassificationInput {
            title: "Spinach Lasagna Roll-Ups | Costco",
            text: "2 cups ricotta cheese",
            ..ClassificationInput::default()
        };
        let result = classify(&input, &rules());
        assert_eq!(result.content_type, ContentType::Recipe);
        assert_eq!(result.score, 15);
    }

    #[test]
    fn test_no_keywords_is_general() {
        let input = ClassificationInput {
            url: "https://example.com/page.html",
            filename: "page.html",
            title: "Hello",
            text: "Nothing relevant here.",
        };
        let result = classify(&input, &rules());
        assert_eq!(result.content_type, ContentType::General);
        assert_eq!(result.score, 0);
        assert_eq!(result.scores.len(), 8);
    }

    #[test]
    fn test_below_required_is_general() {
        let table = vec![ContentTypeRule::new(ContentType::Tech, &[], &[], &["device"], 10)];
        let input = ClassificationInput {
            text: "device",
            ..ClassificationInput::default()
        };
        let result = classify(&input, &table);
        assert_eq!(result.content_type, ContentType::General);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_tie_goes_to_first_rule() {
        let table = vec![
            ContentTypeRule::new(ContentType::Travel, &[], &[], &["shared"], 1),
            ContentTypeRule::new(ContentType::Tech, &[], &[], &["shared"], 1),
        ];
        let input = ClassificationInput {
            text: "shared",
            ..ClassificationInput::default()
        };
        assert_eq!(classify(&input, &table).content_type, ContentType::Travel);

        let reversed: Vec<_> = table.into_iter().rev().collect();
        assert_eq!(classify(&input, &reversed).content_type, ContentType::Tech);
    }

    #[test]
    fn test_empty_table() {
        let result = classify(&ClassificationInput::default(), &[]);
        assert_eq!(result.content_type, ContentType::General);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let table = vec![ContentTypeRule::new(ContentType::Editorial, &[], &[], &["Sandy Torrey"], 2)];
        let input = ClassificationInput {
            text: "A NOTE FROM SANDY TORREY",
            ..ClassificationInput::default()
        };
        assert_eq!(classify(&input, &table).content_type, ContentType::Editorial);
    }
}
