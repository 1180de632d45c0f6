//! Compiled regex patterns and keyword tables for the extraction pipeline.
//!
//! Regexes are compiled once using `LazyLock`. Keyword lists live here as
//! plain data so each heuristic can be audited and tested on its own.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Cleaning
// =============================================================================

/// Tags removed wholesale before any extraction runs.
pub const REMOVED_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside",
];

/// Class-token substrings marking chrome, consent popups and ads.
pub const UNWANTED_CLASS_TERMS: &[&str] = &[
    "nav",
    "menu",
    "header",
    "footer",
    "cookie",
    "consent",
    "promo",
    "banner",
    "advertisement",
];

/// Matches a class token that is, or is delimited as, an `ad` marker.
/// A bare substring test would also hit `heading`, `thread`, `download`.
pub static AD_CLASS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[-_])ads?($|[-_])").expect("AD_CLASS_TOKEN regex")
});

/// Phrases that mark short storefront or consent blocks.
pub const UNWANTED_PHRASES: &[&str] = &[
    "shop costco.com",
    "add to cart",
    "compare products",
    "we use cookies",
    "accept cookies",
    "privacy policy",
];

// =============================================================================
// Navigation text
// =============================================================================

/// Storefront vocabulary that dominates menus and footers.
pub const NAVIGATION_TERMS: &[&str] = &[
    "shop",
    "department",
    "services",
    "insurance",
    "delivery",
    "installation",
    "business",
    "pharmacy",
    "optical",
    "photo",
    "tire",
    "gas",
    "membership",
    "locations",
    "hours",
    "holiday",
    "contact",
    "help",
    "customer service",
    "savings",
    "coupons",
    "deals",
    "offers",
    "warehouse",
    "costco business",
    "emergency kits",
    "health & personal care",
    "kirkland signature grocery",
    "laundry detergent",
    "paper & plastic",
    "wine, champagne",
    "clothing, luggage",
    "floral & gift",
    "jewelry, watches",
    "commercial appliances",
    "prescription drugs",
    "auto & home insurance",
    "bottled water delivery",
    "personalized photo",
    "parts & service",
    "blinds, shades",
    "custom closet",
    "custom countertops",
    "flooring & carpet",
    "garage door",
    "generator installation",
    "hvac installation",
    "replacement windows",
    "water treatment",
];

/// Link-label shapes: "shop x", "view all", "browse x".
pub static NAVIGATION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"shop\s+\w+|view\s+all|see\s+more|browse\s+\w+|compare\s+\w+|find\s+a\s+\w+|locate\s+\w+",
    )
    .expect("NAVIGATION_PHRASE regex")
});

/// A whole department label joined by `&`, such as "Health & Personal Care".
/// Anchored so that prose like "salt & pepper to taste" does not match.
pub static NAVIGATION_AMPERSAND_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+(?:\s+\w+)?\s+&\s+\w+(?:\s+\w+)?$").expect("NAVIGATION_AMPERSAND_LABEL regex")
});

// =============================================================================
// Locator
// =============================================================================

/// Candidate groups for the main-content locator, visited in order, each
/// with the score a candidate must exceed to be kept.
pub const LOCATOR_GROUPS: &[(&[&str], u32)] = &[
    (&["main", "article", "[role='main']"], 30),
    (
        &[
            ".article-content",
            ".post-content",
            ".entry-content",
            ".main-content",
            ".content-area",
        ],
        20,
    ),
    (&["div"], 50),
];

/// Topic words that earn a candidate container a small bonus.
pub const TOPIC_TERMS: &[&str] = &["recipe", "travel", "tech"];

// =============================================================================
// Title / byline / description
// =============================================================================

/// Trailing `| Costco ...` or `- Costco ...` on `<title>`.
pub static TITLE_SITE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[|\-]\s*Costco.*").expect("TITLE_SITE_SUFFIX regex")
});

/// Byline patterns in priority order; group 1 is the name.
pub static BYLINE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bby\s+([^,\n.]+)",
        r"(?i)\brecipe\s+(?:and\s+photo\s+)?courtesy\s+of\s+([^,\n.]+)",
        r"(?i)\brecipe\s+by\s+([^,\n.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("BYLINE_PATTERNS regex"))
    .collect()
});

/// Paragraphs mentioning these are consent popups, not descriptions.
pub const CONSENT_TERMS: &[&str] = &["cookie", "privacy", "consent", "gdpr"];

// =============================================================================
// Images
// =============================================================================

pub const CDN_HOST: &str = "mobilecontent.costco.com";
pub const CDN_IMAGE_PATH: &str = "/live/resource/img/";
pub const CDN_FOLDER_PREFIX: &str = "static-us-connection";

/// Issue folder used when a filename carries no usable date.
pub const DEFAULT_MONTH: &str = "october";
pub const DEFAULT_FOLDER: &str = "static-us-connection-october-23";

/// `MM_YY` issue token in image filenames.
pub static FILENAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2})_(\d{2})").expect("FILENAME_DATE regex")
});

/// `october-2023` style issue token in page filenames and URLs.
pub static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(january|february|march|april|may|june|july|august|september|october|november|december)-(\d{4})")
        .expect("MONTH_YEAR regex")
});

/// +10 each when found in alt or src.
pub const IMAGE_CONTENT_TERMS: &[&str] = &["recipe", "travel", "tech", "product", "costco"];

/// -15 each when found in alt or src.
pub const IMAGE_PENALTY_TERMS: &[&str] = &["logo", "icon", "nav", "menu", "banner"];

/// Standalone `ad`/`ads` word in alt or src, also -15. A substring test
/// would penalize `bread`, `salad` and `headshot`.
pub static AD_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[^a-z0-9])ads?([^a-z0-9]|$)").expect("AD_WORD regex")
});

/// +40 each when found in alt or src.
pub const AUTHOR_IMAGE_TERMS: &[&str] = &["author", "writer", "headshot", "portrait", "profile"];

/// Named author headshot filenames such as `Andy_Penfold_Headshot.jpg`.
pub static HEADSHOT_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+_[A-Z][a-z]+_[Hh]eadshot").expect("HEADSHOT_FILENAME regex")
});

// =============================================================================
// Interviews
// =============================================================================

/// Who is speaking in a Q&A: `CC`, `KS`, `Costco Connection`, `Jane Doe`.
pub static SPEAKER_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Z]{2,3}|[A-Z][a-z]+\s+[A-Z][a-z]+|\w+\s+Connection|Connection)$")
        .expect("SPEAKER_LABEL regex")
});

pub static INTERVIEW_QUESTION_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:what|how|why|where|when|can|do|is)\b")
        .expect("INTERVIEW_QUESTION_WORD regex")
});

// =============================================================================
// Structure
// =============================================================================

/// Headings containing these are storefront widgets.
pub const EXCLUDED_HEADING_TERMS: &[&str] = &["compare", "shop"];

/// Elements that start a new line in block text.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

// =============================================================================
// Assignment
// =============================================================================

/// Stop words ignored when comparing alt text with heading text.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from",
    "as", "is", "was", "are",
];

/// Broader filler list for contextual keyword overlap.
pub const COMMON_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from",
    "as", "is", "was", "are", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should",
];

/// Site boilerplate words skipped when scanning section text.
pub const SECTION_NOISE_WORDS: &[&str] = &[
    "costco",
    "connection",
    "warehouse",
    "members",
    "october",
    "static",
    "content",
    "image",
    "resource",
    "mobile",
    "website",
    "https",
];

/// Category families shared by images and sections.
pub const CATEGORY_FAMILIES: &[(&str, &[&str])] = &[
    (
        "recipe",
        &["recipe", "cooking", "food", "lasagna", "rollup", "spinach", "dinner", "meal"],
    ),
    (
        "travel",
        &["card", "travel", "costco", "membership", "where", "been", "explore"],
    ),
    ("book", &["book", "author", "story", "novel", "read", "writer", "cover"]),
    (
        "donation",
        &["donation", "glasses", "optical", "program", "give", "help", "charity"],
    ),
    (
        "celebration",
        &["halloween", "celebrate", "costume", "party", "fun", "holiday"],
    ),
    ("pet", &["pet", "animal", "cat", "dog", "furry", "companion"]),
];

/// Families that must not be crossed by a proximity assignment.
pub const MISMATCH_FAMILIES: &[(&str, &[&str])] = &[
    ("book", &["book", "author", "story", "novel", "read"]),
    ("food", &["recipe", "food", "cooking", "lasagna", "rollup"]),
    ("pet", &["pet", "cat", "dog", "animal"]),
    ("travel", &["travel", "card", "where", "been"]),
];

// =============================================================================
// Recipe fields
// =============================================================================

/// Measurement units that mark an ingredient list.
pub static MEASUREMENT_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(cups?|tablespoons?|tbsp|teaspoons?|tsp|ounces?|oz|pounds?|lbs?|grams?|kg|ml|liters?|quarts?|pints?|pinch|cloves?)\b")
        .expect("MEASUREMENT_UNIT regex")
});

/// Labels that split a recipe into sub-recipes.
pub const RECIPE_SECTION_LABELS: &[&str] = &[
    "FILLING",
    "STREUSEL",
    "CAKE",
    "INGREDIENTS",
    "TOPPING",
    "CRUST",
    "SAUCE",
    "DRESSING",
    "GLAZE",
];

/// Base forms. Words match a verb or one of its inflections, never a longer
/// word that merely starts with one.
pub const COOKING_VERBS: &[&str] = &[
    "preheat",
    "heat",
    "cook",
    "bake",
    "mix",
    "stir",
    "add",
    "combine",
    "place",
    "put",
    "pour",
    "slice",
    "chop",
    "dice",
    "blend",
    "whisk",
    "season",
    "serve",
    "garnish",
    "remove",
    "drain",
    "cover",
    "simmer",
    "boil",
    "bring",
    "reduce",
    "cool",
    "refrigerate",
    "spread",
    "roll",
    "sprinkle",
    "transfer",
    "toss",
    "fold",
    "grill",
    "roast",
];

pub const PREP_TIME_INDICATORS: &[&str] = &["prep time", "preparation", "prep:"];
pub const COOK_TIME_INDICATORS: &[&str] = &["cook time", "cooking time", "bake for", "bake", "cook:"];

/// Amount and unit following a time indicator.
pub const TIME_AMOUNT: &str = r"[:\s]*(\d+(?:\s*-\s*\d+)?\s*(?:minutes?|mins?|hours?|hrs?))";

pub static SERVINGS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:serves|servings?)[:\s]*(\d+(?:\s*-\s*\d+)?)",
        r"makes\s+(\d+(?:\s*-\s*\d+)?\s*(?:servings?|portions?))",
        r"makes\s+about\s+(\d+(?:\s*to\s*\d+)?\s*(?:cups?|servings?))",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("SERVINGS_PATTERNS regex"))
    .collect()
});

// =============================================================================
// Other field builders
// =============================================================================

/// Capitalized place names after "visit" or "explore". Matches stay within
/// one line of block text.
pub static DESTINATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"visit[^\S\n]+([A-Z][a-z]+(?:[^\S\n]+[A-Z][a-z]+)*)",
        r"explore[^\S\n]+([A-Z][a-z]+(?:[^\S\n]+[A-Z][a-z]+)*)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("DESTINATION_PATTERNS regex"))
    .collect()
});

pub const TRAVEL_TIP_TERMS: &[&str] = &["tip:", "advice", "recommend", "best time"];
pub const CULTURE_TERMS: &[&str] = &["culture", "history", "tradition", "heritage"];

pub const TECH_BRANDS: &[&str] = &[
    "Apple", "Samsung", "Google", "Microsoft", "Sony", "LG", "HP", "Dell", "iRobot", "Dyson",
];
pub const TECH_FEATURE_TERMS: &[&str] = &["feature", "capability", "function", "technology"];

pub const WELLNESS_TERMS: &[&str] = &["health", "wellness", "exercise", "nutrition"];
pub const FAMILY_TERMS: &[&str] = &["family", "kids", "children", "activity"];

/// Member page layouts and the phrases that give each one away, checked in
/// order.
pub const MEMBER_FORMATS: &[(&str, &[&str])] = &[
    ("poll", &["poll", "facebook page"]),
    ("comments", &["member comments"]),
    ("story", &["singer-songwriter", "healing voice"]),
];

pub const DEFAULT_MEMBER_FORMAT: &str = "general";

/// Words that rule a capitalized line out as a member's name.
pub const NOT_NAME_WORDS: &[&str] = &[
    "what", "when", "where", "how", "why", "who", "which", "the", "and", "but", "for", "you",
    "your", "our", "costco", "member", "members", "poll", "question", "response", "facebook",
    "page", "connection", "magazine", "comments",
];

/// Place or channel after a signature comma: "Seattle, WA", "via email".
pub static MEMBER_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:via\s+email|[A-Z][A-Za-z.'-]*(?:[\s,]+[A-Z][A-Za-z.'-]*){0,4})$")
        .expect("MEMBER_LOCATION regex")
});

/// First-person words that mark a member's own voice.
pub const FIRST_PERSON_WORDS: &[&str] = &["i", "my", "me", "we", "our", "us"];
pub const PERSONAL_PHRASES: &[&str] = &["thank you", "look forward", "my favorite"];
pub const MEMBER_BUSINESS_WORDS: &[&str] = &["shop", "department", "warehouse", "compare", "cart"];

/// Lines containing these are page headers, not member comments.
pub const COMMENT_HEADER_TERMS: &[&str] = &["costco", "member comments"];

/// Anything up to and including a question mark.
pub static QUESTION_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z][^?]*\?\s*").expect("QUESTION_SPAN regex")
});

/// Two capitalized words, the shape of a story subject's name.
pub static PERSON_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+\s+[A-Z][a-z]+)\b").expect("PERSON_NAME regex")
});

/// Masthead and month words. Story subjects containing them are not
/// people, and article slugs share them with every image.
pub const MASTHEAD_AND_MONTH_WORDS: &[&str] = &[
    "costco", "connection", "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december",
];

/// Story paragraphs containing these are captions or credits.
pub const STORY_SKIP_TERMS: &[&str] = &["Costco Connection", "©", "Left to right"];

/// Text between straight or curly double quotes.
pub static QUOTED_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["“]([^"”\n]{20,200})["”]"#).expect("QUOTED_TEXT regex")
});

/// Sentences in the subject's own voice.
pub static FIRST_PERSON_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:For me,|Music has|I)\s[^.\n]{20,}\.").expect("FIRST_PERSON_STATEMENT regex")
});

pub const QUOTE_FEELING_TERMS: &[&str] = &[
    "therapeutic", "healing", "emotional", "music", "feel", "heart", "struggling", "alone",
    "wounds", "solace", "grateful", "hope", "love", "joy",
];
pub const QUOTE_EXCLUDED_TERMS: &[&str] = &[
    "costco", "shop", "warehouse", "department", "compare", "product", "photography",
    "copyright", "©", "stock.adobe", "image",
];

pub const COSTCO_VALUE_TERMS: &[&str] = &["value", "member", "quality", "service"];

pub static KIRKLAND_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Kirkland Signature ([^.\n]+)").expect("KIRKLAND_SIGNATURE regex")
});

/// Link slug prefix to magazine department, checked in order.
pub const ARTICLE_CATEGORIES: &[(&[&str], &str)] = &[
    (&["/connection-fye-"], "For Your Entertainment"),
    (&["/connection-fyt-"], "For Your Table"),
    (&["/connection-fyh-"], "For Your Health"),
    (&["/connection-tech-", "/connection-power-up"], "Tech Connection"),
    (&["/connection-travel-"], "Travel Connection"),
    (&["/connection-recipe-"], "Recipes"),
    (&["/connection-member-"], "Member Connection"),
    (&["/connection-publishers-"], "Publisher's Note"),
    (&["/connection-ss-"], "Special Section"),
    (&["/connection-treasure-"], "Treasure Hunt"),
    (&["/connection-costco-life"], "Costco Life"),
];

pub const DEFAULT_ARTICLE_CATEGORY: &str = "Inside Costco";

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});
