//! Member Connection fields: poll questions, member responses, comment
//! letters, member stories and quotes.
//!
//! Member pages sign each contribution with a line of its own: a name,
//! optionally followed by a place ("Jane Doe, Seattle, WA"). Responses are
//! found by pairing those signature lines with nearby lines written in the
//! first person.

use std::collections::BTreeMap;

use super::ContentView;
use crate::navigation::is_navigation_text;
use crate::patterns::{
    COMMENT_HEADER_TERMS, DEFAULT_MEMBER_FORMAT, FIRST_PERSON_STATEMENT, FIRST_PERSON_WORDS,
    MASTHEAD_AND_MONTH_WORDS, MEMBER_BUSINESS_WORDS, MEMBER_FORMATS, MEMBER_LOCATION, NOT_NAME_WORDS,
    PERSONAL_PHRASES, PERSON_NAME, QUESTION_SPAN, QUOTED_TEXT, QUOTE_EXCLUDED_TERMS,
    QUOTE_FEELING_TERMS, STORY_SKIP_TERMS,
};
use crate::result::{FieldValue, Metadata};
use crate::text::{char_len, contains_any, count_terms, jaccard, normalize_whitespace, push_unique};

const MAX_SHORT_PARAGRAPH_CHARS: usize = 200;
const MAX_RESPONSES: usize = 15;
const MAX_QUOTES: usize = 5;
const STORY_QUOTES: usize = 3;
const KEY_QUOTES: usize = 2;
const STORY_PARAGRAPHS: usize = 2;
const SUBJECT_PARAGRAPHS: usize = 3;
const RESPONSE_LOOKAROUND: usize = 3;
const MIN_RESPONSE_CHARS: usize = 21;
const MIN_COMMENT_CHARS: usize = 51;
const MIN_STORY_PARAGRAPH_CHARS: usize = 31;
const MIN_QUOTE_CHARS: usize = 20;
const MAX_NAME_CHARS: usize = 100;
const SIMILAR_RESPONSE: f64 = 0.8;

/// Where a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Answer to a poll question.
    Response,
    /// Letter from the comments page.
    Comment,
    /// Feature about one member.
    Story,
}

impl ResponseKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Response => "response",
            Self::Comment => "comment",
            Self::Story => "story",
        }
    }
}

/// One member's contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberResponse {
    pub name: String,
    pub response: String,
    pub kind: ResponseKind,
    /// Stories only.
    pub quotes: Vec<String>,
}

impl MemberResponse {
    fn new(name: String, response: String, kind: ResponseKind) -> Self {
        Self {
            name,
            response,
            kind,
            quotes: Vec::new(),
        }
    }

    fn record(&self) -> BTreeMap<String, String> {
        let mut record = BTreeMap::from([
            ("name".to_string(), self.name.clone()),
            ("response".to_string(), self.response.clone()),
            ("type".to_string(), self.kind.as_str().to_string()),
        ]);
        if self.kind == ResponseKind::Story {
            record.insert("quotes".to_string(), self.quotes.join(" | "));
        }
        record
    }
}

/// Headings and short paragraphs that ask something.
#[must_use]
pub fn poll_questions(view: &ContentView) -> Vec<String> {
    let mut questions = Vec::new();
    let headings = view.headings.iter().map(|h| &h.text);
    let short_paragraphs = view
        .paragraphs
        .iter()
        .filter(|p| char_len(p) <= MAX_SHORT_PARAGRAPH_CHARS);

    for text in headings.chain(short_paragraphs) {
        if text.contains('?') {
            push_unique(&mut questions, text.clone());
        }
    }
    questions
}

/// `"poll"`, `"comments"`, `"story"` or `"general"`.
#[must_use]
pub fn member_format(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    MEMBER_FORMATS
        .iter()
        .find(|(_, indicators)| contains_any(&lower, indicators))
        .map_or(DEFAULT_MEMBER_FORMAT, |(format, _)| *format)
}

fn is_name_word(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
        && word.chars().all(|c| c.is_ascii_alphabetic() || c == '\'' || c == '-')
        && !NOT_NAME_WORDS.contains(&word.to_lowercase().as_str())
}

/// The member's name from a signature line.
///
/// Accepts two to six capitalized words, optionally followed by a comma and
/// a place or "via email".
#[must_use]
pub fn member_name(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || char_len(line) > MAX_NAME_CHARS {
        return None;
    }
    let (name, location) = match line.split_once(',') {
        Some((name, rest)) => (name.trim(), Some(rest.trim())),
        None => (line, None),
    };
    if location.is_some_and(|place| !MEMBER_LOCATION.is_match(place)) {
        return None;
    }
    let words: Vec<&str> = name.split_whitespace().collect();
    if !(2..=6).contains(&words.len()) || !words.iter().all(|w| is_name_word(w)) {
        return None;
    }
    Some(words.join(" "))
}

/// True if `text` is written in a member's own voice.
#[must_use]
pub fn looks_like_member_response(text: &str) -> bool {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() || text.trim_end().ends_with('?') {
        return false;
    }

    let personal = contains_any(&lower, PERSONAL_PHRASES)
        || words.iter().any(|w| FIRST_PERSON_WORDS.contains(w));
    let business = count_terms(&lower, MEMBER_BUSINESS_WORDS);
    personal && business as f64 / words.len() as f64 <= 0.5 && !is_navigation_text(text)
}

/// Questions removed, whitespace collapsed.
#[must_use]
pub fn clean_member_response(text: &str) -> String {
    normalize_whitespace(&QUESTION_SPAN.replace_all(text, " "))
}

fn is_response_line(line: &str) -> bool {
    char_len(line) >= MIN_RESPONSE_CHARS && looks_like_member_response(line)
}

/// Nearest response line before `at`, then after it, without crossing
/// another signature.
fn response_near(lines: &[&str], at: usize) -> Option<String> {
    let before = lines[at.saturating_sub(RESPONSE_LOOKAROUND)..at]
        .iter()
        .rev()
        .take_while(|line| member_name(line).is_none());
    let after = lines[at + 1..]
        .iter()
        .take(RESPONSE_LOOKAROUND)
        .take_while(|line| member_name(line).is_none());

    before
        .chain(after)
        .find(|line| is_response_line(line))
        .map(|line| (*line).to_string())
}

/// Signature shortly after `at`, unless another response comes first.
fn name_after(lines: &[&str], at: usize) -> Option<String> {
    for line in lines[at + 1..].iter().take(RESPONSE_LOOKAROUND) {
        if let Some(name) = member_name(line) {
            return Some(name);
        }
        if is_response_line(line) {
            return None;
        }
    }
    None
}

/// Drop repeated names and near-identical responses, first wins.
fn deduplicate(responses: Vec<MemberResponse>) -> Vec<MemberResponse> {
    let mut kept: Vec<MemberResponse> = Vec::new();
    for response in responses {
        let repeated = kept.iter().any(|k| {
            k.name == response.name || jaccard(&k.response, &response.response) > SIMILAR_RESPONSE
        });
        if !repeated {
            kept.push(response);
        }
    }
    kept
}

/// Name and response pairs from the lines of a poll page.
///
/// A signature line takes the nearest first-person line around it. A
/// first-person line with a signature right after it is paired too.
#[must_use]
pub fn member_responses(lines: &[&str]) -> Vec<MemberResponse> {
    let mut pairs = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if let Some(name) = member_name(line) {
            if let Some(response) = response_near(lines, i) {
                pairs.push(MemberResponse::new(name, response, ResponseKind::Response));
            }
        } else if is_response_line(line) {
            if let Some(name) = name_after(lines, i) {
                pairs.push(MemberResponse::new(name, (*line).to_string(), ResponseKind::Response));
            }
        }
    }

    deduplicate(pairs)
}

/// Letters from a comments page: the last long first-person line above
/// each signature.
#[must_use]
pub fn comment_sections(lines: &[&str]) -> Vec<MemberResponse> {
    let mut comments = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(name) = member_name(line) else {
            continue;
        };
        let comment = lines[..i]
            .iter()
            .rev()
            .take_while(|prev| member_name(prev).is_none())
            .find(|prev| {
                char_len(prev) >= MIN_COMMENT_CHARS
                    && !contains_any(&prev.to_lowercase(), COMMENT_HEADER_TERMS)
                    && looks_like_member_response(prev)
            });
        if let Some(comment) = comment {
            comments.push(MemberResponse::new(name, (*comment).to_string(), ResponseKind::Comment));
        }
    }

    deduplicate(comments)
}

fn is_meaningful_quote(text: &str) -> bool {
    let lower = text.to_lowercase();
    char_len(text) >= MIN_QUOTE_CHARS
        && contains_any(&lower, QUOTE_FEELING_TERMS)
        && !contains_any(&lower, QUOTE_EXCLUDED_TERMS)
}

/// Quoted passages, then first-person statements, that speak to feeling
/// rather than shopping.
#[must_use]
pub fn member_quotes(text: &str) -> Vec<String> {
    let quoted = QUOTED_TEXT
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|quote| is_meaningful_quote(quote))
        .map(|quote| format!("\"{quote}\""));
    let statements = FIRST_PERSON_STATEMENT
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|statement| is_meaningful_quote(statement))
        .map(str::to_string);

    let mut quotes: Vec<String> = Vec::new();
    for quote in quoted {
        push_unique(&mut quotes, quote);
    }
    for statement in statements {
        if !quotes.iter().any(|q| q.contains(&statement)) {
            quotes.push(statement);
        }
    }
    quotes.truncate(MAX_QUOTES);
    quotes
}

/// First two-word proper name in the opening paragraphs that is not a
/// masthead or a date. Captions and credits are skipped.
#[must_use]
pub fn story_subject(view: &ContentView) -> Option<String> {
    view.paragraphs
        .iter()
        .filter(|p| !contains_any(p, STORY_SKIP_TERMS))
        .take(SUBJECT_PARAGRAPHS)
        .flat_map(|p| PERSON_NAME.captures_iter(p))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .find(|name| !contains_any(&name.to_lowercase(), MASTHEAD_AND_MONTH_WORDS))
}

/// The featured member, their story and key quotes.
#[must_use]
pub fn member_story(view: &ContentView, quotes: &[String]) -> Option<MemberResponse> {
    let name = story_subject(view)?;
    let story: Vec<&str> = view
        .paragraphs
        .iter()
        .filter(|p| {
            char_len(p) >= MIN_STORY_PARAGRAPH_CHARS
                && !contains_any(p, STORY_SKIP_TERMS)
                && !is_navigation_text(p)
        })
        .take(STORY_PARAGRAPHS)
        .map(String::as_str)
        .collect();

    let mut parts = Vec::new();
    if !story.is_empty() {
        parts.push(story.join(" "));
    }
    if !quotes.is_empty() {
        let key: Vec<&str> = quotes.iter().take(KEY_QUOTES).map(String::as_str).collect();
        parts.push(format!("Key quotes: {}", key.join(" | ")));
    }
    if parts.is_empty() {
        return None;
    }

    Some(MemberResponse {
        name,
        response: parts.join(" "),
        kind: ResponseKind::Story,
        quotes: quotes.iter().take(STORY_QUOTES).cloned().collect(),
    })
}

/// `"Name: response"` lines, skipping responses that clean to nothing.
#[must_use]
pub fn member_comments(responses: &[MemberResponse]) -> Vec<String> {
    responses
        .iter()
        .filter_map(|r| {
            let clean = clean_member_response(&r.response);
            (!clean.is_empty()).then(|| format!("{}: {clean}", r.name))
        })
        .collect()
}

#[must_use]
pub fn member_fields(view: &ContentView) -> Metadata {
    let format = member_format(&view.full_text);
    let lines: Vec<&str> = view.full_text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let quotes = member_quotes(&view.full_text);

    let mut responses = match format {
        "poll" => member_responses(&lines),
        "comments" => comment_sections(&lines),
        "story" => member_story(view, &quotes).into_iter().collect(),
        _ => Vec::new(),
    };
    responses.truncate(MAX_RESPONSES);

    Metadata::new()
        .with("poll_questions", FieldValue::List(poll_questions(view)))
        .with("member_format", FieldValue::Text(format.to_string()))
        .with("member_comments", FieldValue::List(member_comments(&responses)))
        .with(
            "member_responses",
            FieldValue::Records(responses.iter().map(MemberResponse::record).collect()),
        )
        .with("member_quotes", FieldValue::List(quotes))
}
