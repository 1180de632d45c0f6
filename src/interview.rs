//! Interview Q&A paragraphs.
//!
//! Lifestyle interviews print each question as a `<strong>` run inside a
//! paragraph, sometimes after a speaker label such as `CC` or
//! `Costco Connection`, with the first part of the answer in the same
//! paragraph. Splitting such a paragraph yields a level-3 heading for the
//! question and the answer text that follows it.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::patterns::{INTERVIEW_QUESTION_WORD, SPEAKER_LABEL};
use crate::result::Heading;
use crate::text::{char_len, normalize_whitespace};

const MIN_QUESTION_CHARS: usize = 10;
const LONG_QUESTION_CHARS: usize = 16;
const MIN_ANSWER_CHARS: usize = 11;
const QUESTION_HEADING_LEVEL: u8 = 3;

/// A question paragraph split into heading and answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewTurn {
    pub question: Heading,
    /// Answer text in the same paragraph, when long enough to keep.
    pub answer: Option<String>,
}

/// True for a bare speaker label, with or without a trailing colon.
#[must_use]
pub fn is_speaker_label(text: &str) -> bool {
    SPEAKER_LABEL.is_match(text.trim().trim_end_matches(':').trim_end())
}

/// True if `text` reads as an interviewer's question.
///
/// It must end with `?`, be at least 10 characters, and not be a speaker
/// label. Questions shorter than 16 characters also need a question word.
#[must_use]
pub fn is_interview_question(text: &str) -> bool {
    let text = text.trim();
    let length = char_len(text);
    if length < MIN_QUESTION_CHARS || !text.ends_with('?') || is_speaker_label(text) {
        return false;
    }
    length >= LONG_QUESTION_CHARS || INTERVIEW_QUESTION_WORD.is_match(text)
}

fn is_tag(node: &NodeRef, names: &[&str]) -> bool {
    node.node_name()
        .is_some_and(|name| names.iter().any(|n| name.eq_ignore_ascii_case(n)))
}

fn node_text(node: &NodeRef) -> String {
    normalize_whitespace(&node.text())
}

fn contains_node(outer: &NodeRef, inner: &NodeRef) -> bool {
    outer.id == inner.id || outer.descendants().iter().any(|d| d.id == inner.id)
}

/// First `<strong>`/`<b>` in the paragraph that is a question. Bold runs
/// wrapped in a `<span>` are speaker labels, not questions.
fn question_node<'a>(paragraph: &Selection<'a>) -> Option<NodeRef<'a>> {
    paragraph
        .select("strong, b")
        .nodes()
        .iter()
        .copied()
        .find(|node| {
            let in_span = node.parent().is_some_and(|parent| is_tag(&parent, &["span"]));
            !in_span && is_interview_question(&node_text(node))
        })
}

/// Split a `<p>` holding an interview question, or `None` when it holds
/// none.
#[must_use]
pub fn split_question_paragraph(paragraph: &Selection) -> Option<InterviewTurn> {
    let root = paragraph.nodes().first()?;
    let question = question_node(paragraph)?;
    let children = root.children();
    let position = children.iter().position(|child| contains_node(child, &question))?;

    let question_text = node_text(&question);
    let speaker = children[..position]
        .iter()
        .filter(|child| is_tag(child, &["span", "strong", "b"]))
        .map(node_text)
        .find(|text| is_speaker_label(text));
    let text = match speaker {
        Some(label) => format!("{}: {question_text}", label.trim_end_matches(':')),
        None => question_text,
    };

    let mut parts: Vec<String> = Vec::new();
    for child in &children[position + 1..] {
        if is_tag(child, &["br"]) {
            continue;
        }
        let part = node_text(child);
        if part.is_empty() {
            continue;
        }
        if child.is_element() && is_speaker_label(&part) {
            parts.push(format!("{}:", part.trim_end_matches(':')));
        } else {
            parts.push(part);
        }
    }
    let answer = normalize_whitespace(&parts.join(" "));

    Some(InterviewTurn {
        question: Heading {
            text,
            level: QUESTION_HEADING_LEVEL,
        },
        answer: (char_len(&answer) >= MIN_ANSWER_CHARS).then_some(answer),
    })
}

/// True if any paragraph under `main` carries an interview question.
#[must_use]
pub fn has_interview_questions(main: &Selection) -> bool {
    main.select("p")
        .iter()
        .any(|p| question_node(&p).is_some())
}
