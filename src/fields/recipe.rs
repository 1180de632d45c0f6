//! Recipe fields: ingredients, instructions, times and servings.

use std::sync::LazyLock;

use regex::Regex;

use super::ContentView;
use crate::patterns::{
    COOKING_VERBS, COOK_TIME_INDICATORS, MEASUREMENT_UNIT, PREP_TIME_INDICATORS,
    RECIPE_SECTION_LABELS, SERVINGS_PATTERNS, TIME_AMOUNT,
};
use crate::result::{FieldValue, ListKind, Metadata};
use crate::structure::LabeledList;
use crate::text::{char_len, word_count};

const MIN_INSTRUCTION_PARAGRAPH_CHARS: usize = 30;
const MIN_INSTRUCTION_PARAGRAPH_WORDS: usize = 8;

fn time_regex(indicators: &[&str]) -> Regex {
    let alternation = indicators
        .iter()
        .map(|i| regex::escape(i))
        .collect::<Vec<_>>()
        .join("|");
    #[allow(clippy::expect_used)]
    Regex::new(&format!("(?i)(?:{alternation}){TIME_AMOUNT}")).expect("time regex")
}

static PREP_TIME: LazyLock<Regex> = LazyLock::new(|| time_regex(PREP_TIME_INDICATORS));
static COOK_TIME: LazyLock<Regex> = LazyLock::new(|| time_regex(COOK_TIME_INDICATORS));

fn has_measurement(list: &LabeledList) -> bool {
    list.list.items.iter().any(|item| MEASUREMENT_UNIT.is_match(item))
}

/// Sub-recipe label named by `label`, uppercased, if any.
fn section_label(label: &str) -> Option<&'static str> {
    let upper = label.to_uppercase();
    RECIPE_SECTION_LABELS
        .iter()
        .find(|name| upper.contains(*name))
        .copied()
}

/// True if `word` is `verb` or a regular inflection of it: `-s`, `-es`,
/// `-d`, `-ed`, `-ing`, with a dropped final `e` (`baking`) or a doubled
/// final consonant (`stirred`, `chopping`).
fn is_verb_form(word: &str, verb: &str) -> bool {
    if let Some(rest) = word.strip_prefix(verb) {
        if matches!(rest, "" | "s" | "es" | "d" | "ed" | "ing") {
            return true;
        }
        return verb
            .chars()
            .last()
            .and_then(|last| rest.strip_prefix(last))
            .is_some_and(|suffix| matches!(suffix, "ed" | "ing"));
    }
    verb.strip_suffix('e')
        .and_then(|stem| word.strip_prefix(stem))
        .is_some_and(|rest| rest == "ing")
}

/// True if some word of `text` is a cooking verb or one of its inflections.
#[must_use]
pub fn has_cooking_verb(text: &str) -> bool {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .any(|word| !word.is_empty() && COOKING_VERBS.iter().any(|verb| is_verb_form(word, verb)))
}

/// Ingredient lines and the indices of the lists they came from.
///
/// With two or more unit-bearing lists under sub-recipe labels, every such
/// list is kept and introduced by a `=== LABEL ===` marker. Otherwise the
/// first unit-bearing list wins.
#[must_use]
pub fn find_ingredients(lists: &[LabeledList]) -> (Vec<String>, Vec<usize>) {
    let labelled: Vec<(usize, &'static str)> = lists
        .iter()
        .enumerate()
        .filter(|(_, list)| has_measurement(list))
        .filter_map(|(idx, list)| section_label(&list.label).map(|name| (idx, name)))
        .collect();

    if labelled.len() >= 2 {
        let mut lines = Vec::new();
        for &(idx, name) in &labelled {
            lines.push(format!("=== {name} ==="));
            lines.extend(lists[idx].list.items.iter().cloned());
        }
        return (lines, labelled.into_iter().map(|(idx, _)| idx).collect());
    }

    lists
        .iter()
        .position(has_measurement)
        .map(|idx| (lists[idx].list.items.clone(), vec![idx]))
        .unwrap_or_default()
}

/// Instruction steps, skipping the lists already used for ingredients.
#[must_use]
pub fn find_instructions(view: &ContentView, used: &[usize]) -> Vec<String> {
    let others = || {
        view.lists
            .iter()
            .enumerate()
            .filter(move |(idx, _)| !used.contains(idx))
            .map(|(_, list)| &list.list)
    };

    if let Some(list) = others().find(|list| list.kind == ListKind::Ordered) {
        return list.items.clone();
    }

    let verb_heavy = others().find(|list| {
        let verbs = list.items.iter().filter(|item| has_cooking_verb(item)).count();
        !list.items.is_empty() && verbs * 2 >= list.items.len()
    });
    if let Some(list) = verb_heavy {
        return list.items.clone();
    }

    view.paragraphs
        .iter()
        .filter(|p| {
            char_len(p) > MIN_INSTRUCTION_PARAGRAPH_CHARS
                && word_count(p) > MIN_INSTRUCTION_PARAGRAPH_WORDS
                && has_cooking_verb(p)
        })
        .cloned()
        .collect()
}

fn first_capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Preparation time such as `"15 minutes"`, or empty.
#[must_use]
pub fn prep_time(text: &str) -> String {
    first_capture(&PREP_TIME, text)
}

/// Cooking or baking time, or empty.
#[must_use]
pub fn cook_time(text: &str) -> String {
    first_capture(&COOK_TIME, text)
}

/// Serving count such as `"4"` or `"6-8"`, or empty.
#[must_use]
pub fn servings(text: &str) -> String {
    let lower = text.to_lowercase();
    SERVINGS_PATTERNS
        .iter()
        .map(|re| first_capture(re, &lower))
        .find(|found| !found.is_empty())
        .unwrap_or_default()
}

#[must_use]
pub fn recipe_fields(view: &ContentView) -> Metadata {
    let (ingredients, used) = find_ingredients(&view.lists);
    let instructions = find_instructions(view, &used);

    Metadata::new()
        .with("ingredients", FieldValue::List(ingredients))
        .with("instructions", FieldValue::List(instructions))
        .with("prep_time", FieldValue::Text(prep_time(&view.full_text)))
        .with("cook_time", FieldValue::Text(cook_time(&view.full_text)))
        .with("servings", FieldValue::Text(servings(&view.full_text)))
}
