//! Answer extraction for a single question container
//!
//! Answers come in several layouts (plain labels, `answer_text` blocks,
//! matching pairs with an embedded selector). Each layout is one strategy in
//! a fixed-order derivation chain; the first strategy that finds its element wins.

use scraper::ElementRef;
use std::collections::HashSet;
use tracing::trace;

use super::tree::{self, ClassPattern};
use super::Answer;
use crate::config::{
    ANSWERS_CLASS, ANSWER_CLASS_FRAGMENT, ANSWER_FOR_FRAGMENT, ANSWER_LEAF_CLASS,
    ANSWER_TEXT_CLASS, ANSWER_WRAPPER_CLASSES, CORRECT_ANSWER_CLASS, MATCH_LEFT_CLASS,
    MATCH_PAIR_SEPARATOR, MATCH_RIGHT_CLASS, SELECTED_ANSWER_CLASS, WRONG_ANSWER_CLASS,
};

/// How an element matching the answer class pattern is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerRole {
    /// A gradable answer choice.
    Leaf,
    /// A grouping wrapper around leaf answers; skipped to avoid double counting.
    Wrapper,
    /// A sub-element of an answer (text block, match side, ...).
    Part,
}

/// Classify a candidate by its class list.
///
/// Leaves carry the bare `answer` token or an `answer_for_*` token. Wrapper
/// markers override both.
pub fn classify_answer(element: ElementRef<'_>) -> AnswerRole {
    if ANSWER_WRAPPER_CLASSES
        .iter()
        .any(|marker| tree::has_class(element, marker))
    {
        return AnswerRole::Wrapper;
    }

    let is_leaf = tree::has_class(element, ANSWER_LEAF_CLASS)
        || ClassPattern::Containing(ANSWER_FOR_FRAGMENT).matches(element);
    if is_leaf {
        AnswerRole::Leaf
    } else {
        AnswerRole::Part
    }
}

/// Text derived for one answer, tagged with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DerivedText {
    Plain(String),
    MatchPair(String),
}

type TextStrategy = fn(ElementRef<'_>) -> Option<DerivedText>;

/// Tried in order; the first strategy whose element exists decides the text,
/// even when that text is empty. Matching pairs take precedence.
const TEXT_DERIVATION_CHAIN: [TextStrategy; 3] =
    [match_pair_text, answer_text_block, label_text];

/// Extract the ordered, deduplicated answers of a question container.
///
/// Returns an empty list when the container has no answers block.
/// Duplicates are dropped by exact text; the first occurrence wins even when a
/// later copy carries flags the first one lacks.
pub fn extract_answers(question: ElementRef<'_>) -> Vec<Answer> {
    let Some(answers_block) = tree::find(question, "div", ClassPattern::Named(ANSWERS_CLASS))
    else {
        return Vec::new();
    };

    let mut answers = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for candidate in tree::find_all(
        answers_block,
        "div",
        ClassPattern::Containing(ANSWER_CLASS_FRAGMENT),
    ) {
        if classify_answer(candidate) != AnswerRole::Leaf {
            continue;
        }

        let Some(answer) = extract_answer(candidate) else {
            trace!("Discarding answer element without text");
            continue;
        };

        if !seen.insert(answer.text.clone()) {
            trace!(text = %answer.text, "Dropping duplicate answer");
            continue;
        }
        answers.push(answer);
    }

    answers
}

/// Build a single answer from a leaf element, or `None` if it has no text.
pub fn extract_answer(element: ElementRef<'_>) -> Option<Answer> {
    let derived = TEXT_DERIVATION_CHAIN
        .iter()
        .find_map(|strategy| strategy(element))?;

    let (text, match_pair) = match derived {
        DerivedText::Plain(text) => (text, None),
        DerivedText::MatchPair(pair) => (pair.clone(), Some(pair)),
    };
    if text.is_empty() {
        return None;
    }

    Some(Answer {
        text,
        is_correct: tree::has_class(element, CORRECT_ANSWER_CLASS),
        is_selected: tree::has_class(element, SELECTED_ANSWER_CLASS),
        is_wrong: tree::has_class(element, WRONG_ANSWER_CLASS),
        match_pair,
    })
}

fn match_pair_text(element: ElementRef<'_>) -> Option<DerivedText> {
    let left = tree::find(element, "div", ClassPattern::Named(MATCH_LEFT_CLASS))?;
    let right = tree::find(element, "div", ClassPattern::Named(MATCH_RIGHT_CLASS))?;

    let right_text = match tree::find(right, "select", ClassPattern::Any) {
        Some(select) => tree::selected_option(select)
            .map(tree::text)
            .unwrap_or_else(|| tree::text(select)),
        None => tree::text(right),
    };

    Some(DerivedText::MatchPair(format!(
        "{}{}{}",
        tree::text(left),
        MATCH_PAIR_SEPARATOR,
        right_text
    )))
}

fn answer_text_block(element: ElementRef<'_>) -> Option<DerivedText> {
    tree::find(element, "div", ClassPattern::Named(ANSWER_TEXT_CLASS))
        .map(|block| DerivedText::Plain(tree::text(block)))
}

fn label_text(element: ElementRef<'_>) -> Option<DerivedText> {
    tree::find(element, "label", ClassPattern::Any)
        .map(|label| DerivedText::Plain(tree::text(label)))
}
