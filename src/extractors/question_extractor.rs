//! Question extraction from quiz export HTML
//!
//! Every element whose class contains `question_holder` becomes one
//! [`Question`], whatever it is missing. Fields are derived independently and
//! left unset when their markup is absent.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::tree::{self, ClassPattern};
use super::{extract_answers, Question};
use crate::config::{
    DROPDOWN_CLASS, QUESTION_HOLDER_CLASS, QUESTION_ID_CLASSES, QUESTION_NAME_CLASS,
    QUESTION_TEXT_CLASS, QUESTION_TYPE_CLASS,
};

/// Parse an HTML document and extract all of its questions in document order.
pub fn parse_quiz(html: &str) -> Vec<Question> {
    let document = Html::parse_document(html);
    extract_questions(&document)
}

/// Extract the questions of an already parsed document.
pub fn extract_questions(document: &Html) -> Vec<Question> {
    let questions: Vec<Question> = tree::find_all(
        document.root_element(),
        "div",
        ClassPattern::Containing(QUESTION_HOLDER_CLASS),
    )
    .into_iter()
    .map(extract_question)
    .collect();

    debug!(count = questions.len(), "Extracted questions");
    questions
}

/// Build a question record from one question container.
pub fn extract_question(holder: ElementRef<'_>) -> Question {
    let mut question = Question {
        question_number: span_text(holder, QUESTION_NAME_CLASS),
        question_id: QUESTION_ID_CLASSES
            .iter()
            .find_map(|class| span_text(holder, class)),
        question_type: span_text(holder, QUESTION_TYPE_CLASS),
        ..Question::default()
    };

    if let Some(prompt) = tree::find(holder, "div", ClassPattern::Named(QUESTION_TEXT_CLASS)) {
        question.question_text = Some(tree::text(prompt));
        question.dropdown_options = extract_dropdown_options(prompt);
    }

    question.answers = extract_answers(holder);
    question
}

/// Option labels of every inline dropdown in a prompt.
///
/// Options without a `value` are placeholders ("[ Select ]") and are skipped.
/// Labels are whitespace-normalized like every other text field, so padding
/// inside an `<option>` is not preserved verbatim.
/// Returns `None` when the prompt holds no dropdown at all.
pub fn extract_dropdown_options(prompt: ElementRef<'_>) -> Option<Vec<Vec<String>>> {
    let dropdowns = tree::find_all(prompt, "select", ClassPattern::Named(DROPDOWN_CLASS));
    if dropdowns.is_empty() {
        return None;
    }

    let groups: Vec<Vec<String>> = dropdowns
        .into_iter()
        .map(|select| {
            tree::find_all(select, "option", ClassPattern::Any)
                .into_iter()
                .filter(|option| tree::attribute(*option, "value").is_some_and(|v| !v.is_empty()))
                .map(tree::text)
                .collect::<Vec<String>>()
        })
        .collect();

    Some(groups)
}

fn span_text(holder: ElementRef<'_>, class: &str) -> Option<String> {
    tree::find(holder, "span", ClassPattern::Named(class)).map(tree::text)
}
