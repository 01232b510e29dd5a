//! Quiz extraction modules
//!
//! `tree` wraps the parsed HTML with class-aware lookups, `question_extractor`
//! walks question containers, and `answer_extractor` normalizes the answers of
//! a single container.

mod answer_extractor;
mod question_extractor;
pub mod tree;

pub use answer_extractor::*;
pub use question_extractor::*;

use serde::{Deserialize, Serialize};

/// One parsed question container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Question {
    /// Display label such as "Question 3"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    /// Type label as found in the export, e.g. "matching_question"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    /// Option labels of each inline dropdown, in prompt order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown_options: Option<Vec<Vec<String>>>,
    /// Unique by `text`, in document order
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// One candidate answer within a question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_selected: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_wrong: bool,
    /// Set for matching questions only; equal to `text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_pair: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}
