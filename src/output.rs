//! Structured (JSON) and report (plain text) renderings of extracted questions.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::{DEFAULT_QUESTION_LABEL, JSON_INDENT, REPORT_RULE_WIDTH};
use crate::error::{QuizError, Result};
use crate::extractors::{Answer, Question};

/// Serialize questions as a pretty-printed JSON array.
///
/// Unset optional fields and false flags are omitted.
pub fn to_json(questions: &[Question]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    questions.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|_| QuizError::InvalidUtf8("serialized JSON".to_string()))
}

/// Parse the output of [`to_json`] back into question records.
pub fn from_json(json: &str) -> Result<Vec<Question>> {
    Ok(serde_json::from_str(json)?)
}

/// Render the human-readable report.
///
/// ```text
/// Question 1: What is the capital of France?
/// Type: multiple_choice_question
/// Answers:
///   [x] (Correct) Paris
///   [ ] London
///
/// ----------------------------------------
///
/// ```
pub fn render_report(questions: &[Question]) -> String {
    let mut out = String::new();
    for question in questions {
        write_question(&mut out, question);
    }
    out
}

fn write_question(out: &mut String, question: &Question) {
    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "{}: {}",
        question
            .question_number
            .as_deref()
            .unwrap_or(DEFAULT_QUESTION_LABEL),
        question.question_text.as_deref().unwrap_or_default()
    );

    if let Some(question_type) = question.question_type.as_deref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "Type: {question_type}");
    }

    if let Some(groups) = question.dropdown_options.as_ref().filter(|g| !g.is_empty()) {
        out.push_str("Dropdown Options:\n");
        for group in groups {
            let _ = writeln!(out, "  - {}", group.join(", "));
        }
    }

    out.push_str("Answers:\n");
    for answer in &question.answers {
        let _ = writeln!(out, "{}{}", answer_marker(answer), answer.text);
    }

    let _ = write!(out, "\n{}\n\n", "-".repeat(REPORT_RULE_WIDTH));
}

/// Three-state prefix: correct wins over selected.
fn answer_marker(answer: &Answer) -> &'static str {
    if answer.is_correct {
        "  [x] (Correct) "
    } else if answer.is_selected {
        "  [x] (Selected) "
    } else {
        "  [ ] "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Question> {
        vec![
            Question {
                question_number: Some("Question 1".to_string()),
                question_id: Some("101".to_string()),
                question_type: Some("multiple_choice_question".to_string()),
                question_text: Some("What is the capital of France?".to_string()),
                dropdown_options: None,
                answers: vec![
                    Answer {
                        text: "Paris".to_string(),
                        is_correct: true,
                        is_selected: true,
                        ..Answer::default()
                    },
                    Answer {
                        text: "Lyon".to_string(),
                        is_selected: true,
                        is_wrong: true,
                        ..Answer::default()
                    },
                    Answer {
                        text: "London".to_string(),
                        ..Answer::default()
                    },
                ],
            },
            Question {
                question_text: Some("Roses are [red]".to_string()),
                dropdown_options: Some(vec![vec!["red".to_string(), "blue".to_string()]]),
                ..Question::default()
            },
        ]
    }

    #[test]
    fn test_report_format() {
        let report = render_report(&sample());
        let rule = "-".repeat(40);
        let expected = format!(
            "Question 1: What is the capital of France?\n\
             Type: multiple_choice_question\n\
             Answers:\n  \
             [x] (Correct) Paris\n  \
             [x] (Selected) Lyon\n  \
             [ ] London\n\
             \n{rule}\n\n\
             Question: Roses are [red]\n\
             Dropdown Options:\n  \
             - red, blue\n\
             Answers:\n\
             \n{rule}\n\n"
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_for_empty_question() {
        let report = render_report(&[Question::default()]);
        assert!(report.starts_with("Question: \nAnswers:\n\n"));
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn test_json_omits_unset_fields() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["answers"][0]["is_correct"], true);
        assert!(first.get("dropdown_options").is_none());
        assert!(first["answers"][2].get("is_correct").is_none());
        assert!(first["answers"][2].get("match_pair").is_none());

        let second = &value[1];
        assert!(second.get("question_number").is_none());
        assert_eq!(second["answers"], serde_json::json!([]));
        assert!(json.contains("\n    {"));
    }

    #[test]
    fn test_json_round_trip() {
        let questions = sample();
        let parsed = from_json(&to_json(&questions).unwrap()).unwrap();
        assert_eq!(parsed, questions);
    }

    #[test]
    fn test_empty_string_is_distinct_from_absent() {
        let questions = vec![Question {
            question_text: Some(String::new()),
            ..Question::default()
        }];
        let json = to_json(&questions).unwrap();
        assert!(json.contains("\"question_text\": \"\""));
        assert_eq!(from_json(&json).unwrap(), questions);
    }
}
