//! Markup conventions and output layout constants.
//!
//! Quiz exports mark every semantic field with a class name. The names below
//! were collected from real exports; anything outside them is ignored.

/// Class fragment shared by every question container.
pub const QUESTION_HOLDER_CLASS: &str = "question_holder";

/// Full class attribute of the "Question N" label.
pub const QUESTION_NAME_CLASS: &str = "name question_name";

/// Identifier classes, tried in order.
pub const QUESTION_ID_CLASSES: [&str; 2] = ["id", "question_id"];

pub const QUESTION_TYPE_CLASS: &str = "question_type";
pub const QUESTION_TEXT_CLASS: &str = "question_text";

/// Inline selector embedded in fill-in-the-blank prompts.
pub const DROPDOWN_CLASS: &str = "question_input";

pub const ANSWERS_CLASS: &str = "answers";

/// Class fragment shared by answer candidates (and their sub-elements).
pub const ANSWER_CLASS_FRAGMENT: &str = "answer";

/// Exact class token of a leaf answer.
pub const ANSWER_LEAF_CLASS: &str = "answer";

/// Class fragment of a leaf answer keyed by its id (`answer_for_blank1`, ...).
pub const ANSWER_FOR_FRAGMENT: &str = "answer_for_";

/// Grouping wrappers that nest leaf answers and carry no text of their own.
pub const ANSWER_WRAPPER_CLASSES: [&str; 1] = ["answer_group"];

pub const CORRECT_ANSWER_CLASS: &str = "correct_answer";
pub const SELECTED_ANSWER_CLASS: &str = "selected_answer";
pub const WRONG_ANSWER_CLASS: &str = "wrong_answer";

pub const ANSWER_TEXT_CLASS: &str = "answer_text";
pub const MATCH_LEFT_CLASS: &str = "answer_match_left";
pub const MATCH_RIGHT_CLASS: &str = "answer_match_right";

/// Separator between the two sides of a matching pair.
pub const MATCH_PAIR_SEPARATOR: &str = " -> ";

/// Label used in the report when a question has no number.
pub const DEFAULT_QUESTION_LABEL: &str = "Question";

/// Width of the rule line closing each report block.
pub const REPORT_RULE_WIDTH: usize = 40;

/// Indentation used for the structured (JSON) output.
pub const JSON_INDENT: &[u8] = b"    ";

/// Directory created next to the inputs when no output root is given.
pub const RESULTS_DIR: &str = "results";
pub const JSON_DIR: &str = "json";
pub const REPORT_DIR: &str = "quiz_txt";
pub const REPORT_SUFFIX: &str = "_summary";

/// File extensions picked up when an input is a directory.
pub const INPUT_EXTENSIONS: [&str; 2] = ["html", "txt"];
