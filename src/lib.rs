//! Quiz export parser
//!
//! Extracts question/answer records from quiz export HTML and renders them as
//! JSON or a plain-text report:
//! - Question metadata (number, id, type, prompt, inline dropdowns)
//! - Answers with correct/selected/wrong markers, deduplicated by text
//! - Matching pairs composed as `left -> right`
//!
//! The extraction core is synchronous and keeps no state between documents.
//! [`ffi`] exposes it to C/C++, [`cli`] drives it over files.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractors;
pub mod ffi;
pub mod output;

pub use error::{QuizError, Result};
pub use extractors::{parse_quiz, Answer, Question};
pub use output::{from_json, render_report, to_json};
