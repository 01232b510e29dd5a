//! Error types for the quiz parser.
//!
//! Extraction itself never fails: missing markup degrades to absent fields.
//! `QuizError` covers what happens around it (decoding input, serializing
//! records, touching the filesystem).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// Input bytes are not UTF-8 text, so no tree can be built.
    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(String),

    /// JSON serialization or parsing failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the given inputs resolved to a quiz document.
    #[error("No files found to process")]
    NoInputs,
}

impl QuizError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QuizError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for quiz parser operations.
pub type Result<T> = std::result::Result<T, QuizError>;
