//! Batch processing of quiz export files.
//!
//! Each document is read, parsed and written independently; a failing
//! document is logged and counted without stopping the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::{INPUT_EXTENSIONS, JSON_DIR, REPORT_DIR, REPORT_SUFFIX, RESULTS_DIR};
use crate::error::{QuizError, Result};
use crate::extractors::parse_quiz;
use crate::output::{render_report, to_json};

/// Where the JSON and report files of a batch are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub json_dir: PathBuf,
    pub report_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            json_dir: root.join(JSON_DIR),
            report_dir: root.join(REPORT_DIR),
        }
    }

    /// `results/` next to the first input file.
    pub fn default_root(first_input: &Path) -> PathBuf {
        first_input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(RESULTS_DIR)
    }

    pub fn create(&self) -> Result<()> {
        for dir in [&self.json_dir, &self.report_dir] {
            fs::create_dir_all(dir).map_err(|e| QuizError::io(dir, e))?;
        }
        Ok(())
    }

    /// `json/<stem>.json`
    pub fn json_path(&self, input: &Path) -> PathBuf {
        self.json_dir.join(format!("{}.json", file_stem(input)))
    }

    /// `quiz_txt/<stem>_summary.txt`
    pub fn report_path(&self, input: &Path) -> PathBuf {
        self.report_dir
            .join(format!("{}{REPORT_SUFFIX}.txt", file_stem(input)))
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub questions: usize,
    pub failed: Vec<(PathBuf, QuizError)>,
}

impl BatchSummary {
    pub fn all_failed(&self) -> bool {
        self.processed == 0 && !self.failed.is_empty()
    }
}

/// Resolve the given paths into the list of documents to process.
///
/// Files are taken as-is. Directories contribute their `.html` and `.txt`
/// files (not recursively), sorted by name. Missing paths are skipped.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|e| QuizError::io(path, e))?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_input_extension(p))
                .collect();
            found.sort();
            inputs.extend(found);
        } else if path.is_file() {
            inputs.push(path.clone());
        } else {
            warn!(path = %path.display(), "Skipping missing input");
        }
    }

    if inputs.is_empty() {
        return Err(QuizError::NoInputs);
    }
    Ok(inputs)
}

/// Parse one document and write both of its outputs. Returns the number of
/// questions found.
pub fn process_document(input: &Path, layout: &OutputLayout) -> Result<usize> {
    let bytes = fs::read(input).map_err(|e| QuizError::io(input, e))?;
    let html = String::from_utf8(bytes)
        .map_err(|_| QuizError::InvalidUtf8(input.display().to_string()))?;

    let questions = parse_quiz(&html);

    let json_path = layout.json_path(input);
    fs::write(&json_path, to_json(&questions)?).map_err(|e| QuizError::io(&json_path, e))?;

    let report_path = layout.report_path(input);
    fs::write(&report_path, render_report(&questions))
        .map_err(|e| QuizError::io(&report_path, e))?;

    Ok(questions.len())
}

/// Process every input, isolating failures per document.
pub fn run_batch(inputs: &[PathBuf], layout: &OutputLayout) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for input in inputs {
        info!(path = %input.display(), "Parsing");
        match process_document(input, layout) {
            Ok(count) => {
                summary.processed += 1;
                summary.questions += count;
            }
            Err(e) => {
                error!(path = %input.display(), error = %e, "Failed to process document");
                summary.failed.push((input.clone(), e));
            }
        }
    }

    summary
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| INPUT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
