//! Command-line interface for the quiz parser.

use std::path::PathBuf;

use clap::Parser;

use crate::batch::{collect_inputs, run_batch, OutputLayout};
use crate::error::{QuizError, Result};

/// Quiz Parser - Extract questions and answers from quiz export HTML.
#[derive(Parser)]
#[command(name = "quiz-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Quiz files or directories (directories contribute their .html/.txt files)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (default: results/ next to the first input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the CLI. Returns true when at least one document was processed.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    execute(&cli)
}

fn execute(cli: &Cli) -> Result<bool> {
    let inputs = collect_inputs(&cli.inputs)?;
    let root = match &cli.output {
        Some(dir) => dir.clone(),
        None => OutputLayout::default_root(inputs.first().ok_or(QuizError::NoInputs)?),
    };

    let layout = OutputLayout::new(&root);
    layout.create()?;

    println!("Processing {} files...", inputs.len());
    println!("Output directory: {}", root.display());

    let summary = run_batch(&inputs, &layout);

    for (path, err) in &summary.failed {
        println!("Error processing {}: {err}", path.display());
    }
    println!(
        "Done! {} files processed ({} questions), {} failed",
        summary.processed,
        summary.questions,
        summary.failed.len()
    );

    Ok(!summary.all_failed())
}
