// src/main.rs
use std::path::PathBuf;

use clap::Parser;

use multichoiceset_extractor::config::RenderSettings;
use multichoiceset_extractor::input::{self, InputFormat};
use multichoiceset_extractor::storage::StorageManager;
use multichoiceset_extractor::utils::{self, html_debug, AppError};
use multichoiceset_extractor::{AnswerNumbering, Collaborators, OptionExtractor, QuestionView};

/// Command Line Interface for extracting multiple-response answer options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rendered question fragment (or JSON context with --json)
    #[arg(short, long)]
    input: PathBuf,

    /// Treat the input as a JSON question-display context
    #[arg(long)]
    json: bool,

    /// Identifier used for output file names
    #[arg(short, long, default_value = "question")]
    question_id: String,

    /// Output directory for extracted content
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Answer numbering style: abc, ABCD, 123, iii, IIII or none
    /// (falls back to the ANSWER_NUMBERING environment variable)
    #[arg(short = 'n', long)]
    answer_numbering: Option<AnswerNumbering>,

    /// Print the extracted view as JSON instead of saving it
    #[arg(long)]
    stdout: bool,

    /// Debug mode - save an annotated copy of the fragment
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging("info");

    // 2. Parse CLI Arguments and resolve settings
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);
    let settings = RenderSettings::from_env(args.answer_numbering)?;

    // 3. Load the question-display context
    let format = if args.json { InputFormat::ContextJson } else { InputFormat::Html };
    let context = input::load_context(&args.input, format)?;

    let extractor = OptionExtractor::new(Collaborators::mobile());

    // Annotate the rewritten markup so the highlighted classes match what the extractor reads
    if args.debug {
        if let Some(question) = &context.question {
            let debug_dir = args.output_dir.join("debug");
            std::fs::create_dir_all(&debug_dir)?;
            let debug_path = debug_dir.join(format!("{}_annotated.html", args.question_id));
            let markup = extractor.normalize_markup(&question.html);
            if let Err(e) = html_debug::create_debug_html(&markup, &debug_path, html_debug::FRAGMENT_DEBUG_PATTERNS) {
                tracing::warn!("Failed to create debug HTML: {}", e);
            }
        }
    }

    // 4. Extract
    let context = extractor.extract(context)?;
    let Some(question) = context.question.as_ref() else {
        return Err(AppError::Processing("Extraction returned no question".to_string()));
    };
    tracing::info!("Extracted {} answer options", question.options.len());

    let view = QuestionView::new(question, settings.answer_numbering);

    // 5. Emit
    if args.stdout {
        let json = serde_json::to_string_pretty(&view)
            .map_err(|e| AppError::Processing(format!("Could not serialize view: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    let storage = StorageManager::new(&args.output_dir)?;
    let path = storage.save_question(&args.question_id, &view)?;
    tracing::info!("Saved question view to: {}", path.display());
    let path = storage.save_question_metadata(&args.question_id, question)?;
    tracing::info!("Saved question metadata to: {}", path.display());

    Ok(())
}
