// src/lib.rs
//! Extracts answer options from server-rendered multiple-response question
//! fragments so native templates can redisplay them with their own widgets.
//!
//! ```no_run
//! use multichoiceset_extractor::{extract, Collaborators, QuestionContext};
//!
//! let context = QuestionContext::from_html(r#"<div class="qtext">Pick two</div>"#);
//! let context = extract(context, Collaborators::mobile()).expect("question text present");
//! assert_eq!(context.question.unwrap().text, "Pick two");
//! ```
pub mod config;
pub mod extractors;
pub mod input;
pub mod question;
pub mod storage;
pub mod utils;

pub use extractors::{extract, Collaborators, OptionExtractor};
pub use question::{AnswerNumbering, AnswerOption, Correctness, Question, QuestionContext, QuestionView};
pub use utils::{AppError, ExtractionError};
