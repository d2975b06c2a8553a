// src/question/mod.rs
pub mod models;
pub mod numbering;
pub mod view;

pub use models::{AnswerOption, Correctness, Question, QuestionContext};
pub use numbering::{AnswerNumbering, ParseNumberingError};
pub use view::{NumberedOption, QuestionView};
