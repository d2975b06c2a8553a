// src/question/view.rs
use serde::Serialize;

use crate::question::models::{AnswerOption, Question};
use crate::question::numbering::AnswerNumbering;

/// Template-ready projection of an extracted question.
#[derive(Debug, Serialize)]
pub struct QuestionView<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'a str>,
    pub options: Vec<NumberedOption<'a>>,
}

#[derive(Debug, Serialize)]
pub struct NumberedOption<'a> {
    /// Display prefix such as "b. "; empty when numbering is off.
    pub number: String,
    #[serde(flatten)]
    pub option: &'a AnswerOption,
}

impl<'a> QuestionView<'a> {
    pub fn new(question: &'a Question, numbering: AnswerNumbering) -> Self {
        Self {
            text: &question.text,
            prompt: question.prompt.as_deref(),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| NumberedOption {
                    number: numbering.number(index),
                    option,
                })
                .collect(),
        }
    }
}
