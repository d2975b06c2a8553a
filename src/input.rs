// src/input.rs
use std::fs;
use std::path::Path;

use crate::question::QuestionContext;
use crate::utils::error::InputError;

/// What the input file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A bare rendered fragment.
    Html,
    /// A serialized question-display context, `{"question": {"html": "..."}}`.
    ContextJson,
}

/// Loads a question-display context from disk.
pub fn load_context<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<QuestionContext, InputError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    tracing::debug!("Read {} bytes from {}", raw.len(), path.display());
    parse_context(&raw, format)
}

pub fn parse_context(raw: &str, format: InputFormat) -> Result<QuestionContext, InputError> {
    match format {
        InputFormat::Html => Ok(QuestionContext::from_html(raw)),
        InputFormat::ContextJson => Ok(serde_json::from_str(raw)?),
    }
}
