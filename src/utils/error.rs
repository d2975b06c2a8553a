// src/utils/error.rs
use thiserror::Error;

/// Failures that abort an extraction. Everything else (missing prompt,
/// missing answer list, malformed rows) degrades the result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("No question payload was supplied")]
    MissingQuestion,

    #[error("Question text region is missing or empty")]
    MissingQuestionText,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid question context JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Could not read input: {0}")]
    Input(#[from] InputError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_converts_to_app_error() {
        let err: AppError = ExtractionError::MissingQuestionText.into();
        assert!(matches!(err, AppError::Extraction(ExtractionError::MissingQuestionText)));
        assert_eq!(err.to_string(), "Extraction failed: Question text region is missing or empty");
    }
}
