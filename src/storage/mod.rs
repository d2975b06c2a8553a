// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::question::{Correctness, Question, QuestionView};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// `<base>/<question_id>/`, created on demand.
    fn question_dir(&self, question_id: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(sanitize_id(question_id));
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Saves the template-ready view as pretty JSON.
    pub fn save_question(&self, question_id: &str, view: &QuestionView<'_>) -> Result<PathBuf, StorageError> {
        let file_path = self
            .question_dir(question_id)?
            .join(format!("{}_question.json", sanitize_id(question_id)));

        let json = serde_json::to_string_pretty(view)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved question view to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves summary metadata about an extracted question in JSON format
    pub fn save_question_metadata(&self, question_id: &str, question: &Question) -> Result<PathBuf, StorageError> {
        let file_path = self
            .question_dir(question_id)?
            .join(format!("{}_meta.json", sanitize_id(question_id)));

        let count = |wanted: Correctness| question.options.iter().filter(|o| o.iscorrect == wanted).count();

        let metadata = serde_json::json!({
            "question_id": question_id,
            "has_prompt": question.prompt.is_some(),
            "text_length": question.text.len(),
            "option_count": question.options.len(),
            "checked_count": question.options.iter().filter(|o| o.checked).count(),
            "correct_count": count(Correctness::Correct),
            "incorrect_count": count(Correctness::Incorrect),
            "graded": question.options.iter().any(|o| !o.iscorrect.is_undisclosed()),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

// Question ids like "q12:3" are not valid path components everywhere.
fn sanitize_id(question_id: &str) -> String {
    question_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
