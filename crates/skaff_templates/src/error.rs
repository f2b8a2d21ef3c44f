//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {language}/{kind}")]
    NotFound { language: String, kind: String },

    #[error("Template root does not exist: {0}")]
    RootMissing(PathBuf),

    #[error("Template copy failed: {0}")]
    CopyFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<fs_extra::error::Error> for TemplateError {
    fn from(err: fs_extra::error::Error) -> Self {
        TemplateError::CopyFailed(err.to_string())
    }
}
