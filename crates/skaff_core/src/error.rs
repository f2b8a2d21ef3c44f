//! Error types for the core module.

use thiserror::Error;

use crate::executor::BuildLog;
use crate::state::BuildState;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Step not found: {0}")]
    StepNotFound(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: BuildState, to: BuildState },

    #[error("Template error: {0}")]
    Template(#[from] skaff_templates::TemplateError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] skaff_manifest::ManifestError),
}

/// A build that stopped on a fatal error.
///
/// Carries the partial build log so callers can report which steps were
/// already applied.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct BuildFailure {
    pub log: Box<BuildLog>,
    #[source]
    pub error: CoreError,
}

impl BuildFailure {
    pub fn new(log: BuildLog, error: CoreError) -> Self {
        Self {
            log: Box::new(log),
            error,
        }
    }
}
