use thiserror::Error;

use crate::content::ContentError;
use crate::steps::ValidationFailure;

/// Error type that captures common wizard failures.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
