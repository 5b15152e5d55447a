use thiserror::Error;

/// Custom error types for redline
#[derive(Debug, Error)]
pub enum RedlineError {
    #[error("Target file not found: {0}")]
    TargetNotFound(String),

    #[error("Invalid proposal file: {0}")]
    InvalidProposals(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
