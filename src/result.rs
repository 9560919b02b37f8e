use thiserror::Error;

/// Main error type for the seeding pipeline
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("statement {index} failed with exit status {status:?}")]
    StatementFailed { index: usize, status: Option<i32> },
    #[error("smoke query {index} failed with exit status {status:?}")]
    SmokeFailed { index: usize, status: Option<i32> },
    #[error("smoke query {index} returned a response with errors:\n{errors}")]
    SmokeErrors { index: usize, errors: String },
}

/// Type alias for Results using SeedError
pub type Result<T> = std::result::Result<T, SeedError>;
