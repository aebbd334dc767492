//! Error types for the ec-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives front ends one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported project file: {path}")]
    UnsupportedFile { path: PathBuf },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ec-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ec_project::ProjectError> for AppError {
    fn from(err: ec_project::ProjectError) -> Self {
        match err {
            ec_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<ec_project::ValidationError> for AppError {
    fn from(err: ec_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ec_results::ResultsError> for AppError {
    fn from(err: ec_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<ec_indicators::ParseError> for AppError {
    fn from(err: ec_indicators::ParseError) -> Self {
        AppError::Parse(err.to_string())
    }
}
