//! Error types for the csv-insight library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Duplicate column '{0}' after normalizing header names")]
    DuplicateColumn(String),

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),

    #[error("Column '{0}' has no non-missing values")]
    EmptyColumn(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, InsightError>;
