//! SDK error types

use std::path::PathBuf;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML configuration error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON export error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core type error (missing features, unknown category)
    #[error(transparent)]
    CoreError(#[from] fraudlens_core::CoreError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] fraudlens_runtime::RuntimeError),

    /// Label cell that is not 0/1
    #[error("Invalid label at row {row}: '{value}'")]
    InvalidLabel { row: usize, value: String },

    /// Label column absent and synthesis disabled
    #[error("Label column 'fraudulent' is missing")]
    MissingLabels,

    /// No records to train on
    #[error("Dataset contains no records")]
    EmptyDataset,
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
