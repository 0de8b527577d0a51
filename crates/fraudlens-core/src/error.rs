//! Error types for fraudlens Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// One or more required feature columns are absent from the input schema
    #[error("Missing required features: {}", .0.join(", "))]
    MissingFeatures(Vec<String>),

    /// A categorical value was not seen when the encoder was fitted
    #[error("Unknown category '{value}' for field '{field}'")]
    UnknownCategory { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
