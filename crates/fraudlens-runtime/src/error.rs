//! Runtime error types

use fraudlens_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Error raised by a core type (missing features, unknown category)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No samples to train on
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Feature and label sequences differ in length
    #[error("Length mismatch: {features} feature vectors but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    /// Not enough samples to form both a training and an evaluation split
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid classifier or bucketizer parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The underlying smartcore model failed to fit or predict
    #[error("Model error: {0}")]
    Model(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
