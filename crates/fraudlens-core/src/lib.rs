//! fraudlens Core - Core types and definitions for the fraudlens scoring pipeline
//!
//! This crate provides the fundamental types shared across the workspace:
//! - Value and record types for raw tabular input
//! - The fixed-order feature vector consumed by the classifier
//! - Fraud-type tags, risk buckets and per-record prediction results
//! - Diagnostics and error types

pub mod diagnostics;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::CoreError;
pub use types::{
    Feature, FeatureVector, FraudTag, FraudTags, Label, PredictionResult, RawRecord, RiskBucket,
    Schema, Value, FEATURE_COUNT, LABEL_COLUMN, NO_MATCH_LABEL, USERID_COLUMN,
};
