//! fraudlens SDK
//!
//! High-level API for loading transaction data and running the scoring
//! pipeline: normalize, train, score, tag, bucket and summarize.

pub mod builder;
pub mod config;
pub mod dataset;
pub mod error;
pub mod report;
pub mod scoring_engine;

// Re-export main types
pub use builder::ScoringEngineBuilder;
pub use config::{MissingLabelPolicy, PipelineConfig, SeedConfig};
pub use dataset::{resolve_labels, Dataset};
pub use error::{Result, SdkError};
pub use report::{render_json, render_text, ReportSummary};
pub use scoring_engine::{FittedPipeline, PipelineOutput, ScoredBatch, ScoringEngine};

// Re-export commonly used types from dependencies
pub use fraudlens_core::{
    Diagnostic, Diagnostics, FraudTag, FraudTags, Label, PredictionResult, RawRecord, RiskBucket,
    Value,
};
pub use fraudlens_runtime::{
    BucketScheme, ClassificationReport, EvaluationReport, ForestParams, RuleThresholds,
    UnknownCategoryPolicy,
};
