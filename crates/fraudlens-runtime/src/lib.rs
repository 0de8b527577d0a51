//! fraudlens Runtime - the scoring stages of the fraudlens pipeline
//!
//! - [`feature`]: fitted category encoders and the feature normalizer
//! - [`rules`]: threshold rules emitting fraud-type tags
//! - [`classifier`]: random forest training, evaluation and prediction
//! - [`bucket`]: probability to risk bucket mapping

pub mod bucket;
pub mod classifier;
pub mod error;
pub mod feature;
pub mod rules;

// Re-export main types
pub use bucket::{BucketScheme, CutPoints, RiskBucketizer};
pub use classifier::{
    ClassificationReport, ClassifierConfig, EvaluationReport, ForestParams, MaxFeatures,
    RandomForest, RiskClassifier, TrainedModel, TrainingOutcome,
};
pub use error::{Result, RuntimeError};
pub use feature::{CategoryEncoder, FeatureNormalizer, UnknownCategoryPolicy};
pub use rules::{FraudTagger, RuleThresholds};
