//! Random forest risk classifier on smartcore
//!
//! - [`forest`]: seeded ensemble of smartcore random forest members
//! - [`split`]: seeded train/evaluation split
//! - [`metrics`]: classification report over smartcore metrics
//! - [`trainer`]: the `RiskClassifier` tying them together

pub mod forest;
pub mod metrics;
pub mod split;
pub mod trainer;

pub use forest::{ForestParams, MaxFeatures, RandomForest, FRAUD_THRESHOLD};
pub use metrics::{accuracy, AverageMetrics, ClassMetrics, ClassificationReport};
pub use split::{train_test_split, TrainTestSplit};
pub use trainer::{ClassifierConfig, EvaluationReport, RiskClassifier, TrainedModel, TrainingOutcome};
