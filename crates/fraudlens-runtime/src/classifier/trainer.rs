//! Risk classifier: split, train, evaluate

use super::forest::{ForestParams, RandomForest};
use super::metrics::ClassificationReport;
use super::split::train_test_split;
use crate::error::{Result, RuntimeError};
use fraudlens_core::{FeatureVector, Label};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub forest: ForestParams,

    /// Fraction of records held out for evaluation
    pub test_fraction: f64,

    /// Seed for the train/evaluation shuffle
    pub split_seed: u64,

    /// Seed for bootstrap sampling and feature selection
    pub forest_seed: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            forest: ForestParams::default(),
            test_fraction: 0.3,
            split_seed: 42,
            forest_seed: 42,
        }
    }
}

/// Trained fraud model, read-only once built
#[derive(Debug, Clone)]
pub struct TrainedModel {
    forest: RandomForest,
    trained_on: usize,
}

impl TrainedModel {
    /// Fraud probability in [0, 1]
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        self.forest.predict_proba(features)
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<Label> {
        self.forest.predict(features)
    }

    /// Probability and the label it maps to, from a single forest pass
    pub fn score(&self, features: &FeatureVector) -> Result<(f64, Label)> {
        let probability = self.forest.predict_proba(features)?;
        Ok((probability, RandomForest::label_for(probability)))
    }

    /// Number of records the forest was fitted on
    pub fn trained_on(&self) -> usize {
        self.trained_on
    }

    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }
}

/// Held-out evaluation, reported with the seeds that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub report: ClassificationReport,
    pub split_seed: u64,
    pub forest_seed: u64,
    pub train_size: usize,
    pub test_size: usize,
}

/// Result of a training run
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model: TrainedModel,
    pub evaluation: EvaluationReport,
}

/// Trains a random forest on a seeded split and evaluates it on the rest
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    config: ClassifierConfig,
}

impl RiskClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn train(&self, features: &[FeatureVector], labels: &[Label]) -> Result<TrainingOutcome> {
        if features.is_empty() {
            return Err(RuntimeError::EmptyTrainingSet);
        }
        if features.len() != labels.len() {
            return Err(RuntimeError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        self.config.forest.validate()?;

        let split = train_test_split(features, labels, self.config.test_fraction, self.config.split_seed)?;
        debug!(
            train = split.train_size(),
            test = split.test_size(),
            seed = self.config.split_seed,
            "Split records for training"
        );

        let forest = RandomForest::fit_matrix(
            &split.x_train,
            &split.y_train,
            &self.config.forest,
            self.config.forest_seed,
        )?;

        let truth: Vec<Label> = split
            .y_test
            .iter()
            .map(|&c| if c == 1 { Label::Fraud } else { Label::Legit })
            .collect();
        let predicted: Vec<Label> = forest
            .vote_fractions(&split.x_test, split.test_size())?
            .into_iter()
            .map(RandomForest::label_for)
            .collect();
        let report = ClassificationReport::compute(&truth, &predicted);

        let evaluation = EvaluationReport {
            accuracy: report.accuracy,
            report,
            split_seed: self.config.split_seed,
            forest_seed: self.config.forest_seed,
            train_size: split.train_size(),
            test_size: split.test_size(),
        };

        info!(
            accuracy = evaluation.accuracy,
            train_size = evaluation.train_size,
            test_size = evaluation.test_size,
            split_seed = evaluation.split_seed,
            forest_seed = evaluation.forest_seed,
            trees = forest.n_trees(),
            "Trained risk classifier"
        );

        Ok(TrainingOutcome {
            model: TrainedModel {
                forest,
                trained_on: split.train_size(),
            },
            evaluation,
        })
    }
}
