//! Configuration types for the scoring pipeline

use crate::error::{Result, SdkError};
use fraudlens_runtime::{
    BucketScheme, ClassifierConfig, ForestParams, RuleThresholds, UnknownCategoryPolicy,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seeds for every random step of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Train/evaluation shuffle
    pub split: u64,

    /// Bootstrap sampling and split-feature selection
    pub forest: u64,

    /// Synthesized labels when the label column is missing
    pub labels: u64,
}

impl SeedConfig {
    /// Use the same seed everywhere
    pub fn uniform(seed: u64) -> Self {
        Self {
            split: seed,
            forest: seed,
            labels: seed,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::uniform(42)
    }
}

/// What to do when the dataset has no `fraudulent` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLabelPolicy {
    /// Draw uniform random labels and report a `SyntheticLabels` diagnostic
    #[default]
    Synthesize,
    /// Fail with `SdkError::MissingLabels`
    Reject,
}

/// Main pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub seeds: SeedConfig,

    /// Random forest hyperparameters
    pub forest: ForestParams,

    /// Fraction of records held out for evaluation
    pub test_fraction: f64,

    pub unknown_category: UnknownCategoryPolicy,

    pub missing_labels: MissingLabelPolicy,

    pub bucket_scheme: BucketScheme,

    /// Fraud-type rule thresholds
    pub rules: RuleThresholds,

    /// Score records on the rayon thread pool
    pub parallel_scoring: bool,
}

impl PipelineConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            seeds: SeedConfig::default(),
            forest: ForestParams::default(),
            test_fraction: 0.3,
            unknown_category: UnknownCategoryPolicy::default(),
            missing_labels: MissingLabelPolicy::default(),
            bucket_scheme: BucketScheme::default(),
            rules: RuleThresholds::default(),
            parallel_scoring: false,
        }
    }

    /// Parse from YAML; omitted keys keep their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SdkError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(SdkError::ConfigError(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        self.forest
            .validate()
            .map_err(|e| SdkError::ConfigError(e.to_string()))
    }

    /// Classifier settings derived from this configuration
    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            forest: self.forest.clone(),
            test_fraction: self.test_fraction,
            split_seed: self.seeds.split,
            forest_seed: self.seeds.forest,
        }
    }

    /// Set every seed at once
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = SeedConfig::uniform(seed);
        self
    }

    pub fn with_seeds(mut self, seeds: SeedConfig) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_forest(mut self, forest: ForestParams) -> Self {
        self.forest = forest;
        self
    }

    pub fn with_test_fraction(mut self, fraction: f64) -> Self {
        self.test_fraction = fraction;
        self
    }

    pub fn with_unknown_category(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.unknown_category = policy;
        self
    }

    pub fn with_missing_labels(mut self, policy: MissingLabelPolicy) -> Self {
        self.missing_labels = policy;
        self
    }

    pub fn with_bucket_scheme(mut self, scheme: BucketScheme) -> Self {
        self.bucket_scheme = scheme;
        self
    }

    pub fn with_rules(mut self, rules: RuleThresholds) -> Self {
        self.rules = rules;
        self
    }

    pub fn parallel_scoring(mut self, enable: bool) -> Self {
        self.parallel_scoring = enable;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
