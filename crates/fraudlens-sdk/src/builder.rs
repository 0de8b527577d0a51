//! Builder pattern for ScoringEngine

use crate::config::{MissingLabelPolicy, PipelineConfig};
use crate::error::Result;
use crate::scoring_engine::ScoringEngine;
use fraudlens_runtime::{BucketScheme, ForestParams, RuleThresholds, UnknownCategoryPolicy};
use std::path::PathBuf;

/// Builder for ScoringEngine
///
/// # Example
///
/// ```rust,ignore
/// use fraudlens_sdk::ScoringEngineBuilder;
///
/// // From a YAML pipeline file
/// let engine = ScoringEngineBuilder::new()
///     .with_config_file("config/pipeline.yaml")
///     .build()?;
///
/// // Manual configuration
/// let engine = ScoringEngineBuilder::new()
///     .with_seed(7)
///     .parallel_scoring(true)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringEngineBuilder {
    config: PipelineConfig,
    config_file: Option<PathBuf>,
    overrides: Vec<Override>,
}

/// A setting made through a builder method, applied over the base config
#[derive(Debug, Clone)]
enum Override {
    Seed(u64),
    Forest(ForestParams),
    BucketScheme(BucketScheme),
    Rules(RuleThresholds),
    UnknownCategory(UnknownCategoryPolicy),
    MissingLabels(MissingLabelPolicy),
    ParallelScoring(bool),
}

impl Override {
    fn apply(self, config: PipelineConfig) -> PipelineConfig {
        match self {
            Override::Seed(seed) => config.with_seed(seed),
            Override::Forest(forest) => config.with_forest(forest),
            Override::BucketScheme(scheme) => config.with_bucket_scheme(scheme),
            Override::Rules(rules) => config.with_rules(rules),
            Override::UnknownCategory(policy) => config.with_unknown_category(policy),
            Override::MissingLabels(policy) => config.with_missing_labels(policy),
            Override::ParallelScoring(enable) => config.parallel_scoring(enable),
        }
    }
}

impl ScoringEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration, dropping settings made so far
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self.overrides.clear();
        self
    }

    /// Load the configuration from a YAML file at build time.
    ///
    /// Every individual setting still applies on top of the file, even one
    /// equal to its default.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    // ========== Individual settings ==========

    pub fn with_seed(self, seed: u64) -> Self {
        self.set(Override::Seed(seed))
    }

    pub fn with_forest(self, forest: ForestParams) -> Self {
        self.set(Override::Forest(forest))
    }

    pub fn with_bucket_scheme(self, scheme: BucketScheme) -> Self {
        self.set(Override::BucketScheme(scheme))
    }

    pub fn with_rules(self, rules: RuleThresholds) -> Self {
        self.set(Override::Rules(rules))
    }

    pub fn with_unknown_category(self, policy: UnknownCategoryPolicy) -> Self {
        self.set(Override::UnknownCategory(policy))
    }

    pub fn with_missing_labels(self, policy: MissingLabelPolicy) -> Self {
        self.set(Override::MissingLabels(policy))
    }

    pub fn parallel_scoring(self, enable: bool) -> Self {
        self.set(Override::ParallelScoring(enable))
    }

    fn set(mut self, setting: Override) -> Self {
        self.overrides.push(setting);
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<ScoringEngine> {
        let base = match &self.config_file {
            Some(path) => PipelineConfig::from_yaml_file(path)?,
            None => self.config,
        };
        let config = self
            .overrides
            .into_iter()
            .fold(base, |config, setting| setting.apply(config));

        config.validate()?;
        Ok(ScoringEngine::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let engine = ScoringEngineBuilder::new().build().unwrap();
        assert_eq!(engine.config(), &PipelineConfig::default());
    }

    #[test]
    fn test_builder_setters() {
        let engine = ScoringEngineBuilder::new()
            .with_seed(3)
            .with_bucket_scheme(BucketScheme::Inference)
            .parallel_scoring(true)
            .build()
            .unwrap();

        assert_eq!(engine.config().seeds.forest, 3);
        assert_eq!(engine.config().bucket_scheme, BucketScheme::Inference);
        assert!(engine.config().parallel_scoring);
    }

    #[test]
    fn test_builder_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "test_fraction: 0.2\nbucket_scheme: inference").unwrap();

        let engine = ScoringEngineBuilder::new()
            .with_config_file(file.path())
            .parallel_scoring(true)
            .build()
            .unwrap();

        assert_eq!(engine.config().test_fraction, 0.2);
        assert_eq!(engine.config().bucket_scheme, BucketScheme::Inference);
        assert!(engine.config().parallel_scoring);
    }

    #[test]
    fn test_builder_default_valued_setters_beat_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "parallel_scoring: true\nbucket_scheme: inference").unwrap();

        let engine = ScoringEngineBuilder::new()
            .with_config_file(file.path())
            .parallel_scoring(false)
            .with_bucket_scheme(BucketScheme::Quartile)
            .build()
            .unwrap();

        assert!(!engine.config().parallel_scoring);
        assert_eq!(engine.config().bucket_scheme, BucketScheme::Quartile);
    }

    #[test]
    fn test_builder_later_setting_wins() {
        let engine = ScoringEngineBuilder::new()
            .with_seed(3)
            .parallel_scoring(true)
            .with_seed(42)
            .build()
            .unwrap();

        assert_eq!(engine.config().seeds.forest, 42);
        assert!(engine.config().parallel_scoring);
    }

    #[test]
    fn test_builder_with_config_drops_earlier_settings() {
        let engine = ScoringEngineBuilder::new()
            .parallel_scoring(true)
            .with_config(PipelineConfig::new().with_bucket_scheme(BucketScheme::Inference))
            .build()
            .unwrap();

        assert!(!engine.config().parallel_scoring);
        assert_eq!(engine.config().bucket_scheme, BucketScheme::Inference);
    }

    #[test]
    fn test_builder_rejects_invalid_forest() {
        let err = ScoringEngineBuilder::new()
            .with_forest(ForestParams {
                n_estimators: 0,
                ..ForestParams::default()
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }
}
