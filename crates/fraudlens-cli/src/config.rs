//! CLI configuration

use crate::args::Args;
use fraudlens_sdk::{BucketScheme, PipelineConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Transaction CSV to score
    pub input: PathBuf,

    /// Optional pipeline YAML (seeds, forest, policies, rule thresholds)
    pub pipeline: Option<PathBuf>,

    /// Write the plain-text report here instead of stdout
    pub report_output: Option<PathBuf>,

    /// Write results and summary as JSON here
    pub json_output: Option<PathBuf>,

    /// Append the distribution summary to the report
    pub summary: bool,

    /// Overrides every pipeline seed when set
    pub seed: Option<u64>,

    pub parallel: bool,

    /// Use the 50/62/75 inference cut points instead of quartiles
    pub inference_buckets: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("transactions.csv"),
            pipeline: None,
            report_output: None,
            json_output: None,
            summary: true,
            seed: None,
            parallel: false,
            inference_buckets: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/fraudlens").required(false))
            .add_source(config::Environment::with_prefix("FRAUDLENS"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(_) => {
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Command-line arguments take precedence over file and environment
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(input) = &args.input {
            self.input = input.clone();
        }
        if let Some(pipeline) = &args.pipeline {
            self.pipeline = Some(pipeline.clone());
        }
        if let Some(path) = &args.report {
            self.report_output = Some(path.clone());
        }
        if let Some(path) = &args.json {
            self.json_output = Some(path.clone());
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.no_summary {
            self.summary = false;
        }
        self.parallel |= args.parallel;
        self.inference_buckets |= args.inference_buckets;
        self
    }

    /// Pipeline configuration: the YAML file if any, then CLI overrides
    pub fn pipeline_config(&self) -> anyhow::Result<PipelineConfig> {
        let mut config = match &self.pipeline {
            Some(path) => PipelineConfig::from_yaml_file(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.parallel {
            config = config.parallel_scoring(true);
        }
        if self.inference_buckets {
            config = config.with_bucket_scheme(BucketScheme::Inference);
        }
        Ok(config)
    }
}
