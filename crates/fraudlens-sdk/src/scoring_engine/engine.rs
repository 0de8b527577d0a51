//! Core ScoringEngine implementation

use super::types::{PipelineOutput, ScoredBatch};
use crate::config::PipelineConfig;
use crate::dataset::{resolve_labels, Dataset};
use crate::error::{Result, SdkError};
use fraudlens_core::{Diagnostics, FeatureVector, PredictionResult, RawRecord};
use fraudlens_runtime::{
    EvaluationReport, FeatureNormalizer, FraudTagger, RiskBucketizer, RiskClassifier,
    TrainedModel,
};
use rayon::prelude::*;
use tracing::{debug, info};

/// Fits the normalizer and model on a dataset and scores records.
///
/// ```rust,ignore
/// let dataset = Dataset::from_csv_path("transactions.csv")?;
/// let output = ScoringEngine::new(PipelineConfig::default()).run(&dataset)?;
/// for result in &output.results {
///     println!("{} {:.2}% {}", result.record_id, result.probability_percent(), result.risk_bucket);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: PipelineConfig,
}

impl ScoringEngine {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fit encoders, resolve labels, train and evaluate the classifier
    pub fn fit(&self, dataset: &Dataset) -> Result<FittedPipeline> {
        self.fit_with_vectors(dataset).map(|(pipeline, _)| pipeline)
    }

    /// Fit on `dataset`, then score every record of it in input order
    pub fn run(&self, dataset: &Dataset) -> Result<PipelineOutput> {
        let (pipeline, vectors) = self.fit_with_vectors(dataset)?;
        let results = pipeline.score_vectors(&dataset.records, &vectors)?;

        info!(
            records = results.len(),
            diagnostics = pipeline.diagnostics.len(),
            "Scored dataset"
        );

        Ok(PipelineOutput {
            results,
            evaluation: pipeline.evaluation,
            diagnostics: pipeline.diagnostics,
        })
    }

    fn fit_with_vectors(&self, dataset: &Dataset) -> Result<(FittedPipeline, Vec<FeatureVector>)> {
        self.config.validate()?;
        dataset.schema.validate()?;
        if dataset.is_empty() {
            return Err(SdkError::EmptyDataset);
        }

        let mut diagnostics = Diagnostics::new();
        let labels = resolve_labels(
            dataset,
            self.config.missing_labels,
            self.config.seeds.labels,
            &mut diagnostics,
        )?;

        let normalizer = FeatureNormalizer::fit(&dataset.records, self.config.unknown_category);
        let vectors = normalizer.normalize_all(&dataset.records, &mut diagnostics)?;
        debug!(records = vectors.len(), "Normalized records");

        let classifier = RiskClassifier::new(self.config.classifier_config());
        let outcome = classifier.train(&vectors, &labels)?;

        let pipeline = FittedPipeline {
            normalizer,
            model: outcome.model,
            tagger: FraudTagger::new(self.config.rules.clone()),
            bucketizer: RiskBucketizer::from_scheme(self.config.bucket_scheme),
            evaluation: outcome.evaluation,
            diagnostics,
            parallel: self.config.parallel_scoring,
        };
        Ok((pipeline, vectors))
    }
}

/// Fitted normalizer, model, tagger and bucketizer.
///
/// Immutable after fitting; scoring only reads it, so one pipeline can serve
/// any number of batches.
#[derive(Debug, Clone)]
pub struct FittedPipeline {
    normalizer: FeatureNormalizer,
    model: TrainedModel,
    tagger: FraudTagger,
    bucketizer: RiskBucketizer,
    evaluation: EvaluationReport,
    diagnostics: Diagnostics,
    parallel: bool,
}

impl FittedPipeline {
    /// Score new records. Unknown categories follow the configured policy.
    pub fn score(&self, records: &[RawRecord]) -> Result<ScoredBatch> {
        let mut diagnostics = Diagnostics::new();
        let vectors = self.normalizer.normalize_all(records, &mut diagnostics)?;
        Ok(ScoredBatch {
            results: self.score_vectors(records, &vectors)?,
            diagnostics,
        })
    }

    /// Score a single record
    pub fn score_record(
        &self,
        record: &RawRecord,
        diagnostics: &mut Diagnostics,
    ) -> Result<PredictionResult> {
        let vector = self.normalizer.normalize(record, diagnostics)?;
        self.predict(record, &vector)
    }

    pub fn evaluation(&self) -> &EvaluationReport {
        &self.evaluation
    }

    /// Diagnostics raised while fitting
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn normalizer(&self) -> &FeatureNormalizer {
        &self.normalizer
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn tagger(&self) -> &FraudTagger {
        &self.tagger
    }

    pub fn bucketizer(&self) -> &RiskBucketizer {
        &self.bucketizer
    }

    fn score_vectors(
        &self,
        records: &[RawRecord],
        vectors: &[FeatureVector],
    ) -> Result<Vec<PredictionResult>> {
        if self.parallel {
            records
                .par_iter()
                .zip(vectors.par_iter())
                .map(|(record, vector)| self.predict(record, vector))
                .collect()
        } else {
            records
                .iter()
                .zip(vectors)
                .map(|(record, vector)| self.predict(record, vector))
                .collect()
        }
    }

    fn predict(&self, record: &RawRecord, vector: &FeatureVector) -> Result<PredictionResult> {
        let (probability, predicted_label) = self.model.score(vector)?;

        Ok(PredictionResult {
            record_id: record.record_id(),
            row: record.row,
            probability,
            predicted_label,
            fraud_tags: self.tagger.classify_fraud_type(vector),
            risk_bucket: self.bucketizer.bucketize(probability),
        })
    }
}
