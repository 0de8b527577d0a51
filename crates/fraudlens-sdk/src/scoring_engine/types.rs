//! Pipeline output types

use fraudlens_core::{Diagnostics, PredictionResult};
use fraudlens_runtime::EvaluationReport;
use serde::{Deserialize, Serialize};

/// Everything a full run produces, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub results: Vec<PredictionResult>,
    pub evaluation: EvaluationReport,
    pub diagnostics: Diagnostics,
}

impl PipelineOutput {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Results of scoring records against an already fitted pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredBatch {
    pub results: Vec<PredictionResult>,
    pub diagnostics: Diagnostics,
}
