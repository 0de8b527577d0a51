//! Risk buckets, labels and per-record prediction results

use super::tag::FraudTags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal risk category derived from a fraud probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    Low,
    Moderate,
    High,
    UltraHigh,
}

impl RiskBucket {
    pub const ALL: [RiskBucket; 4] = [
        RiskBucket::Low,
        RiskBucket::Moderate,
        RiskBucket::High,
        RiskBucket::UltraHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Low Risk",
            RiskBucket::Moderate => "Moderate Risk",
            RiskBucket::High => "High Risk",
            RiskBucket::UltraHigh => "Ultra High Risk",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Binary class: ground truth for training, or a model prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Legit,
    Fraud,
}

impl Label {
    /// Class index: 0 = legit, 1 = fraud
    pub fn class(&self) -> u8 {
        match self {
            Label::Legit => 0,
            Label::Fraud => 1,
        }
    }

    pub fn from_class(class: u8) -> Self {
        if class == 0 {
            Label::Legit
        } else {
            Label::Fraud
        }
    }

    pub fn is_fraud(&self) -> bool {
        matches!(self, Label::Fraud)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Legit => f.write_str("Legit"),
            Label::Fraud => f.write_str("Fraud"),
        }
    }
}

/// Scoring output for one input record, handed to the report assembler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Record identifier (`userid` or "N/A")
    pub record_id: String,

    /// Position of the record in the input batch
    pub row: usize,

    /// Fraud probability in [0, 1]
    pub probability: f64,

    pub predicted_label: Label,

    pub fraud_tags: FraudTags,

    pub risk_bucket: RiskBucket,
}

impl PredictionResult {
    /// Probability expressed as a percentage in [0, 100]
    pub fn probability_percent(&self) -> f64 {
        self.probability * 100.0
    }
}
