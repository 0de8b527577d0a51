//! Batch summary: the distributions a fraud analyst reviews first

use fraudlens_core::{PredictionResult, RawRecord, RiskBucket, NO_MATCH_LABEL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How urgently a probability needs review
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProbabilityCategory {
    LikelyLegit,
    NeedsReview,
    PotentiallyFraudulent,
    ImmediateAttention,
}

impl ProbabilityCategory {
    pub const ALL: [ProbabilityCategory; 4] = [
        ProbabilityCategory::LikelyLegit,
        ProbabilityCategory::NeedsReview,
        ProbabilityCategory::PotentiallyFraudulent,
        ProbabilityCategory::ImmediateAttention,
    ];

    pub fn from_probability(p: f64) -> Self {
        if !(p >= 0.25) {
            ProbabilityCategory::LikelyLegit
        } else if p < 0.50 {
            ProbabilityCategory::NeedsReview
        } else if p < 0.75 {
            ProbabilityCategory::PotentiallyFraudulent
        } else {
            ProbabilityCategory::ImmediateAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProbabilityCategory::LikelyLegit => "Likely Legit",
            ProbabilityCategory::NeedsReview => "Needs Review",
            ProbabilityCategory::PotentiallyFraudulent => "Potentially Fraudulent",
            ProbabilityCategory::ImmediateAttention => "Immediate Attention",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserBehavior {
    Normal,
    Suspicious,
    ConfirmedFraud,
}

impl UserBehavior {
    pub const ALL: [UserBehavior; 3] = [
        UserBehavior::Normal,
        UserBehavior::Suspicious,
        UserBehavior::ConfirmedFraud,
    ];

    pub fn from_probability(p: f64) -> Self {
        if !(p >= 0.25) {
            UserBehavior::Normal
        } else if p < 0.75 {
            UserBehavior::Suspicious
        } else {
            UserBehavior::ConfirmedFraud
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserBehavior::Normal => "Normal Behavior",
            UserBehavior::Suspicious => "Suspicious Behavior",
            UserBehavior::ConfirmedFraud => "Confirmed Fraud",
        }
    }
}

/// Transaction size band, in rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FinancialImpact {
    Small,
    Medium,
    HighValue,
}

impl FinancialImpact {
    pub const ALL: [FinancialImpact; 3] = [
        FinancialImpact::Small,
        FinancialImpact::Medium,
        FinancialImpact::HighValue,
    ];

    pub fn from_amount(amount: f64) -> Self {
        if amount <= 5000.0 {
            FinancialImpact::Small
        } else if amount <= 50000.0 {
            FinancialImpact::Medium
        } else {
            FinancialImpact::HighValue
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FinancialImpact::Small => "Small Transaction (<= Rs.5,000)",
            FinancialImpact::Medium => "Medium Transaction (Rs.5,001 - Rs.50,000)",
            FinancialImpact::HighValue => "High-Value Transaction (> Rs.50,000)",
        }
    }
}

/// Ordered (label, count) pairs; every category is listed, even at zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(Vec<(String, usize)>);

impl Distribution {
    fn from_labels<'a>(
        labels: impl IntoIterator<Item = &'a str>,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut counts: Vec<(String, usize)> =
            labels.into_iter().map(|l| (l.to_string(), 0)).collect();
        for value in values {
            if let Some(entry) = counts.iter_mut().find(|(label, _)| label.as_str() == value) {
                entry.1 += 1;
            }
        }
        Self(counts)
    }

    pub fn count(&self, label: &str) -> usize {
        self.0
            .iter()
            .find(|(l, _)| l.as_str() == label)
            .map_or(0, |(_, c)| *c)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, c)| c).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(l, c)| (l.as_str(), *c))
    }
}

/// Distributions over one scored batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub risk_levels: Distribution,
    pub outcomes: Distribution,
    /// Per-tag counts; a record with several tags counts once per tag
    pub fraud_types: Distribution,
    pub probability_categories: Distribution,
    pub user_behavior: Distribution,
    /// Present only when amounts are available
    pub financial_impact: Option<Distribution>,
    pub mean_probability: f64,
}

impl ReportSummary {
    /// Summarize results alone; financial impact is omitted
    pub fn from_results(results: &[PredictionResult]) -> Self {
        let total = results.len();
        let mean_probability = if total == 0 {
            0.0
        } else {
            results.iter().map(|r| r.probability).sum::<f64>() / total as f64
        };

        let tag_labels: Vec<&str> = results
            .iter()
            .flat_map(|r| {
                if r.fraud_tags.is_empty() {
                    vec![NO_MATCH_LABEL]
                } else {
                    r.fraud_tags.iter().map(|t| t.code()).collect()
                }
            })
            .collect();

        Self {
            total,
            risk_levels: Distribution::from_labels(
                RiskBucket::ALL.iter().map(|b| b.label()),
                results.iter().map(|r| r.risk_bucket.label()),
            ),
            outcomes: Distribution::from_labels(
                ["Legit", "Fraud"],
                results
                    .iter()
                    .map(|r| if r.predicted_label.is_fraud() { "Fraud" } else { "Legit" }),
            ),
            fraud_types: Distribution::from_labels(
                ["TF", "CF", "PF", "IF", NO_MATCH_LABEL],
                tag_labels,
            ),
            probability_categories: Distribution::from_labels(
                ProbabilityCategory::ALL.iter().map(|c| c.label()),
                results
                    .iter()
                    .map(|r| ProbabilityCategory::from_probability(r.probability).label()),
            ),
            user_behavior: Distribution::from_labels(
                UserBehavior::ALL.iter().map(|b| b.label()),
                results
                    .iter()
                    .map(|r| UserBehavior::from_probability(r.probability).label()),
            ),
            financial_impact: None,
            mean_probability,
        }
    }

    /// Summarize results together with the records they were scored from
    /// (matched by row index) so the amount bands can be filled in
    pub fn from_scored(results: &[PredictionResult], records: &[RawRecord]) -> Self {
        let mut summary = Self::from_results(results);
        let by_row: HashMap<usize, &RawRecord> = records.iter().map(|r| (r.row, r)).collect();
        let amounts = results.iter().map(|result| {
            by_row
                .get(&result.row)
                .map_or(0.0, |r| r.number_or_zero("amount"))
        });
        summary.financial_impact = Some(Distribution::from_labels(
            FinancialImpact::ALL.iter().map(|f| f.label()),
            amounts.map(|a| FinancialImpact::from_amount(a).label()),
        ));
        summary
    }
}
