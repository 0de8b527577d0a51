//! Classification report for the held-out evaluation split
//!
//! Scores come from `smartcore::metrics`; this module only arranges them
//! per class and formats the table.

use fraudlens_core::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Precision, recall and F1 for one class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub label: Label,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Averaged precision, recall and F1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class breakdown plus accuracy, macro and support-weighted averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: AverageMetrics,
    pub weighted_avg: AverageMetrics,
}

/// smartcore yields NaN on a zero denominator; report those as 0
fn defined(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score
    }
}

/// One-vs-rest targets with `positive` as class 1.0
fn one_vs_rest(labels: &[Label], positive: Label) -> Vec<f64> {
    labels
        .iter()
        .map(|l| if *l == positive { 1.0 } else { 0.0 })
        .collect()
}

/// Fraction of predictions equal to the ground truth
pub fn accuracy(truth: &[Label], predicted: &[Label]) -> f64 {
    if truth.is_empty() || truth.len() != predicted.len() {
        return 0.0;
    }
    // smartcore's accuracy requires an `Ord` element type
    let y_true: Vec<i32> = one_vs_rest(truth, Label::Fraud).iter().map(|v| *v as i32).collect();
    let y_pred: Vec<i32> = one_vs_rest(predicted, Label::Fraud).iter().map(|v| *v as i32).collect();
    defined(smartcore::metrics::accuracy(&y_true, &y_pred))
}

impl ClassificationReport {
    /// Compute the report over the classes present in either sequence.
    /// Undefined precision or recall (zero denominator) counts as 0.
    pub fn compute(truth: &[Label], predicted: &[Label]) -> Self {
        let n = truth.len().min(predicted.len());
        let (truth, predicted) = (&truth[..n], &predicted[..n]);
        let labels: BTreeSet<Label> = truth.iter().chain(predicted).copied().collect();

        let classes: Vec<ClassMetrics> = labels
            .into_iter()
            .map(|label| {
                let y_true = one_vs_rest(truth, label);
                let y_pred = one_vs_rest(predicted, label);
                let (precision, recall, f1) = if n == 0 {
                    (0.0, 0.0, 0.0)
                } else {
                    (
                        defined(smartcore::metrics::precision(&y_true, &y_pred)),
                        defined(smartcore::metrics::recall(&y_true, &y_pred)),
                        defined(smartcore::metrics::f1(&y_true, &y_pred, 1.0)),
                    )
                };

                ClassMetrics {
                    label,
                    precision,
                    recall,
                    f1,
                    support: truth.iter().filter(|t| **t == label).count(),
                }
            })
            .collect();

        let k = classes.len().max(1) as f64;
        let macro_avg = AverageMetrics {
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / k,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / k,
            f1: classes.iter().map(|c| c.f1).sum::<f64>() / k,
            support: n,
        };

        let weight = |f: fn(&ClassMetrics) -> f64| {
            if n == 0 {
                0.0
            } else {
                classes.iter().map(|c| f(c) * c.support as f64).sum::<f64>() / n as f64
            }
        };
        let weighted_avg = AverageMetrics {
            precision: weight(|c| c.precision),
            recall: weight(|c| c.recall),
            f1: weight(|c| c.f1),
            support: n,
        };

        Self {
            accuracy: accuracy(truth, predicted),
            classes,
            macro_avg,
            weighted_avg,
        }
    }

    pub fn class(&self, label: Label) -> Option<&ClassMetrics> {
        self.classes.iter().find(|c| c.label == label)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for class in &self.classes {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                class.label.class(),
                class.precision,
                class.recall,
                class.f1,
                class.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (name, avg) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, avg.precision, avg.recall, avg.f1, avg.support
            )?;
        }
        Ok(())
    }
}
