//! Pipeline diagnostics
//!
//! Recoverable conditions (substituted defaults, synthesized labels) are
//! collected here and returned to the caller alongside the results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable condition observed while preparing or scoring data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The label column was absent and random labels were generated.
    /// A model trained on these labels carries no real signal.
    SyntheticLabels { count: usize, seed: u64 },

    /// A numeric field held a value that is not a number; 0 was used
    NonNumericValue {
        row: usize,
        field: String,
        value: String,
    },

    /// The `time` field could not be parsed; hour 0 was used
    UnparseableTimestamp { row: usize, value: String },

    /// Non-numeric octets were skipped when building the IP checksum
    SkippedIpOctets {
        row: usize,
        value: String,
        skipped: Vec<String>,
    },

    /// A category unseen during encoder fitting was mapped to the reserved code
    UnknownCategory {
        row: usize,
        field: String,
        value: String,
        code: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SyntheticLabels { count, seed } => write!(
                f,
                "label column missing: synthesized {} random labels (seed {})",
                count, seed
            ),
            Diagnostic::NonNumericValue { row, field, value } => write!(
                f,
                "row {}: non-numeric {} '{}', using 0",
                row, field, value
            ),
            Diagnostic::UnparseableTimestamp { row, value } => {
                write!(f, "row {}: unparseable time '{}', using hour 0", row, value)
            }
            Diagnostic::SkippedIpOctets {
                row,
                value,
                skipped,
            } => write!(
                f,
                "row {}: skipped non-numeric octets {:?} in ip '{}'",
                row, skipped, value
            ),
            Diagnostic::UnknownCategory {
                row,
                field,
                value,
                code,
            } => write!(
                f,
                "row {}: unknown {} '{}' mapped to reserved code {}",
                row, field, value, code
            ),
        }
    }
}

/// Ordered collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Whether any labels in this run were synthesized
    pub fn has_synthetic_labels(&self) -> bool {
        self.0
            .iter()
            .any(|d| matches!(d, Diagnostic::SyntheticLabels { .. }))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
