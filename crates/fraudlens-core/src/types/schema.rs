//! Input schema for transaction data
//!
//! The schema is the set of column names a dataset carries. Every feature the
//! classifier consumes must be present before any fitting starts.

use super::feature::Feature;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Optional column holding the record identifier
pub const USERID_COLUMN: &str = "userid";

/// Optional column holding the ground-truth label
pub const LABEL_COLUMN: &str = "fraudulent";

/// Column set of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Column names in source order
    pub columns: Vec<String>,
}

impl Schema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Required feature columns absent from this schema, in feature order
    pub fn missing_features(&self) -> Vec<String> {
        Feature::ALL
            .iter()
            .map(|f| f.column())
            .filter(|column| !self.has_column(column))
            .map(str::to_string)
            .collect()
    }

    /// Fail with `MissingFeatures` naming every absent feature column
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_features();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingFeatures(missing))
        }
    }

    pub fn has_labels(&self) -> bool {
        self.has_column(LABEL_COLUMN)
    }
}
