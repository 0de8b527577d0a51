//! Raw input records

use super::schema::USERID_COLUMN;
use super::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier shown for records without a `userid` column
pub const UNKNOWN_RECORD_ID: &str = "N/A";

/// A single row of input data: field name → value.
///
/// Records are produced by the dataset loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Zero-based position of the record in its source
    pub row: usize,

    /// Field values keyed by column name
    pub fields: HashMap<String, Value>,
}

impl RawRecord {
    /// Create an empty record at the given row
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: HashMap::new(),
        }
    }

    /// Add a field (builder style)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Look up a field, treating `Null` as absent
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    /// Numeric view of a field, `None` when missing or non-numeric
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Numeric view of a field with the default of 0 for missing values
    pub fn number_or_zero(&self, name: &str) -> f64 {
        self.number(name).unwrap_or(0.0)
    }

    /// Identifier used in reports: the `userid` column, or "N/A"
    pub fn record_id(&self) -> String {
        self.get(USERID_COLUMN)
            .map(|v| v.to_string())
            .unwrap_or_else(|| UNKNOWN_RECORD_ID.to_string())
    }
}
