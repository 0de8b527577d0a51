//! CSV dataset loader

use crate::error::{Result, SdkError};
use fraudlens_core::{RawRecord, Schema, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Header plus records read from one CSV source
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub schema: Schema,
    pub records: Vec<RawRecord>,
}

impl Dataset {
    /// Load a CSV file. A missing file is reported as [`SdkError::InputNotFound`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SdkError::InputNotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            records = dataset.len(),
            columns = dataset.schema.columns.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Read CSV from any source. Cells are typed with [`Value::infer`];
    /// short rows leave trailing columns absent.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut records = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let line = result?;
            let mut record = RawRecord::new(row);
            for (name, cell) in headers.iter().zip(line.iter()) {
                record.insert(name.clone(), Value::infer(cell));
            }
            records.push(record);
        }

        Ok(Self {
            schema: Schema::new(headers),
            records,
        })
    }

    /// Build from records already in memory; the schema is the union of their fields
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            let mut names: Vec<&String> = record.fields.keys().collect();
            names.sort();
            for name in names {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
        }
        Self {
            schema: Schema::new(columns),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
