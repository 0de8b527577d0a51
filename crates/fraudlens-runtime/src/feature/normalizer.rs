//! Feature normalizer
//!
//! Converts raw records into [`FeatureVector`]s. The category encoders are
//! fitted once over the full corpus and are read-only afterwards, so the same
//! normalizer can be shared by any number of scoring threads.

use super::encoder::{CategoryEncoder, UnknownCategoryPolicy, UNKNOWN_CATEGORY_CODE};
use super::parse;
use crate::error::Result;
use fraudlens_core::{CoreError, Diagnostic, Diagnostics, Feature, FeatureVector, RawRecord};
use std::collections::HashMap;
use tracing::debug;

/// Fitted record → feature vector transformation
#[derive(Debug, Clone)]
pub struct FeatureNormalizer {
    encoders: HashMap<Feature, CategoryEncoder>,
    policy: UnknownCategoryPolicy,
}

impl FeatureNormalizer {
    /// Fit one category encoder per categorical feature over `records`
    pub fn fit(records: &[RawRecord], policy: UnknownCategoryPolicy) -> Self {
        let encoders = Feature::CATEGORICAL
            .iter()
            .map(|&feature| (feature, CategoryEncoder::fit(feature, records)))
            .collect::<HashMap<_, _>>();

        for encoder in encoders.values() {
            debug!(
                feature = encoder.feature().column(),
                categories = encoder.len(),
                "Fitted category encoder"
            );
        }

        Self { encoders, policy }
    }

    pub fn policy(&self) -> UnknownCategoryPolicy {
        self.policy
    }

    pub fn encoder(&self, feature: Feature) -> Option<&CategoryEncoder> {
        self.encoders.get(&feature)
    }

    /// Normalize one record.
    ///
    /// Substituted defaults are recorded in `diagnostics`. The only failure is
    /// an unseen category under [`UnknownCategoryPolicy::Reject`].
    pub fn normalize(
        &self,
        record: &RawRecord,
        diagnostics: &mut Diagnostics,
    ) -> Result<FeatureVector> {
        let mut vector = FeatureVector::default();

        for feature in Feature::ALL {
            let value = match feature {
                Feature::Amount | Feature::MultiLoginAttempts => {
                    self.number(feature, record, diagnostics)
                }
                Feature::Time => self.hour(record, diagnostics),
                Feature::IpAddress => self.ip(record, diagnostics),
                Feature::ChangeInPersonalInfo => parse::flag(record.get(feature.column())),
                Feature::Location
                | Feature::Device
                | Feature::PaymentType
                | Feature::Beneficiary => self.category(feature, record, diagnostics)?,
            };
            vector.set(feature, value);
        }

        Ok(vector)
    }

    /// Normalize a batch, preserving input order
    pub fn normalize_all(
        &self,
        records: &[RawRecord],
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<FeatureVector>> {
        records
            .iter()
            .map(|record| self.normalize(record, diagnostics))
            .collect()
    }

    fn number(&self, feature: Feature, record: &RawRecord, diagnostics: &mut Diagnostics) -> f64 {
        let Some(value) = record.get(feature.column()) else {
            return 0.0;
        };

        match value.as_f64() {
            Some(n) => n,
            None => {
                diagnostics.push(Diagnostic::NonNumericValue {
                    row: record.row,
                    field: feature.column().to_string(),
                    value: value.to_string(),
                });
                0.0
            }
        }
    }

    fn hour(&self, record: &RawRecord, diagnostics: &mut Diagnostics) -> f64 {
        let Some(value) = record.get(Feature::Time.column()) else {
            return 0.0;
        };

        let text = value.to_string();
        match parse::hour_of_day(&text) {
            Some(hour) => hour as f64,
            None => {
                diagnostics.push(Diagnostic::UnparseableTimestamp {
                    row: record.row,
                    value: text,
                });
                0.0
            }
        }
    }

    fn ip(&self, record: &RawRecord, diagnostics: &mut Diagnostics) -> f64 {
        let Some(text) = record
            .get(Feature::IpAddress.column())
            .and_then(|v| v.category_key())
        else {
            return 0.0;
        };

        let checksum = parse::ip_checksum(&text);
        if !checksum.skipped.is_empty() {
            diagnostics.push(Diagnostic::SkippedIpOctets {
                row: record.row,
                value: text,
                skipped: checksum.skipped,
            });
        }
        checksum.value
    }

    fn category(
        &self,
        feature: Feature,
        record: &RawRecord,
        diagnostics: &mut Diagnostics,
    ) -> Result<f64> {
        let Some(key) = record.get(feature.column()).and_then(|v| v.category_key()) else {
            return Ok(0.0);
        };

        let known = self.encoders.get(&feature).and_then(|e| e.code(&key));
        match (known, self.policy) {
            (Some(code), _) => Ok(code as f64),
            (None, UnknownCategoryPolicy::ReserveCode) => {
                diagnostics.push(Diagnostic::UnknownCategory {
                    row: record.row,
                    field: feature.column().to_string(),
                    value: key,
                    code: UNKNOWN_CATEGORY_CODE,
                });
                Ok(UNKNOWN_CATEGORY_CODE)
            }
            (None, UnknownCategoryPolicy::Reject) => Err(CoreError::UnknownCategory {
                field: feature.column().to_string(),
                value: key,
            }
            .into()),
        }
    }
}
