//! Category encoder
//!
//! Maps the distinct values of a categorical column to integer codes. Codes
//! are assigned in sorted order of the category text, so refitting on the
//! same corpus always yields the same mapping.

use fraudlens_core::{Feature, RawRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Code used for categories unseen at fit time under `ReserveCode`
pub const UNKNOWN_CATEGORY_CODE: f64 = -1.0;

/// What to do with a category the encoder was not fitted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCategoryPolicy {
    /// Map to [`UNKNOWN_CATEGORY_CODE`] and report a diagnostic
    #[default]
    ReserveCode,
    /// Fail normalization with `CoreError::UnknownCategory`
    Reject,
}

/// Fitted encoder for one categorical feature
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEncoder {
    feature: Feature,
    codes: BTreeMap<String, usize>,
}

impl CategoryEncoder {
    /// Fit over every record; missing cells do not produce a category
    pub fn fit<'a>(feature: Feature, records: impl IntoIterator<Item = &'a RawRecord>) -> Self {
        let classes: BTreeSet<String> = records
            .into_iter()
            .filter_map(|record| record.get(feature.column()))
            .filter_map(|value| value.category_key())
            .collect();

        let codes = classes
            .into_iter()
            .enumerate()
            .map(|(code, class)| (class, code))
            .collect();

        Self { feature, codes }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    /// Code for a category, `None` when it was not seen during fitting
    pub fn code(&self, category: &str) -> Option<usize> {
        self.codes.get(category).copied()
    }

    /// Known categories in code order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.codes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(locations: &[&str]) -> Vec<RawRecord> {
        locations
            .iter()
            .enumerate()
            .map(|(row, loc)| RawRecord::new(row).with_field("location", *loc))
            .collect()
    }

    #[test]
    fn test_codes_follow_sorted_order() {
        let data = records(&["Mumbai", "Delhi", "Pune", "Delhi"]);
        let encoder = CategoryEncoder::fit(Feature::Location, &data);

        assert_eq!(encoder.len(), 3);
        assert_eq!(encoder.code("Delhi"), Some(0));
        assert_eq!(encoder.code("Mumbai"), Some(1));
        assert_eq!(encoder.code("Pune"), Some(2));
        assert_eq!(encoder.code("Chennai"), None);
        assert_eq!(encoder.classes().collect::<Vec<_>>(), vec!["Delhi", "Mumbai", "Pune"]);
    }

    #[test]
    fn test_fit_is_order_independent() {
        let a = CategoryEncoder::fit(Feature::Location, &records(&["b", "a", "c"]));
        let b = CategoryEncoder::fit(Feature::Location, &records(&["c", "b", "a"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_cells_are_ignored() {
        let data = vec![
            RawRecord::new(0).with_field("device", "mobile"),
            RawRecord::new(1),
        ];
        let encoder = CategoryEncoder::fit(Feature::Device, &data);
        assert_eq!(encoder.len(), 1);
        assert_eq!(encoder.feature(), Feature::Device);
    }
}
