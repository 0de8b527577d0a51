//! Fixed-order numeric feature vectors

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of features in every vector
pub const FEATURE_COUNT: usize = 9;

/// Classifier input features, in vector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Amount,
    Location,
    MultiLoginAttempts,
    Time,
    IpAddress,
    Device,
    ChangeInPersonalInfo,
    PaymentType,
    Beneficiary,
}

impl Feature {
    /// All features in vector order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Amount,
        Feature::Location,
        Feature::MultiLoginAttempts,
        Feature::Time,
        Feature::IpAddress,
        Feature::Device,
        Feature::ChangeInPersonalInfo,
        Feature::PaymentType,
        Feature::Beneficiary,
    ];

    /// Categorical features encoded through a fitted category encoder
    pub const CATEGORICAL: [Feature; 4] = [
        Feature::Location,
        Feature::Device,
        Feature::PaymentType,
        Feature::Beneficiary,
    ];

    /// Source column this feature is derived from
    pub fn column(&self) -> &'static str {
        match self {
            Feature::Amount => "amount",
            Feature::Location => "location",
            Feature::MultiLoginAttempts => "multi_login_attempts",
            Feature::Time => "time",
            Feature::IpAddress => "ip_address",
            Feature::Device => "device",
            Feature::ChangeInPersonalInfo => "change_in_personal_info",
            Feature::PaymentType => "payment_type",
            Feature::Beneficiary => "beneficiary",
        }
    }

    /// Position of this feature in a `FeatureVector`
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_categorical(&self) -> bool {
        Self::CATEGORICAL.contains(self)
    }
}

/// Numeric feature vector:
/// `[amount, location_code, multi_login_attempts, hour_of_day, ip_checksum,
///   device_code, personal_info_changed, payment_type_code, beneficiary_code]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        self.0[feature.index()] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self([0.0; FEATURE_COUNT])
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
