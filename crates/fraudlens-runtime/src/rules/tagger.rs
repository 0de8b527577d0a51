//! Fraud-type tagger
//!
//! Applies fixed threshold rules to a record's numeric signals. Each rule is
//! evaluated independently, so a record may carry zero, one or several tags.
//!
//! | Tag | Rule                                                   |
//! |-----|--------------------------------------------------------|
//! | TF  | amount > 2000 AND multi_login_attempts > 1             |
//! | CF  | amount > 10000 OR multi_login_attempts > 2             |
//! | PF  | beneficiary_code > 0 AND amount > 5000                 |
//! | IF  | multi_login_attempts > 3 OR change_in_personal_info = 1 |

use fraudlens_core::{Feature, FeatureVector, FraudTag, FraudTags};
use serde::{Deserialize, Serialize};

/// Rule thresholds; every comparison is strict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    pub transaction_amount: f64,
    pub transaction_login_attempts: f64,
    pub card_amount: f64,
    pub card_login_attempts: f64,
    pub phishing_amount: f64,
    pub phishing_beneficiary_code: f64,
    pub identity_login_attempts: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            transaction_amount: 2000.0,
            transaction_login_attempts: 1.0,
            card_amount: 10000.0,
            card_login_attempts: 2.0,
            phishing_amount: 5000.0,
            phishing_beneficiary_code: 0.0,
            identity_login_attempts: 3.0,
        }
    }
}

/// Pure, total classifier from feature signals to fraud tags
#[derive(Debug, Clone, Default)]
pub struct FraudTagger {
    thresholds: RuleThresholds,
}

impl FraudTagger {
    pub fn new(thresholds: RuleThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }

    /// Tags matched by a normalized record.
    ///
    /// The PF rule reads the encoded beneficiary code, which is why the
    /// tagger takes the feature vector rather than the raw record.
    pub fn classify_fraud_type(&self, features: &FeatureVector) -> FraudTags {
        let t = &self.thresholds;
        let amount = features.get(Feature::Amount);
        let logins = features.get(Feature::MultiLoginAttempts);
        let beneficiary = features.get(Feature::Beneficiary);
        let info_changed = features.get(Feature::ChangeInPersonalInfo) == 1.0;

        let mut tags = FraudTags::new();
        if amount > t.transaction_amount && logins > t.transaction_login_attempts {
            tags.insert(FraudTag::Transaction);
        }
        if amount > t.card_amount || logins > t.card_login_attempts {
            tags.insert(FraudTag::CreditCard);
        }
        if beneficiary > t.phishing_beneficiary_code && amount > t.phishing_amount {
            tags.insert(FraudTag::Phishing);
        }
        if logins > t.identity_login_attempts || info_changed {
            tags.insert(FraudTag::IdentityTheft);
        }
        tags
    }
}
