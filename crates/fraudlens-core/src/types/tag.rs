//! Rule-based fraud-type tags
//!
//! Tags come from fixed threshold rules and form their own vocabulary. An
//! empty tag set renders as "Low Risk", which is unrelated to
//! [`RiskBucket::Low`](super::risk::RiskBucket::Low).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Rendering of a record no rule matched
pub const NO_MATCH_LABEL: &str = "Low Risk";

/// Fraud type emitted by the rule tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FraudTag {
    /// Transaction Fraud
    #[serde(rename = "TF")]
    Transaction,
    /// Credit Card Fraud
    #[serde(rename = "CF")]
    CreditCard,
    /// Phishing-Based Transactions Fraud
    #[serde(rename = "PF")]
    Phishing,
    /// Identity Theft
    #[serde(rename = "IF")]
    IdentityTheft,
}

impl FraudTag {
    pub const ALL: [FraudTag; 4] = [
        FraudTag::Transaction,
        FraudTag::CreditCard,
        FraudTag::Phishing,
        FraudTag::IdentityTheft,
    ];

    /// Two-letter abbreviation used in reports
    pub fn code(&self) -> &'static str {
        match self {
            FraudTag::Transaction => "TF",
            FraudTag::CreditCard => "CF",
            FraudTag::Phishing => "PF",
            FraudTag::IdentityTheft => "IF",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FraudTag::Transaction => "Transaction Fraud",
            FraudTag::CreditCard => "Credit Card Fraud",
            FraudTag::Phishing => "Phishing-Based Transactions Fraud",
            FraudTag::IdentityTheft => "Identity Theft",
        }
    }
}

impl fmt::Display for FraudTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Set of fraud tags matched by a record, ordered TF, CF, PF, IF
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FraudTags(BTreeSet<FraudTag>);

impl FraudTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: FraudTag) {
        self.0.insert(tag);
    }

    pub fn contains(&self, tag: FraudTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FraudTag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<FraudTag> for FraudTags {
    fn from_iter<I: IntoIterator<Item = FraudTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FraudTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(NO_MATCH_LABEL);
        }
        let codes: Vec<&str> = self.0.iter().map(FraudTag::code).collect();
        f.write_str(&codes.join(", "))
    }
}
