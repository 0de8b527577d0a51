//! Rule-based fraud-type tagging

pub mod tagger;

pub use tagger::{FraudTagger, RuleThresholds};
