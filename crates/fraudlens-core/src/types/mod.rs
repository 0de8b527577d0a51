//! Type system for fraudlens
//!
//! This module contains the data model shared by every pipeline stage:
//! - Raw values and records
//! - Input schema
//! - Feature vectors
//! - Fraud tags, risk buckets and prediction results

pub mod feature;
pub mod record;
pub mod risk;
pub mod schema;
pub mod tag;
pub mod value;

pub use feature::{Feature, FeatureVector, FEATURE_COUNT};
pub use record::RawRecord;
pub use risk::{Label, PredictionResult, RiskBucket};
pub use schema::{Schema, LABEL_COLUMN, USERID_COLUMN};
pub use tag::{FraudTag, FraudTags, NO_MATCH_LABEL};
pub use value::Value;
