//! Feature normalization module
//!
//! Turns raw records into fixed-order numeric feature vectors.

pub mod encoder;
pub mod normalizer;
pub mod parse;

// Re-export for convenience
pub use encoder::{CategoryEncoder, UnknownCategoryPolicy, UNKNOWN_CATEGORY_CODE};
pub use normalizer::FeatureNormalizer;
