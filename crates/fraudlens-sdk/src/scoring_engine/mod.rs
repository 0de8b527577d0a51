//! ScoringEngine - main API for fitting and running the scoring pipeline
//!
//! The module is organized into:
//! - `types`: output types (PipelineOutput, ScoredBatch)
//! - `engine`: ScoringEngine and the FittedPipeline it produces
//! - `tests`: unit tests (test-only)

mod engine;
mod types;

pub use engine::{FittedPipeline, ScoringEngine};
pub use types::{PipelineOutput, ScoredBatch};

#[cfg(test)]
mod tests;
