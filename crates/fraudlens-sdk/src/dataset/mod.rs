//! Transaction datasets
//!
//! - `loader`: CSV → [`Dataset`] with typed cells
//! - `labels`: ground-truth resolution, including synthesized labels

mod labels;
mod loader;

pub use labels::resolve_labels;
pub use loader::Dataset;
