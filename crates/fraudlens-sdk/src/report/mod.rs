//! Report assembly over scored records
//!
//! - `summary`: distributions over a scored batch
//! - `render`: plain-text table and JSON export

mod render;
mod summary;

pub use render::{render_json, render_text, FRAUD_TYPE_LEGEND_TITLE};
pub use summary::{
    Distribution, FinancialImpact, ProbabilityCategory, ReportSummary, UserBehavior,
};
