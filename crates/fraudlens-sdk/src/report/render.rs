//! Plain-text and JSON rendering of scored records

use super::summary::{Distribution, ReportSummary};
use crate::error::Result;
use fraudlens_core::{FraudTag, PredictionResult};
use serde::Serialize;
use std::fmt::Write;

pub const FRAUD_TYPE_LEGEND_TITLE: &str = "Fraud Type short forms we have used :";

const REPORT_TITLE: &str = "Fraud Risk Evaluation Report";
const COLUMNS: [&str; 5] = ["User ID", "Probability", "Prediction", "Fraud Type", "Risk Level"];
const WIDTHS: [usize; 5] = [12, 12, 10, 16, 15];

/// Title, fraud-type legend, one table row per result and, when given, the
/// summary distributions
pub fn render_text(results: &[PredictionResult], summary: Option<&ReportSummary>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", REPORT_TITLE);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", FRAUD_TYPE_LEGEND_TITLE);
    // legend order as printed on the report
    for tag in [
        FraudTag::CreditCard,
        FraudTag::Phishing,
        FraudTag::IdentityTheft,
        FraudTag::Transaction,
    ] {
        let _ = writeln!(out, "- {}: {}", tag.code(), tag.description());
    }
    let _ = writeln!(out);

    let header = row(&COLUMNS.map(str::to_string));
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(header.len()));
    for result in results {
        let cells = [
            result.record_id.clone(),
            format!("{:.2}%", result.probability_percent()),
            result.predicted_label.to_string(),
            result.fraud_tags.to_string(),
            result.risk_bucket.label().to_string(),
        ];
        let _ = writeln!(out, "{}", row(&cells));
    }

    if let Some(summary) = summary {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Summary ({} records, mean probability {:.2}%)",
            summary.total,
            summary.mean_probability * 100.0
        );
        section(&mut out, "Risk Level Distribution", &summary.risk_levels);
        section(&mut out, "Fraud Outcome", &summary.outcomes);
        section(&mut out, "Fraud Type Breakdown", &summary.fraud_types);
        section(&mut out, "Fraud Probability Category", &summary.probability_categories);
        section(&mut out, "User Behavior", &summary.user_behavior);
        if let Some(impact) = &summary.financial_impact {
            section(&mut out, "Financial Impact", impact);
        }
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [PredictionResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a ReportSummary>,
}

/// Pretty-printed JSON with every result and the optional summary
pub fn render_json(results: &[PredictionResult], summary: Option<&ReportSummary>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport { results, summary })?)
}

fn row(cells: &[String; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(WIDTHS)
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
        .collect();
    format!("|{}|", padded.join("|"))
}

fn section(out: &mut String, title: &str, distribution: &Distribution) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", title);
    for (label, count) in distribution.iter() {
        let _ = writeln!(out, "  {:<45} {}", label, count);
    }
}
