//! One scoring run: load, fit, score, report

use crate::config::CliConfig;
use anyhow::{Context, Result};
use fraudlens_sdk::{
    render_json, render_text, Dataset, PipelineOutput, ReportSummary, ScoringEngineBuilder,
};
use tracing::{info, warn};

/// Everything produced by a run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: PipelineOutput,
    pub summary: ReportSummary,
    /// Rendered text report
    pub text: String,
}

/// Run the pipeline described by `config` and write any requested files
pub fn run(config: &CliConfig) -> Result<RunReport> {
    let dataset = Dataset::from_csv_path(&config.input)?;
    info!(
        input = %config.input.display(),
        records = dataset.len(),
        "Loaded transactions"
    );

    let engine = ScoringEngineBuilder::new()
        .with_config(config.pipeline_config()?)
        .build()?;
    let output = engine.run(&dataset)?;

    for diagnostic in output.diagnostics.iter() {
        warn!("{}", diagnostic);
    }

    let summary = ReportSummary::from_scored(&output.results, &dataset.records);
    let shown = if config.summary { Some(&summary) } else { None };
    let text = render_text(&output.results, shown);

    if let Some(path) = &config.report_output {
        std::fs::write(path, &text)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "Wrote text report");
    }

    if let Some(path) = &config.json_output {
        let json = render_json(&output.results, shown)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
        info!(path = %path.display(), "Wrote JSON report");
    }

    Ok(RunReport {
        output,
        summary,
        text,
    })
}
