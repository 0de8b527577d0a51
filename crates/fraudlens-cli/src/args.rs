//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// fraudlens arguments
#[derive(Debug, Clone, Parser)]
#[clap(name = "fraudlens")]
#[clap(about = "Score transactions for fraud risk and print a risk report")]
pub struct Args {
    /// Transaction CSV to score
    #[clap(long, short)]
    pub input: Option<PathBuf>,

    /// Pipeline YAML with seeds, forest parameters and rule thresholds
    #[clap(long, short)]
    pub pipeline: Option<PathBuf>,

    /// Write the text report to this file
    #[clap(long)]
    pub report: Option<PathBuf>,

    /// Write results and summary as JSON to this file
    #[clap(long)]
    pub json: Option<PathBuf>,

    /// Use one seed for split, forest and synthesized labels
    #[clap(long)]
    pub seed: Option<u64>,

    /// Score records on all cores
    #[clap(long)]
    pub parallel: bool,

    /// Bucket with the 50/62/75 percent cut points
    #[clap(long)]
    pub inference_buckets: bool,

    /// Omit the distribution summary
    #[clap(long)]
    pub no_summary: bool,
}
