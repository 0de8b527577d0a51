//! fraudlens - fraud risk scoring from a transaction CSV

use anyhow::Result;
use clap::Parser;
use fraudlens_cli::{app, args::Args, config::CliConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    let args = Args::parse();

    // Load configuration
    let config = CliConfig::load()?.apply_args(&args);
    info!("Loaded configuration: {:?}", config);

    let report = app::run(&config)?;

    let evaluation = &report.output.evaluation;
    println!(
        "Model Accuracy: {:.2} (train {}, test {}, split seed {}, forest seed {})",
        evaluation.accuracy,
        evaluation.train_size,
        evaluation.test_size,
        evaluation.split_seed,
        evaluation.forest_seed
    );
    println!("{}", evaluation.report);

    if report.output.diagnostics.has_synthetic_labels() {
        println!("WARNING: labels were synthesized; the evaluation above is not meaningful");
    }

    if config.report_output.is_none() {
        println!("{}", report.text);
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "fraudlens_cli=info,fraudlens_sdk=info,fraudlens_runtime=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
