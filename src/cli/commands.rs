use crate::cli::args::Cli;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::pipeline::{run_pipeline, AnalysisOutcome};
use crate::utils::progress::ProgressReporter;
use tracing::info;

pub fn run(cli: &Cli, progress: &ProgressReporter) -> Result<AnalysisOutcome> {
    info!("Starting flight analysis...");

    let config = AnalysisConfig::load(cli.config.as_deref())?;
    info!(
        flights = %config.flights_path.display(),
        weather = %config.weather_path.display(),
        results = %config.results_dir.display(),
        top_n = config.top_n,
        "Configuration loaded"
    );

    let outcome = run_pipeline(&config, progress)?;
    progress.finish_with_message("Analysis complete");

    Ok(outcome)
}
