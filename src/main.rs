use anyhow::Context;
use clap::Parser;
use flight_delay_analyzer::cli::{run, Cli};
use flight_delay_analyzer::error::AnalysisError;
use flight_delay_analyzer::pipeline::PIPELINE_STAGES;
use flight_delay_analyzer::utils::{init_logging, ProgressReporter};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let progress = ProgressReporter::new(PIPELINE_STAGES, cli.no_progress);
    init_logging(cli.verbose, progress.bar());

    match run(&cli, &progress).context("Analysis failed") {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<AnalysisError>()
                .map(AnalysisError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
