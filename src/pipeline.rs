use crate::analyzers::{DelayAnalyzer, GroupStats, WindAnalysis, WindAnalyzer};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::models::{FlightRecord, WeatherFlightRecord};
use crate::processors::Preprocessor;
use crate::readers::FlightReader;
use crate::utils::constants::{AIRLINE_DELAYS_PLOT, ROUTE_CANCELLATIONS_PLOT, WIND_IMPACT_PLOT};
use crate::utils::{OutputDirs, ProgressReporter};
use crate::writers::{PlotWriter, ReportWriter};
use tracing::{error, info};

/// Number of progress steps reported by [`run_pipeline`]
pub const PIPELINE_STAGES: u64 = 6;

/// Everything one run computed, returned for callers that want the numbers
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub routes: GroupStats,
    pub airlines: GroupStats,
    pub wind: WindAnalysis,
    pub report: String,
}

/// Load both datasets. A failure is logged here and passed on unchanged.
pub fn load_datasets(
    config: &AnalysisConfig,
) -> Result<(Vec<FlightRecord>, Vec<WeatherFlightRecord>)> {
    info!("Loading flight data...");
    let reader = FlightReader::new();

    let loaded = reader.read_flights(&config.flights_path).and_then(|flights| {
        let weather = reader.read_weather_flights(&config.weather_path)?;
        Ok((flights, weather))
    });

    match loaded {
        Ok((flights, weather)) => {
            info!("Loaded {} flight records", flights.len());
            info!("Loaded {} weather records", weather.len());
            Ok((flights, weather))
        }
        Err(e) => {
            error!("{}", load_failure_message(&e));
            Err(e)
        }
    }
}

fn load_failure_message(err: &AnalysisError) -> String {
    match err {
        AnalysisError::DataFileNotFound { .. } => err.to_string(),
        other => format!("Error loading data: {}", other),
    }
}

/// Run every stage in order: load, preprocess, aggregate, plot, report.
///
/// Output directories are created first. Outputs written before a failing
/// stage are left in place.
pub fn run_pipeline(config: &AnalysisConfig, progress: &ProgressReporter) -> Result<AnalysisOutcome> {
    let outputs = OutputDirs::prepare(config)?;

    progress.start_stage("Loading data");
    let (mut flights, weather) = load_datasets(config)?;
    progress.finish_stage();

    progress.start_stage("Preprocessing");
    Preprocessor::new().derive_routes(&mut flights);
    progress.finish_stage();

    progress.start_stage("Aggregating");
    let delay_analyzer = DelayAnalyzer::with_top_n(config.top_n);
    let routes = delay_analyzer.analyze_routes(&flights);
    let airlines = delay_analyzer.analyze_airlines(&flights);
    progress.finish_stage();

    progress.start_stage("Analyzing wind impact");
    let wind = WindAnalyzer::new().analyze(&weather);
    progress.print_block(&wind.console_dump());
    progress.finish_stage();

    progress.start_stage("Rendering plots");
    let plot_writer = PlotWriter::new(config.plot.clone());
    plot_writer.write_route_cancellations(
        &routes.top_by_cancellations,
        &outputs.plot_path(ROUTE_CANCELLATIONS_PLOT),
    )?;
    plot_writer.write_airline_delays(
        &airlines.top_by_delay,
        &outputs.plot_path(AIRLINE_DELAYS_PLOT),
    )?;
    plot_writer.write_wind_impact(&wind, &outputs.plot_path(WIND_IMPACT_PLOT))?;
    progress.finish_stage();

    progress.start_stage("Writing report");
    let report_writer = ReportWriter::new();
    let report = report_writer.build(&routes, &airlines, &wind)?;
    progress.print_block(&format!("\n{}", report));
    report_writer.write(&report, outputs.report_path())?;
    progress.finish_stage();

    info!("Analysis completed successfully!");
    info!("Results saved to: {}", outputs.results_dir().display());

    Ok(AnalysisOutcome {
        routes,
        airlines,
        wind,
        report,
    })
}
