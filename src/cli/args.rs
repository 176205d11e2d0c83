use clap::Parser;
use std::path::PathBuf;

/// Running without arguments analyses `flights2022.csv` and
/// `flights_weather2022.csv` from the current directory and writes to `results/`.
#[derive(Parser, Debug)]
#[command(name = "flight-delay-analyzer")]
#[command(about = "Flight delay, cancellation and wind impact analysis")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        help = "Configuration file [default: flight_analysis.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Hide the stage progress bar")]
    pub no_progress: bool,
}
