/// Input file names
pub const FLIGHTS_FILE: &str = "flights2022.csv";
pub const FLIGHTS_WEATHER_FILE: &str = "flights_weather2022.csv";

/// Directory and output file names
pub const RESULTS_DIR: &str = "results";
pub const PLOTS_DIR: &str = "plots";
pub const REPORT_FILE: &str = "analysis_summary.txt";
pub const ROUTE_CANCELLATIONS_PLOT: &str = "route_cancellations.png";
pub const AIRLINE_DELAYS_PLOT: &str = "airline_delays.png";
pub const WIND_IMPACT_PLOT: &str = "wind_impact.png";

/// Configuration sources
pub const DEFAULT_CONFIG_FILE: &str = "flight_analysis.toml";
pub const CONFIG_ENV_PREFIX: &str = "FLIGHT_ANALYSIS";

/// Analysis defaults
pub const DEFAULT_TOP_N: usize = 9;
pub const WIND_GUST_THRESHOLD_MPH: f64 = 10.0;

/// Plot defaults (figure sizes in inches)
pub const DEFAULT_DPI: u32 = 300;
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (12.0, 8.0);
pub const DEFAULT_WIND_FIGURE_SIZE: (f64, f64) = (10.0, 6.0);
pub const POINTS_PER_INCH: f64 = 72.0;

/// I/O defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
