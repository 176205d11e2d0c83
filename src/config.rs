use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILE, DEFAULT_DPI, DEFAULT_FIGURE_SIZE, DEFAULT_TOP_N,
    DEFAULT_WIND_FIGURE_SIZE, FLIGHTS_FILE, FLIGHTS_WEATHER_FILE, PLOTS_DIR, POINTS_PER_INCH,
    REPORT_FILE, RESULTS_DIR,
};

/// Settings for one pipeline run. Every stage receives what it needs from
/// here instead of reading process-wide constants.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnalysisConfig {
    pub flights_path: PathBuf,

    pub weather_path: PathBuf,

    pub results_dir: PathBuf,

    #[validate(length(min = 1))]
    pub plots_dir_name: String,

    #[validate(length(min = 1))]
    pub report_file_name: String,

    #[validate(range(min = 1))]
    pub top_n: usize,

    #[validate(nested)]
    pub plot: PlotSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlotSettings {
    #[validate(range(min = 72, max = 600))]
    pub dpi: u32,

    #[validate(range(min = 1.0, max = 40.0))]
    pub figure_width: f64,

    #[validate(range(min = 1.0, max = 40.0))]
    pub figure_height: f64,

    #[validate(range(min = 1.0, max = 40.0))]
    pub wind_figure_width: f64,

    #[validate(range(min = 1.0, max = 40.0))]
    pub wind_figure_height: f64,
}

impl AnalysisConfig {
    /// Load settings from defaults, an optional TOML file and
    /// `FLIGHT_ANALYSIS__*` environment variables, in that order of precedence.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AnalysisConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(?config, "Loaded analysis configuration");
        Ok(config)
    }

    /// Defaults with inputs read from `data_dir` and outputs written below `results_dir`
    pub fn for_directories(data_dir: &Path, results_dir: &Path) -> Self {
        Self {
            flights_path: data_dir.join(FLIGHTS_FILE),
            weather_path: data_dir.join(FLIGHTS_WEATHER_FILE),
            results_dir: results_dir.to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.plot.dpi = dpi;
        self
    }

    pub fn plots_dir(&self) -> PathBuf {
        self.results_dir.join(&self.plots_dir_name)
    }

    pub fn report_path(&self) -> PathBuf {
        self.results_dir.join(&self.report_file_name)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            flights_path: PathBuf::from(FLIGHTS_FILE),
            weather_path: PathBuf::from(FLIGHTS_WEATHER_FILE),
            results_dir: PathBuf::from(RESULTS_DIR),
            plots_dir_name: PLOTS_DIR.to_string(),
            report_file_name: REPORT_FILE.to_string(),
            top_n: DEFAULT_TOP_N,
            plot: PlotSettings::default(),
        }
    }
}

impl PlotSettings {
    /// Pixel dimensions of a figure given in inches
    pub fn pixels(&self, width_in: f64, height_in: f64) -> (u32, u32) {
        let dpi = self.dpi as f64;
        ((width_in * dpi).round() as u32, (height_in * dpi).round() as u32)
    }

    pub fn figure_pixels(&self) -> (u32, u32) {
        self.pixels(self.figure_width, self.figure_height)
    }

    pub fn wind_figure_pixels(&self) -> (u32, u32) {
        self.pixels(self.wind_figure_width, self.wind_figure_height)
    }

    /// Convert a font size in points to pixels at the configured DPI
    pub fn font_px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / POINTS_PER_INCH
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            figure_width: DEFAULT_FIGURE_SIZE.0,
            figure_height: DEFAULT_FIGURE_SIZE.1,
            wind_figure_width: DEFAULT_WIND_FIGURE_SIZE.0,
            wind_figure_height: DEFAULT_WIND_FIGURE_SIZE.1,
        }
    }
}
