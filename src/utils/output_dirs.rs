use crate::config::AnalysisConfig;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output locations for one run, created once when the pipeline starts.
#[derive(Debug, Clone)]
pub struct OutputDirs {
    results_dir: PathBuf,
    plots_dir: PathBuf,
    report_path: PathBuf,
}

impl OutputDirs {
    /// Create the results and plots directories (if missing) and resolve the output paths
    pub fn prepare(config: &AnalysisConfig) -> Result<Self> {
        let results_dir = config.results_dir.clone();
        let plots_dir = config.plots_dir();

        fs::create_dir_all(&results_dir)?;
        fs::create_dir_all(&plots_dir)?;
        debug!(
            results = %results_dir.display(),
            plots = %plots_dir.display(),
            "Prepared output directories"
        );

        Ok(Self {
            report_path: config.report_path(),
            results_dir,
            plots_dir,
        })
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn plots_dir(&self) -> &Path {
        &self.plots_dir
    }

    pub fn plot_path(&self, file_name: &str) -> PathBuf {
        self.plots_dir.join(file_name)
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}
