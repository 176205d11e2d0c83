use std::path::PathBuf;
use thiserror::Error;

use crate::writers::plot_writer::PlotError;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data file not found: {}", path.display())]
    DataFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration source error: {0}")]
    Settings(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Plot rendering error: {0}")]
    Plot(#[from] PlotError),

    #[error("Missing required data: {0}")]
    MissingData(String),
}

impl AnalysisError {
    /// Process exit code reported by the binary for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalysisError::DataFileNotFound { .. } | AnalysisError::Io(_) => 2,
            AnalysisError::Csv(_) => 3,
            AnalysisError::Settings(_) | AnalysisError::Validation(_) | AnalysisError::Config(_) => 4,
            AnalysisError::Plot(_) => 5,
            AnalysisError::MissingData(_) => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_failure_kinds() {
        let missing = AnalysisError::DataFileNotFound {
            path: PathBuf::from("flights2022.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(
            missing.to_string(),
            "Data file not found: flights2022.csv"
        );

        assert_eq!(AnalysisError::Config("bad".to_string()).exit_code(), 4);
        assert_eq!(
            AnalysisError::MissingData("wind group".to_string()).exit_code(),
            6
        );
        assert_eq!(
            AnalysisError::Plot(PlotError::InvalidData("empty".to_string())).exit_code(),
            5
        );
    }
}
