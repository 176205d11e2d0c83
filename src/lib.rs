pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use crate::config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use pipeline::{run_pipeline, AnalysisOutcome};
