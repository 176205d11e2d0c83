pub mod delay_analyzer;
pub mod wind_analyzer;

pub use delay_analyzer::{DelayAnalyzer, GroupStats};
pub use wind_analyzer::{WindAnalysis, WindAnalyzer, WindGroupSummary};
