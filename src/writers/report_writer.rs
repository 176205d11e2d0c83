use crate::analyzers::{GroupStats, WindAnalysis};
use crate::error::{AnalysisError, Result};
use crate::models::{AggregateRow, WindGroup};
use crate::utils::format_minutes;
use std::fs;
use std::path::Path;
use tracing::info;

const BANNER_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 20;

/// Assembles the plain-text findings report
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Build the report text from the top entry of each ranking and both wind groups.
    ///
    /// Fails when a ranking is empty or the wind summary lacks a group.
    pub fn build(
        &self,
        routes: &GroupStats,
        airlines: &GroupStats,
        wind: &WindAnalysis,
    ) -> Result<String> {
        info!("Generating summary report...");

        let worst_route = first_row(&routes.top_by_delay, "routes by delay")?;
        let most_cancelled = first_row(&routes.top_by_cancellations, "routes by cancellations")?;
        let worst_airline = first_row(&airlines.top_by_delay, "airlines by delay")?;
        let gusty = wind.group(WindGroup::Gusty)?;
        let calm = wind.group(WindGroup::Calm)?;

        let lines = [
            "=".repeat(BANNER_WIDTH),
            "FLIGHT DELAY AND CANCELLATION ANALYSIS REPORT".to_string(),
            "=".repeat(BANNER_WIDTH),
            String::new(),
            "TOP FINDINGS:".to_string(),
            "-".repeat(SECTION_RULE_WIDTH),
            format!(
                "• Worst route for delays: {} ({} min)",
                worst_route.key,
                format_minutes(worst_route.mean_dep_delay)
            ),
            format!(
                "• Route with most cancellations: {} ({} flights)",
                most_cancelled.key, most_cancelled.total_cancellations
            ),
            format!(
                "• Airline with highest delays: {} ({} min)",
                worst_airline.key,
                format_minutes(worst_airline.mean_dep_delay)
            ),
            format!(
                "• Wind impact: High winds (≥10mph) cause {} min delays",
                format_minutes(gusty.mean)
            ),
            format!(
                "                Low winds (<10mph) cause {} min delays",
                format_minutes(calm.mean)
            ),
        ];

        Ok(lines.join("\n"))
    }

    /// Write the report verbatim, replacing any previous file
    pub fn write(&self, report: &str, path: &Path) -> Result<()> {
        fs::write(path, report)?;
        info!("Summary report saved to {}", path.display());
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn first_row<'a>(ranked: &'a [AggregateRow], ranking: &str) -> Result<&'a AggregateRow> {
    ranked
        .first()
        .ok_or_else(|| AnalysisError::MissingData(format!("no entries in top {}", ranking)))
}
