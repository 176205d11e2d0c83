use crate::error::{AnalysisError, Result};
use crate::models::{DelayAccumulator, WeatherFlightRecord, WindGroup};
use crate::utils::format::format_table_value;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindGroupSummary {
    pub mean: f64,
    /// Number of rows with a departure delay value
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindAnalysis {
    /// Mean and count of delays per wind group. Groups with no rows are absent.
    pub summary: BTreeMap<WindGroup, WindGroupSummary>,
    /// Mean delay per (wind group, origin airport)
    pub by_origin: BTreeMap<(WindGroup, String), f64>,
}

impl WindAnalysis {
    pub fn group(&self, group: WindGroup) -> Result<&WindGroupSummary> {
        self.summary.get(&group).ok_or_else(|| {
            AnalysisError::MissingData(format!(
                "wind summary has no '{}' group",
                group.label()
            ))
        })
    }

    /// Both tables under the fixed banner, as printed to stdout
    pub fn console_dump(&self) -> String {
        let mut dump = String::new();

        dump.push('\n');
        dump.push_str(&"=".repeat(50));
        dump.push_str("\nWIND IMPACT ANALYSIS\n");
        dump.push_str(&"=".repeat(50));
        dump.push('\n');

        dump.push_str("\nSummary by Wind Conditions:\n");
        dump.push_str(&format!("{:<10} {:>14} {:>10}\n", "wind_group", "mean", "count"));
        for (group, stats) in &self.summary {
            dump.push_str(&format!(
                "{:<10} {:>14} {:>10}\n",
                group,
                format_table_value(stats.mean),
                stats.count
            ));
        }

        dump.push_str("\nDetailed by Origin Airport:\n");
        dump.push_str(&format!(
            "{:<10} {:<8} {:>16}\n",
            "wind_group", "origin", "mean_dep_delay"
        ));
        for ((group, origin), mean) in &self.by_origin {
            dump.push_str(&format!(
                "{:<10} {:<8} {:>16}\n",
                group,
                origin,
                format_table_value(*mean)
            ));
        }

        dump
    }
}

/// Compares departure delays between calm and gusty conditions.
///
/// Absent delays are excluded from means and counts. Absent gusts are
/// classified as calm; rows without an origin are left out of the
/// per-origin table only.
pub struct WindAnalyzer;

impl WindAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, records: &[WeatherFlightRecord]) -> WindAnalysis {
        info!("Analyzing wind impact on delays...");

        let mut summary: BTreeMap<WindGroup, DelayAccumulator> = BTreeMap::new();
        let mut by_origin: BTreeMap<(WindGroup, String), DelayAccumulator> = BTreeMap::new();

        for record in records {
            let group = record.wind_group();
            summary.entry(group).or_default().push(record.dep_delay);

            if let Some(ref origin) = record.origin {
                by_origin
                    .entry((group, origin.clone()))
                    .or_default()
                    .push(record.dep_delay);
            }
        }

        WindAnalysis {
            summary: summary
                .into_iter()
                .map(|(group, acc)| {
                    (
                        group,
                        WindGroupSummary {
                            mean: acc.mean(),
                            count: acc.count(),
                        },
                    )
                })
                .collect(),
            by_origin: by_origin
                .into_iter()
                .map(|(key, acc)| (key, acc.mean()))
                .collect(),
        }
    }
}

impl Default for WindAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
