use crate::models::{AggregateRow, DelayAccumulator, FlightRecord, GroupingColumn};
use crate::utils::constants::DEFAULT_TOP_N;
use crate::utils::format_minutes;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::info;

/// Per-group delay and cancellation aggregates plus the two ranked views
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub column: GroupingColumn,
    /// One row per distinct key, in ascending key order
    pub table: Vec<AggregateRow>,
    pub top_by_delay: Vec<AggregateRow>,
    pub top_by_cancellations: Vec<AggregateRow>,
}

impl GroupStats {
    pub fn top_delay(&self) -> Option<&AggregateRow> {
        self.top_by_delay.first()
    }

    pub fn top_cancellations(&self) -> Option<&AggregateRow> {
        self.top_by_cancellations.first()
    }

    pub fn get(&self, key: &str) -> Option<&AggregateRow> {
        self.table.iter().find(|row| row.key == key)
    }
}

#[derive(Default)]
struct GroupAccumulator {
    delays: DelayAccumulator,
    cancellations: u64,
}

/// Groups flights by route or airline and ranks the groups.
///
/// Absent `dep_delay` values are excluded from the mean; a group with no
/// delay values at all keeps a NaN mean and ranks after every defined mean.
/// Absent `dep_time` counts as a cancellation.
pub struct DelayAnalyzer {
    top_n: usize,
}

impl DelayAnalyzer {
    pub fn new() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn analyze(&self, records: &[FlightRecord], column: GroupingColumn) -> GroupStats {
        let table = aggregate(records, column);
        let top_by_delay = rank_by_delay(&table, self.top_n);
        let top_by_cancellations = rank_by_cancellations(&table, self.top_n);

        let stats = GroupStats {
            column,
            table,
            top_by_delay,
            top_by_cancellations,
        };

        if let Some(top) = stats.top_delay() {
            info!(
                "Top {} by delays: {} ({} min)",
                column,
                top.key,
                format_minutes(top.mean_dep_delay)
            );
        }
        if let Some(top) = stats.top_cancellations() {
            info!(
                "Top {} by cancellations: {} ({} cancellations)",
                column, top.key, top.total_cancellations
            );
        }

        stats
    }

    pub fn analyze_routes(&self, records: &[FlightRecord]) -> GroupStats {
        info!("Analyzing routes...");
        self.analyze(records, GroupingColumn::Route)
    }

    pub fn analyze_airlines(&self, records: &[FlightRecord]) -> GroupStats {
        info!("Analyzing airlines...");
        self.analyze(records, GroupingColumn::Airline)
    }
}

impl Default for DelayAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full aggregate table, one row per key in ascending key order
pub fn aggregate(records: &[FlightRecord], column: GroupingColumn) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<&str, GroupAccumulator> = BTreeMap::new();

    for record in records {
        let Some(key) = column.key(record) else {
            continue;
        };
        let group = groups.entry(key).or_default();
        group.delays.push(record.dep_delay);
        if record.is_cancelled() {
            group.cancellations += 1;
        }
    }

    groups
        .into_iter()
        .map(|(key, group)| AggregateRow {
            key: key.to_string(),
            mean_dep_delay: group.delays.mean(),
            total_cancellations: group.cancellations,
        })
        .collect()
}

/// Top `n` rows by mean delay, descending. NaN sorts last; ties keep table order.
pub fn rank_by_delay(table: &[AggregateRow], n: usize) -> Vec<AggregateRow> {
    let mut ranked = table.to_vec();
    ranked.sort_by(|a, b| descending_nan_last(a.mean_dep_delay, b.mean_dep_delay));
    ranked.truncate(n);
    ranked
}

/// Top `n` rows by cancellation count, descending. Ties keep table order.
pub fn rank_by_cancellations(table: &[AggregateRow], n: usize) -> Vec<AggregateRow> {
    let mut ranked = table.to_vec();
    ranked.sort_by(|a, b| b.total_cancellations.cmp(&a.total_cancellations));
    ranked.truncate(n);
    ranked
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::Preprocessor;
    use pretty_assertions::assert_eq;

    fn routed(mut flights: Vec<FlightRecord>) -> Vec<FlightRecord> {
        Preprocessor::new().derive_routes(&mut flights);
        flights
    }

    fn row(key: &str, mean_dep_delay: f64, total_cancellations: u64) -> AggregateRow {
        AggregateRow {
            key: key.to_string(),
            mean_dep_delay,
            total_cancellations,
        }
    }

    #[test]
    fn test_route_mean_and_cancellations() {
        let flights = routed(vec![
            FlightRecord::new("JFK", "LAX", "JetBlue Airways", Some(1200.0), Some(10.0)),
            FlightRecord::new("JFK", "LAX", "JetBlue Airways", None, Some(30.0)),
        ]);

        let stats = DelayAnalyzer::new().analyze_routes(&flights);

        assert_eq!(stats.table, vec![row("JFK-LAX", 20.0, 1)]);
        assert_eq!(stats.top_delay(), Some(&row("JFK-LAX", 20.0, 1)));
    }

    #[test]
    fn test_cancellations_count_absent_departure_times() {
        let flights = routed(vec![
            FlightRecord::new("EWR", "BOS", "Endeavor Air Inc.", None, None),
            FlightRecord::new("EWR", "BOS", "Endeavor Air Inc.", None, None),
            FlightRecord::new("EWR", "BOS", "Endeavor Air Inc.", Some(700.0), Some(3.0)),
            FlightRecord::new("LGA", "ORD", "American Airlines Inc.", Some(800.0), Some(1.0)),
        ]);

        let table = aggregate(&flights, GroupingColumn::Route);

        assert_eq!(table, vec![row("EWR-BOS", 3.0, 2), row("LGA-ORD", 1.0, 0)]);
    }

    #[test]
    fn test_all_missing_delays_yield_nan() {
        let flights = routed(vec![FlightRecord::new(
            "SEA",
            "JFK",
            "Alaska Airlines Inc.",
            None,
            None,
        )]);

        let table = aggregate(&flights, GroupingColumn::Route);

        assert_eq!(table.len(), 1);
        assert!(table[0].mean_dep_delay.is_nan());
        assert_eq!(table[0].total_cancellations, 1);
    }

    #[test]
    fn test_records_without_key_are_not_grouped() {
        let mut flights = routed(vec![
            FlightRecord::new("JFK", "MIA", "American Airlines Inc.", Some(600.0), Some(4.0)),
            FlightRecord::new("JFK", "MIA", "American Airlines Inc.", Some(600.0), Some(8.0)),
        ]);
        flights[1].airline = None;

        let table = aggregate(&flights, GroupingColumn::Airline);

        assert_eq!(table, vec![row("American Airlines Inc.", 4.0, 0)]);
    }

    #[test]
    fn test_table_is_in_key_order() {
        let flights = vec![
            FlightRecord::new("JFK", "LAX", "Delta Air Lines Inc.", Some(1.0), Some(1.0)),
            FlightRecord::new("JFK", "LAX", "American Airlines Inc.", Some(1.0), Some(2.0)),
            FlightRecord::new("JFK", "LAX", "JetBlue Airways", Some(1.0), Some(3.0)),
        ];

        let keys: Vec<String> = aggregate(&flights, GroupingColumn::Airline)
            .into_iter()
            .map(|row| row.key)
            .collect();

        assert_eq!(
            keys,
            vec!["American Airlines Inc.", "Delta Air Lines Inc.", "JetBlue Airways"]
        );
    }

    #[test]
    fn test_rank_by_delay_is_descending_and_stable() {
        let table = vec![
            row("A", 5.0, 0),
            row("B", f64::NAN, 3),
            row("C", 12.0, 1),
            row("D", 5.0, 0),
            row("E", -2.0, 0),
        ];

        let ranked = rank_by_delay(&table, 9);
        let keys: Vec<&str> = ranked.iter().map(|r| r.key.as_str()).collect();

        assert_eq!(keys, vec!["C", "A", "D", "E", "B"]);
    }

    #[test]
    fn test_rank_by_cancellations_is_descending_and_stable() {
        let table = vec![
            row("A", 1.0, 2),
            row("B", 2.0, 7),
            row("C", 3.0, 2),
            row("D", 4.0, 0),
        ];

        let ranked = rank_by_cancellations(&table, 3);
        let keys: Vec<&str> = ranked.iter().map(|r| r.key.as_str()).collect();

        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_ranked_views_are_capped_at_top_n() {
        let flights: Vec<FlightRecord> = (0..20)
            .map(|i| {
                FlightRecord::new(
                    "JFK",
                    &format!("D{:02}", i),
                    "JetBlue Airways",
                    Some(1000.0),
                    Some(i as f64),
                )
            })
            .collect();
        let flights = routed(flights);

        let stats = DelayAnalyzer::new().analyze_routes(&flights);

        assert_eq!(stats.table.len(), 20);
        assert_eq!(stats.top_by_delay.len(), 9);
        assert_eq!(stats.top_by_cancellations.len(), 9);
        assert_eq!(stats.top_by_delay[0].key, "JFK-D19");
        assert!(stats
            .top_by_delay
            .windows(2)
            .all(|w| w[0].mean_dep_delay >= w[1].mean_dep_delay));

        let small = DelayAnalyzer::with_top_n(3).analyze_airlines(&flights);
        assert_eq!(small.top_by_delay.len(), 1);
        assert_eq!(small.get("JetBlue Airways").unwrap().mean_dep_delay, 9.5);
    }

    #[test]
    fn test_empty_input_has_no_top_rows() {
        let stats = DelayAnalyzer::new().analyze_routes(&[]);
        assert!(stats.table.is_empty());
        assert_eq!(stats.top_delay(), None);
        assert_eq!(stats.top_cancellations(), None);
    }
}
