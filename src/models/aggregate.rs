use std::fmt;

use crate::models::FlightRecord;

/// Column a flight table is grouped on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingColumn {
    Route,
    Airline,
}

impl GroupingColumn {
    pub fn name(&self) -> &'static str {
        match self {
            GroupingColumn::Route => "route",
            GroupingColumn::Airline => "airline",
        }
    }

    /// Grouping key of a record; `None` keeps the record out of every group
    pub fn key<'a>(&self, record: &'a FlightRecord) -> Option<&'a str> {
        match self {
            GroupingColumn::Route => record.route.as_deref(),
            GroupingColumn::Airline => record.airline.as_deref(),
        }
    }
}

impl fmt::Display for GroupingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub key: String,
    /// NaN when no row in the group carries a delay value
    pub mean_dep_delay: f64,
    pub total_cancellations: u64,
}

/// Running mean that skips absent values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayAccumulator {
    sum: f64,
    count: u64,
}

impl DelayAccumulator {
    pub fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            f64::NAN
        }
    }
}
