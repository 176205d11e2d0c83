use serde::Deserialize;

use crate::utils::missing;

/// One row of `flights2022.csv`. Only the columns used by the analysis are
/// mapped; every other column in the file is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    #[serde(deserialize_with = "missing::optional_string")]
    pub origin: Option<String>,

    #[serde(deserialize_with = "missing::optional_string")]
    pub dest: Option<String>,

    #[serde(deserialize_with = "missing::optional_string")]
    pub airline: Option<String>,

    /// Actual departure time (HHMM). Absent for cancelled flights.
    #[serde(deserialize_with = "missing::optional_f64")]
    pub dep_time: Option<f64>,

    /// Departure delay in minutes, negative for early departures
    #[serde(deserialize_with = "missing::optional_f64")]
    pub dep_delay: Option<f64>,

    /// Derived `origin-dest` key, filled in by the preprocessor
    #[serde(skip)]
    pub route: Option<String>,
}

impl FlightRecord {
    pub fn new(
        origin: &str,
        dest: &str,
        airline: &str,
        dep_time: Option<f64>,
        dep_delay: Option<f64>,
    ) -> Self {
        Self {
            origin: Some(origin.to_string()),
            dest: Some(dest.to_string()),
            airline: Some(airline.to_string()),
            dep_time,
            dep_delay,
            route: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.dep_time.is_none()
    }

    pub fn route_key(&self) -> Option<String> {
        match (&self.origin, &self.dest) {
            (Some(origin), Some(dest)) => Some(format!("{}-{}", origin, dest)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_key() {
        let flight = FlightRecord::new("JFK", "LAX", "JetBlue Airways", Some(1200.0), Some(10.0));
        assert_eq!(flight.route_key().as_deref(), Some("JFK-LAX"));
        assert!(!flight.is_cancelled());
    }

    #[test]
    fn test_route_key_requires_both_airports() {
        let mut flight = FlightRecord::new("JFK", "LAX", "JetBlue Airways", None, None);
        flight.dest = None;
        assert_eq!(flight.route_key(), None);
        assert!(flight.is_cancelled());
    }

    #[test]
    fn test_deserialize_ignores_extra_columns() {
        let data = "year,origin,dest,dep_time,dep_delay,carrier,airline\n\
                    2022,EWR,ORD,,NA,UA,United Air Lines Inc.\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records: Vec<FlightRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].origin.as_deref(), Some("EWR"));
        assert_eq!(records[0].airline.as_deref(), Some("United Air Lines Inc."));
        assert_eq!(records[0].dep_time, None);
        assert_eq!(records[0].dep_delay, None);
        assert_eq!(records[0].route, None);
    }
}
