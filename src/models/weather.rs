use serde::Deserialize;
use std::fmt;

use crate::utils::constants::WIND_GUST_THRESHOLD_MPH;
use crate::utils::missing;

/// One row of `flights_weather2022.csv`: a flight joined with the weather
/// observed at its origin airport.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherFlightRecord {
    #[serde(deserialize_with = "missing::optional_string")]
    pub origin: Option<String>,

    #[serde(deserialize_with = "missing::optional_f64")]
    pub dep_delay: Option<f64>,

    /// Wind gust speed in mph
    #[serde(deserialize_with = "missing::optional_f64")]
    pub wind_gust: Option<f64>,
}

impl WeatherFlightRecord {
    pub fn new(origin: &str, wind_gust: Option<f64>, dep_delay: Option<f64>) -> Self {
        Self {
            origin: Some(origin.to_string()),
            dep_delay,
            wind_gust,
        }
    }

    pub fn wind_group(&self) -> WindGroup {
        WindGroup::classify(self.wind_gust)
    }
}

/// Wind-speed bucket. Ordering follows the label text, so `"< 10mph"` sorts
/// before `">= 10mph"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindGroup {
    Calm,
    Gusty,
}

impl WindGroup {
    pub const ALL: [WindGroup; 2] = [WindGroup::Calm, WindGroup::Gusty];

    /// Gusts at or above the threshold are `Gusty`. An absent gust never
    /// satisfies the comparison and lands in `Calm`.
    pub fn classify(wind_gust: Option<f64>) -> Self {
        match wind_gust {
            Some(gust) if gust >= WIND_GUST_THRESHOLD_MPH => WindGroup::Gusty,
            _ => WindGroup::Calm,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindGroup::Calm => "< 10mph",
            WindGroup::Gusty => ">= 10mph",
        }
    }
}

impl fmt::Display for WindGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(WindGroup::classify(Some(9.99)), WindGroup::Calm);
        assert_eq!(WindGroup::classify(Some(10.0)), WindGroup::Gusty);
        assert_eq!(WindGroup::classify(Some(35.0)), WindGroup::Gusty);
    }

    #[test]
    fn test_absent_gust_is_calm() {
        assert_eq!(WindGroup::classify(None), WindGroup::Calm);
    }

    #[test]
    fn test_group_order_matches_labels() {
        assert!(WindGroup::Calm < WindGroup::Gusty);
        assert!(WindGroup::Calm.label() < WindGroup::Gusty.label());
        assert_eq!(format!("{:<10}|", WindGroup::Gusty), ">= 10mph  |");
    }

    #[test]
    fn test_deserialize_weather_row() {
        let data = "origin,dep_delay,wind_gust,temp\nJFK,15,,41.0\nLGA,-3,12.65,40.1\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records: Vec<WeatherFlightRecord> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(records[0].wind_gust, None);
        assert_eq!(records[0].wind_group(), WindGroup::Calm);
        assert_eq!(records[1].dep_delay, Some(-3.0));
        assert_eq!(records[1].wind_group(), WindGroup::Gusty);
    }
}
