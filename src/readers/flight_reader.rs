use crate::error::{AnalysisError, Result};
use crate::models::{FlightRecord, WeatherFlightRecord};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Reads header-first CSV files into typed rows. Columns are matched by
/// header name, so column order and unrelated columns do not matter.
pub struct FlightReader;

impl FlightReader {
    pub fn new() -> Self {
        Self
    }

    /// Read `flights2022.csv`-shaped data
    pub fn read_flights(&self, path: &Path) -> Result<Vec<FlightRecord>> {
        self.read_records(path)
    }

    /// Read `flights_weather2022.csv`-shaped data
    pub fn read_weather_flights(&self, path: &Path) -> Result<Vec<WeatherFlightRecord>> {
        self.read_records(path)
    }

    fn read_records<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AnalysisError::DataFileNotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => AnalysisError::Io(source),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file));

        let mut records = Vec::new();
        for result in reader.deserialize() {
            records.push(result?);
        }

        debug!(path = %path.display(), rows = records.len(), "Read CSV file");
        Ok(records)
    }
}

impl Default for FlightReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_flights_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(
            temp_file,
            "year,month,day,dep_time,sched_dep_time,dep_delay,carrier,origin,dest,airline"
        )?;
        writeln!(temp_file, "2022,1,1,1200.0,1150,10.0,B6,JFK,LAX,JetBlue Airways")?;
        writeln!(temp_file, "2022,1,1,,1500,,B6,JFK,LAX,JetBlue Airways")?;

        let reader = FlightReader::new();
        let flights = reader.read_flights(temp_file.path())?;

        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].dep_time, Some(1200.0));
        assert_eq!(flights[0].dep_delay, Some(10.0));
        assert!(flights[1].is_cancelled());
        assert_eq!(flights[1].dep_delay, None);
        Ok(())
    }

    #[test]
    fn test_read_weather_file_in_any_column_order() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "wind_gust,temp,dep_delay,origin")?;
        writeln!(temp_file, "9.2,38.1,5,EWR")?;
        writeln!(temp_file, "NA,40.0,15,LGA")?;

        let reader = FlightReader::new();
        let rows = reader.read_weather_flights(temp_file.path())?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].wind_gust, Some(9.2));
        assert_eq!(rows[1].wind_gust, None);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_reported_with_path() {
        let reader = FlightReader::new();
        let err = reader
            .read_flights(Path::new("does/not/exist/flights2022.csv"))
            .unwrap_err();

        match err {
            AnalysisError::DataFileNotFound { path, .. } => {
                assert!(path.ends_with("flights2022.csv"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_is_fatal() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "origin,dest,airline,dep_time")?;
        writeln!(temp_file, "JFK,LAX,JetBlue Airways,1200")?;

        let err = FlightReader::new()
            .read_flights(temp_file.path())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Csv(_)));
        assert_eq!(err.exit_code(), 3);
        Ok(())
    }

    #[test]
    fn test_malformed_value_is_fatal() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "origin,dest,airline,dep_time,dep_delay")?;
        writeln!(temp_file, "JFK,LAX,JetBlue Airways,1200,late")?;

        let result = FlightReader::new().read_flights(temp_file.path());
        assert!(matches!(result, Err(AnalysisError::Csv(_))));
        Ok(())
    }

    #[test]
    fn test_header_only_file_is_empty() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "origin,dest,airline,dep_time,dep_delay")?;

        let flights = FlightReader::new().read_flights(temp_file.path())?;
        assert!(flights.is_empty());
        Ok(())
    }
}
