pub mod aggregate;
pub mod flight;
pub mod weather;

pub use aggregate::{AggregateRow, DelayAccumulator, GroupingColumn};
pub use flight::FlightRecord;
pub use weather::{WeatherFlightRecord, WindGroup};
