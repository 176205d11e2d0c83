pub mod flight_reader;

pub use flight_reader::FlightReader;
