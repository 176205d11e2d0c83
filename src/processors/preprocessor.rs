use crate::models::FlightRecord;
use std::collections::HashSet;
use tracing::{info, warn};

/// Derives composite columns on the flight table
pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Set `route = origin-dest` on every record and return the number of
    /// distinct routes. Records missing either airport get no route.
    pub fn derive_routes(&self, records: &mut [FlightRecord]) -> usize {
        info!("Preprocessing flight data...");

        let mut unique_routes = HashSet::new();
        let mut unrouted = 0usize;

        for record in records.iter_mut() {
            record.route = record.route_key();
            match record.route {
                Some(ref route) => {
                    unique_routes.insert(route.clone());
                }
                None => unrouted += 1,
            }
        }

        if unrouted > 0 {
            warn!(
                records = unrouted,
                "Records without origin or destination have no route"
            );
        }
        info!("Created {} unique routes", unique_routes.len());

        unique_routes.len()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
