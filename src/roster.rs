//! Roster file loading.
//!
//! A roster is a JSON array of flight records. Loading replays registry
//! insertion over the file contents, so duplicate flight numbers in a roster
//! are dropped (first occurrence wins) the same way duplicate inserts are.

use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};
use crate::flight::Flight;
use crate::registry::FlightRegistry;

/// Read a roster file into a list of flight records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// flight records.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<Flight>> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| Error::roster_read(path, source))?;
    let flights: Vec<Flight> =
        serde_json::from_str(&contents).map_err(|source| Error::roster_parse(path, source))?;
    Ok(flights)
}

/// Read a roster file into a registry, applying insertion semantics.
///
/// Records after the first occurrence of a flight number are dropped with a
/// warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_registry(path: impl AsRef<Path>) -> Result<FlightRegistry> {
    let path = path.as_ref();
    let flights = load_flights(path)?;

    let mut registry = FlightRegistry::new();
    for flight in flights {
        let number = flight.flight_number.clone();
        if !registry.insert(flight) {
            warn!("dropping duplicate flight {number} from {}", path.display());
        }
    }
    Ok(registry)
}
