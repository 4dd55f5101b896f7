//! The flight registry.
//!
//! An ordered, in-memory collection of [`Flight`] records with support for:
//! - Insertion with flight-number deduplication
//! - Removal by flight number
//! - Filtering by status
//! - Longest-duration lookup (stable on ties)
//! - In-place status update
//!
//! Insertion order is preserved and observable: it determines iteration order
//! and the tie-break for the longest-flight query. The registry is
//! single-owner and carries no internal synchronization; embedding it in a
//! concurrent host requires external mutual exclusion around every call.

use tracing::debug;

use crate::flight::Flight;

/// An ordered collection of flight records, unique by flight number.
///
/// All operations are infallible: duplicate insertion, removal of an unknown
/// number, and status update of an unknown number are quiet no-ops whose
/// outcome is reported through the return value rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightRegistry {
    flights: Vec<Flight>,
}

impl FlightRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by inserting each flight in order.
    ///
    /// Duplicate flight numbers after the first occurrence are dropped, same
    /// as calling [`insert`](Self::insert) repeatedly.
    #[must_use]
    pub fn from_flights(flights: impl IntoIterator<Item = Flight>) -> Self {
        let mut registry = Self::new();
        for flight in flights {
            registry.insert(flight);
        }
        registry
    }

    /// Insert a flight, deduplicating by flight number.
    ///
    /// If a record with the same `flight_number` already exists, the new
    /// record is discarded in its entirety (including any differing field
    /// values) and the existing record is left untouched. Returns `true` if
    /// the record was stored, `false` if it was deduplicated.
    pub fn insert(&mut self, flight: Flight) -> bool {
        if self.contains(&flight.flight_number) {
            debug!("skipping duplicate flight {}", flight.flight_number);
            return false;
        }
        debug!("inserting flight {}", flight.flight_number);
        self.flights.push(flight);
        true
    }

    /// Remove the flight with the given number.
    ///
    /// Returns `true` if a record was removed, `false` if no record matched
    /// (not an error).
    pub fn remove(&mut self, flight_number: &str) -> bool {
        let before = self.flights.len();
        self.flights.retain(|flight| !flight.has_number(flight_number));
        let removed = self.flights.len() != before;
        if removed {
            debug!("removed flight {flight_number}");
        }
        removed
    }

    /// All flights with the given status, in insertion order.
    ///
    /// Returns an empty vector when no record matches.
    #[must_use]
    pub fn flights_by_status(&self, status: &str) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|flight| flight.has_status(status))
            .cloned()
            .collect()
    }

    /// The flight with the maximum `duration_minutes`, or `None` when the
    /// registry is empty.
    ///
    /// Ties are broken by insertion order: the first record holding the
    /// maximum duration wins.
    #[must_use]
    pub fn longest_flight(&self) -> Option<&Flight> {
        // Strict-greater scan keeps the earliest record on ties.
        self.flights.iter().fold(None, |longest, flight| match longest {
            Some(current) if flight.duration_minutes > current.duration_minutes => Some(flight),
            Some(current) => Some(current),
            None => Some(flight),
        })
    }

    /// Update the status of the flight with the given number.
    ///
    /// Only the first matching record is touched (there can be at most one,
    /// per the uniqueness invariant) and only its `status` field changes.
    /// Returns `true` if a record was updated, `false` if no record matched;
    /// no error is raised for an unknown flight number.
    pub fn update_status(&mut self, flight_number: &str, new_status: impl Into<String>) -> bool {
        for flight in &mut self.flights {
            if flight.has_number(flight_number) {
                flight.status = new_status.into();
                debug!("updated status of flight {flight_number}");
                return true;
            }
        }
        debug!("no flight {flight_number} to update");
        false
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Look up a record by flight number.
    #[must_use]
    pub fn get(&self, flight_number: &str) -> Option<&Flight> {
        self.flights.iter().find(|flight| flight.has_number(flight_number))
    }

    /// Check whether a record with the given flight number exists.
    #[must_use]
    pub fn contains(&self, flight_number: &str) -> bool {
        self.flights.iter().any(|flight| flight.has_number(flight_number))
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }
}

impl<'a> IntoIterator for &'a FlightRegistry {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_flight(number: &str, duration: i64, status: &str) -> Flight {
        Flight::new(
            number,
            "2025-02-19 15:30",
            "2025-02-20 03:45",
            duration,
            status,
        )
    }

    fn sample_registry() -> FlightRegistry {
        let mut registry = FlightRegistry::new();
        registry.insert(sample_flight("AZ001", 735, "ON_TIME"));
        registry.insert(sample_flight("AZ002", 935, "DELAYED"));
        registry.insert(sample_flight("AZ003", 735, "DELAYED"));
        registry
    }

    #[test]
    fn test_new_is_empty() {
        let registry = FlightRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.longest_flight().is_none());
    }

    #[test]
    fn test_insert() {
        let mut registry = FlightRegistry::new();
        assert!(registry.insert(sample_flight("AZ001", 735, "ON_TIME")));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("AZ001"));
    }

    #[test]
    fn test_insert_deduplicates_by_flight_number() {
        let mut registry = sample_registry();

        // The duplicate is discarded wholesale, differing fields included.
        let inserted = registry.insert(sample_flight("AZ001", 999, "CANCELLED"));
        assert!(!inserted);
        assert_eq!(registry.len(), 3);

        let existing = registry.get("AZ001").unwrap();
        assert_eq!(existing.duration_minutes, 735);
        assert_eq!(existing.status, "ON_TIME");
    }

    #[test]
    fn test_insert_preserves_order() {
        let registry = sample_registry();
        let numbers: Vec<&str> = registry
            .iter()
            .map(|flight| flight.flight_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["AZ001", "AZ002", "AZ003"]);
    }

    #[test]
    fn test_from_flights_applies_insert_semantics() {
        let registry = FlightRegistry::from_flights(vec![
            sample_flight("AZ001", 735, "ON_TIME"),
            sample_flight("AZ001", 100, "CANCELLED"),
            sample_flight("AZ002", 935, "DELAYED"),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("AZ001").unwrap().status, "ON_TIME");
    }

    #[test]
    fn test_remove() {
        let mut registry = sample_registry();
        assert!(registry.remove("AZ001"));
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains("AZ001"));
    }

    #[test]
    fn test_remove_nonexistent() {
        let mut registry = sample_registry();
        assert!(!registry.remove("AZ999"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_removed_flight_absent_from_all_status_filters() {
        let mut registry = sample_registry();
        registry.remove("AZ003");

        for status in ["ON_TIME", "DELAYED", "CANCELLED"] {
            assert!(registry
                .flights_by_status(status)
                .iter()
                .all(|flight| !flight.has_number("AZ003")));
        }
    }

    #[test]
    fn test_flights_by_status() {
        let registry = sample_registry();
        let delayed = registry.flights_by_status("DELAYED");

        assert_eq!(delayed.len(), 2);
        assert_eq!(delayed[0].flight_number, "AZ002");
        assert_eq!(delayed[1].flight_number, "AZ003");
    }

    #[test]
    fn test_flights_by_status_no_matches() {
        let registry = sample_registry();
        assert!(registry.flights_by_status("DIVERTED").is_empty());
    }

    #[test]
    fn test_longest_flight() {
        let registry = sample_registry();
        let longest = registry.longest_flight().unwrap();
        assert_eq!(longest.flight_number, "AZ002");
        assert_eq!(longest.duration_minutes, 935);
    }

    #[test]
    fn test_longest_flight_tie_prefers_first_inserted() {
        let mut registry = FlightRegistry::new();
        registry.insert(sample_flight("AZ001", 735, "ON_TIME"));
        registry.insert(sample_flight("AZ003", 735, "DELAYED"));

        let longest = registry.longest_flight().unwrap();
        assert_eq!(longest.flight_number, "AZ001");
    }

    #[test]
    fn test_update_status() {
        let mut registry = sample_registry();
        assert!(registry.update_status("AZ001", "CANCELLED"));
        assert_eq!(registry.get("AZ001").unwrap().status, "CANCELLED");
    }

    #[test]
    fn test_update_status_nonexistent_is_noop() {
        let mut registry = sample_registry();
        let before = registry.clone();

        assert!(!registry.update_status("AZ999", "CANCELLED"));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_update_status_touches_only_the_status_field() {
        let mut registry = FlightRegistry::new();
        registry.insert(
            sample_flight("AZ001", 735, "ON_TIME").with_extra("gate", json!("B12")),
        );
        registry.insert(sample_flight("AZ002", 935, "DELAYED"));

        let untouched_before = registry.get("AZ002").unwrap().clone();
        registry.update_status("AZ001", "CANCELLED");

        let updated = registry.get("AZ001").unwrap();
        assert_eq!(updated.status, "CANCELLED");
        assert_eq!(updated.duration_minutes, 735);
        assert_eq!(updated.extra.get("gate"), Some(&json!("B12")));
        assert_eq!(registry.get("AZ002").unwrap(), &untouched_before);
    }

    #[test]
    fn test_into_iterator() {
        let registry = sample_registry();
        let count = (&registry).into_iter().count();
        assert_eq!(count, 3);
    }

    // Reference scenario: three flights, a cancellation, a removal, and
    // queries over what remains.
    #[test]
    fn test_full_scenario() {
        let mut registry = sample_registry();

        registry.update_status("AZ001", "CANCELLED");
        assert_eq!(registry.get("AZ001").unwrap().status, "CANCELLED");

        assert_eq!(registry.longest_flight().unwrap().flight_number, "AZ002");

        registry.remove("AZ001");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.longest_flight().unwrap().flight_number, "AZ002");

        assert!(!registry.update_status("AZ999", "CANCELLED"));

        let delayed = registry.flights_by_status("DELAYED");
        assert_eq!(delayed.len(), 2);
        assert_eq!(delayed[0].flight_number, "AZ002");
        assert_eq!(delayed[1].flight_number, "AZ003");
    }
}
