//! Core record type for flightboard.
//!
//! This module defines the flight record structure held by the registry,
//! including the open extension map that preserves arbitrary extra fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single flight record.
///
/// Identified logically by `flight_number`; timestamps are opaque strings and
/// are never parsed or validated by the registry. `status` is a free-form
/// classification ("ON_TIME", "DELAYED", "CANCELLED" are conventions, not an
/// enumeration). Any fields beyond the named ones survive deserialization and
/// reserialization verbatim through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique identifier within a registry instance.
    pub flight_number: String,

    /// Departure timestamp, opaque to the registry.
    pub departure_time: String,

    /// Arrival timestamp, opaque to the registry.
    pub arrival_time: String,

    /// Flight duration in minutes, used as the comparison key for the
    /// longest-flight query.
    pub duration_minutes: i64,

    /// Current status classification.
    pub status: String,

    /// Arbitrary additional fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Flight {
    /// Create a new flight record from the five core fields.
    #[must_use]
    pub fn new(
        flight_number: impl Into<String>,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
        duration_minutes: i64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            duration_minutes,
            status: status.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extension field, returning the modified record.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Check whether this record carries the given flight number.
    #[must_use]
    pub fn has_number(&self, flight_number: &str) -> bool {
        self.flight_number == flight_number
    }

    /// Check whether this record carries the given status.
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

impl std::fmt::Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} ({} min, {})",
            self.flight_number,
            self.departure_time,
            self.arrival_time,
            self.duration_minutes,
            self.status
        )
    }
}
