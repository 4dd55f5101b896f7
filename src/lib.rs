//! `flightboard` - An in-memory registry of flight records
//!
//! This library provides a small ordered collection of flight records keyed by
//! flight number, supporting insertion with deduplication, removal, status
//! filtering, longest-duration lookup, and in-place status update.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod registry;
pub mod roster;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::Flight;
pub use logging::init_logging;
pub use registry::FlightRegistry;
