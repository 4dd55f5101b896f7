//! Error types for flightboard.
//!
//! Registry operations themselves never fail: duplicate insertion, removal of
//! an unknown flight, and status update of an unknown flight are quiet no-ops
//! reported through return values. Errors exist only at the edges — loading
//! configuration, reading roster files, and producing output.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightboard operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Roster Errors ===
    /// No roster file was given and none is configured.
    #[error("no roster file: pass --roster or set roster_path in the config")]
    RosterMissing,

    /// Failed to read a roster file.
    #[error("failed to read roster {path}: {source}")]
    RosterRead {
        /// Path to the roster file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a roster file.
    #[error("failed to parse roster {path}: {source}")]
    RosterParse {
        /// Path to the roster file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a roster read error.
    #[must_use]
    pub fn roster_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RosterRead {
            path: path.into(),
            source,
        }
    }

    /// Create a roster parse error.
    #[must_use]
    pub fn roster_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::RosterParse {
            path: path.into(),
            source,
        }
    }

    /// Check if this error concerns the roster file.
    #[must_use]
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            Self::RosterMissing | Self::RosterRead { .. } | Self::RosterParse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::RosterMissing;
        assert!(err.to_string().contains("no roster file"));

        let err = Error::config_validation("bad output format");
        assert_eq!(err.to_string(), "invalid configuration: bad output format");
    }

    #[test]
    fn test_roster_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::roster_read("/tmp/roster.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/roster.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_roster_parse_error_display() {
        let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = Error::roster_parse("/tmp/roster.json", json_err);
        assert!(err.to_string().contains("/tmp/roster.json"));
    }

    #[test]
    fn test_is_roster_error() {
        assert!(Error::RosterMissing.is_roster_error());
        assert!(!Error::config_validation("oops").is_roster_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
