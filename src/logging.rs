//! Logging configuration for flightboard.
//!
//! Tracing-based logging, initialized once at startup by the `fboard` binary.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Normal output level (info and above).
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
    /// Very verbose output (trace level).
    Trace,
}

impl Verbosity {
    /// Map the CLI's `--quiet`/`--verbose` flags to a verbosity level.
    ///
    /// `quiet` wins over any number of `-v` flags; one `-v` means debug,
    /// two or more mean trace.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Self::Quiet
        } else {
            match verbose {
                0 => Self::Normal,
                1 => Self::Verbose,
                _ => Self::Trace,
            }
        }
    }

    /// Convert verbosity to a tracing level filter.
    #[must_use]
    pub fn to_level_filter(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Initialize the logging system.
///
/// Call once at application startup. The `RUST_LOG` environment variable,
/// when set, takes precedence over the `verbosity` parameter.
///
/// # Examples
///
/// ```no_run
/// use flightboard::logging::Verbosity;
///
/// // Debug-level registry events (insert, dedup skip, remove, update)
/// flightboard::init_logging(Verbosity::from_flags(false, 1));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("flightboard={}", verbosity.to_level_filter());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    // Ignore the error if a subscriber is already installed.
    let _ = subscriber.try_init();
}

/// Initialize logging for tests: warnings and errors only, routed through
/// the test writer so output stays attached to the owning test.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
