//! Error types for the company roster crate.
//!
//! Roster operations themselves never fail: capacity overflow, rank ceilings,
//! missing companies and unknown employees are all reported through
//! [`RosterEvent`](crate::domain::RosterEvent)s and leave the model unchanged.
//! [`RosterError`] only covers the ambient surface around the model: theme
//! loading, configuration, and the event journal.

use thiserror::Error;

/// The error type for everything outside the roster rules.
///
/// # Examples
///
/// ```
/// use company_roster::RosterError;
///
/// fn validate_trace_level(level: &str) -> Result<(), RosterError> {
///     if level.is_empty() {
///         return Err(RosterError::Config("trace_level must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_trace_level("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An event could not be written to the journal.
    #[error("Journal error: {0}")]
    Journal(String),
}

/// A specialized `Result` type for configuration, theming and journal I/O.
pub type Result<T> = std::result::Result<T, RosterError>;
