//! Error types for the overtime eligibility engine.
//!
//! The eligibility evaluation itself is total and never fails. These errors
//! cover the surrounding plumbing: loading an alternative ruleset, validating
//! user-supplied input at the API boundary, and running the server.

use thiserror::Error;

/// The main error type for the overtime eligibility engine.
///
/// # Example
///
/// ```
/// use overtime_eligibility::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/ruleset.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/ruleset.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A ruleset parsed correctly but contains values the engine cannot use.
    #[error("Invalid ruleset: {message}")]
    InvalidRuleset {
        /// A description of what made the ruleset invalid.
        message: String,
    },

    /// A user-supplied input field failed validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The logging subscriber could not be installed.
    #[error("Telemetry error: {message}")]
    Telemetry {
        /// A description of the failure.
        message: String,
    },

    /// An I/O failure while running the server.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
