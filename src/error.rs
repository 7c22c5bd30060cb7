//! Error types for the Pay Audit Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only contract violations are hard failures: malformed line items or
//! filer data, and broken configuration. Data-quality problems (unknown
//! codes, missing reference rates) are recovered locally with warnings and
//! degraded confidence instead of errors, so an audit always runs to
//! completion.

use thiserror::Error;

/// The main error type for the Pay Audit Engine.
///
/// # Example
///
/// ```
/// use pay_audit_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/registry.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/registry.yaml");
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

    /// A registry entry violates a load-time invariant (for example a
    /// tax-section code carrying a true taxability flag).
    #[error("Invalid registry entry '{code}': {message}")]
    InvalidRegistryEntry {
        /// The canonical code of the offending entry.
        code: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// A line-item code was not found in the registry.
    ///
    /// Raised only by direct registry lookups; the audit pipeline coerces
    /// unknown codes to `OTHER` with a warning instead.
    #[error("Unknown line item code: {code}")]
    UnknownCode {
        /// The code that was not found.
        code: String,
    },

    /// A line item contained invalid data (contract violation upstream).
    #[error("Invalid line item '{code}': {message}")]
    InvalidLineItem {
        /// The code of the invalid line item.
        code: String,
        /// A description of what made the line item invalid.
        message: String,
    },

    /// A filer profile field was missing or invalid.
    #[error("Invalid filer field '{field}': {message}")]
    InvalidFiler {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
