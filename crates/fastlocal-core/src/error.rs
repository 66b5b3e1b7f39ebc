//! Error types for the fastlocal provider.
//!
//! Per-file write failures are not represented here: they are collected as
//! diagnostics by the data source. This type covers everything that stops a
//! request before any file is touched, such as an unreadable or malformed
//! configuration document.
//!
//! # Examples
//!
//! ```
//! use fastlocal_core::{Error, Result};
//!
//! fn require_object(value: &serde_json::Value) -> Result<()> {
//!     if !value.is_object() {
//!         return Err(Error::ConfigError {
//!             message: "expected an object".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_object(&serde_json::json!([])).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the fastlocal provider and CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when configuration is missing required fields or has the
    /// wrong shape.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization/deserialization error.
    ///
    /// Raised when JSON or TOML conversion fails.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// I/O error while reading or writing a provider document.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastlocal_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "missing files".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for fastlocal operations.
///
/// # Examples
///
/// ```
/// use fastlocal_core::{Error, Result};
///
/// fn parse_flag(value: &str) -> Result<bool> {
///     value
///         .parse()
///         .map_err(|_| Error::InvalidArgument(format!("not a bool: {value}")))
/// }
///
/// assert!(parse_flag("true").is_ok());
/// assert!(parse_flag("maybe").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
