//! Error types for Argonaut.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! None of these conditions are fatal to a session: the worst outcome of any
//! ingestion failure is that the catalog stays synthetic.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Argonaut operations.
pub type Result<T> = std::result::Result<T, ArgonautError>;

/// Errors that can occur in Argonaut.
#[derive(Debug, Error)]
pub enum ArgonautError {
    /// A profile source could not be retrieved.
    #[error("Failed to retrieve {location}")]
    Transport {
        /// Source location (path or identifier).
        location: String,
        #[source]
        /// Underlying transport failure.
        source: std::io::Error,
    },

    /// A profile source does not exist.
    #[error("Source not found: {path}")]
    SourceNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The NetCDF library could not open the buffer at all.
    #[error("NetCDF library unavailable for buffer: {0}")]
    FormatUnavailable(String),

    /// The buffer opened but does not have the expected structure.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Failed to read NetCDF data.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl ArgonautError {
    /// Create a Transport error.
    pub fn transport(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Transport {
            location: location.into(),
            source,
        }
    }

    /// Create a SourceNotFound error.
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a Decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

impl From<netcdf::Error> for ArgonautError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_names_location() {
        let err = ArgonautError::transport(
            "data/1901766_prof.nc",
            std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
        );
        assert_eq!(err.to_string(), "Failed to retrieve data/1901766_prof.nc");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn decode_error_message() {
        let err = ArgonautError::decode("missing N_LEVELS");
        assert_eq!(err.to_string(), "Decode error: missing N_LEVELS");
    }
}
