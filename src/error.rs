//! Error types for the autocorrect library.
//!
//! Edit-distance computation and ranking never fail. Errors only come from the
//! edges of the crate: loading word lists, reading configuration files and
//! validating configuration values. All of them are represented by the
//! [`AutocorrectError`] enum.
//!
//! # Examples
//!
//! ```
//! use autocorrect::error::{AutocorrectError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AutocorrectError::invalid_config("threshold must not be negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for autocorrect operations.
#[derive(Error, Debug)]
pub enum AutocorrectError {
    /// I/O errors (reading dictionaries and configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration values that cannot be used, e.g. a negative threshold
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed word-list files
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with AutocorrectError.
pub type Result<T> = std::result::Result<T, AutocorrectError>;

impl AutocorrectError {
    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::InvalidConfiguration(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Dictionary(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = AutocorrectError::invalid_config("threshold is -1");
        assert_eq!(error.to_string(), "Invalid configuration: threshold is -1");

        let error = AutocorrectError::dictionary("missing header");
        assert_eq!(error.to_string(), "Dictionary error: missing header");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = AutocorrectError::from(io_error);

        match error {
            AutocorrectError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AutocorrectError::from(json_error);
        assert!(matches!(error, AutocorrectError::Json(_)));
    }
}
