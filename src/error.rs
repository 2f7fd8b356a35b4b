//! Error types for the apercu library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`ApercuError`] enum.
//!
//! # Examples
//!
//! ```
//! use apercu::error::{ApercuError, Result};
//!
//! fn checked_window(n: usize) -> Result<usize> {
//!     if n == 0 {
//!         return Err(ApercuError::invalid_parameter("n must be at least 1"));
//!     }
//!     Ok(n)
//! }
//!
//! assert!(checked_window(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for apercu operations.
///
/// Parameter validation and empty-input conditions are distinct variants so
/// callers can tell a misconfigured run apart from a corpus that simply
/// produced nothing after filtering.
#[derive(Error, Debug)]
pub enum ApercuError {
    /// A pipeline parameter was out of range (`n == 0`, `top_n == 0`).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The corpus produced no n-grams, so no report can be built.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (reading corpus or stopword files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ApercuError.
pub type Result<T> = std::result::Result<T, ApercuError>;

impl ApercuError {
    /// Create a new invalid parameter error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        ApercuError::InvalidParameter(msg.into())
    }

    /// Create a new empty input error.
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        ApercuError::EmptyInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ApercuError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ApercuError::invalid_parameter("n must be at least 1");
        assert_eq!(error.to_string(), "Invalid parameter: n must be at least 1");

        let error = ApercuError::empty_input("corpus yielded no n-grams");
        assert_eq!(error.to_string(), "Empty input: corpus yielded no n-grams");

        let error = ApercuError::analysis("bad tokenizer pattern");
        assert_eq!(error.to_string(), "Analysis error: bad tokenizer pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ApercuError::from(io_error);

        match error {
            ApercuError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
