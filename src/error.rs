//! Error types for invidx.
//!
//! All fallible operations return [`Result`], whose error is [`IndexError`].
//!
//! # Examples
//!
//! ```
//! use invidx::error::{IndexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(IndexError::invalid_argument("query needs at least one term"))
//! }
//!
//! assert!(matches!(example_operation(), Err(IndexError::InvalidArgument(_))));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for invidx operations.
#[derive(Error, Debug)]
pub enum IndexError {
    /// I/O errors (a source or destination is unreachable or unreadable)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input line or malformed/truncated binary container
    #[error("Format error: {0}")]
    Format(String),

    /// A value does not fit the fixed-width fields of the binary container
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with IndexError.
pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        IndexError::Format(msg.into())
    }

    /// Create a new encoding error.
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        IndexError::Encoding(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        IndexError::InvalidArgument(msg.into())
    }

    /// Map an I/O error raised while decoding a container.
    ///
    /// Running out of bytes means the container is truncated, which is a format problem,
    /// not an I/O one.
    pub fn from_decode(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            IndexError::Format(format!("truncated container: {err}"))
        } else {
            IndexError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = IndexError::format("bad line");
        assert_eq!(error.to_string(), "Format error: bad line");

        let error = IndexError::encoding("id too large");
        assert_eq!(error.to_string(), "Encoding error: id too large");

        let error = IndexError::invalid_argument("empty query");
        assert_eq!(error.to_string(), "Invalid argument: empty query");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = IndexError::from(io_error);

        match error {
            IndexError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_decode_eof_is_format_error() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer");
        assert!(matches!(IndexError::from_decode(eof), IndexError::Format(_)));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(IndexError::from_decode(denied), IndexError::Io(_)));
    }
}
