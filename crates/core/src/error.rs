//! Error types for digest operations.
//!
//! The restructuring engine itself never fails: malformed markup degrades to
//! defaults. [`DigestError`] covers the edges around it, namely reading
//! settings files, reading input documents, and serializing publications.
//!
//! # Example
//!
//! ```rust
//! use digest_core::{DigestError, Result};
//!
//! fn require_html(html: &str) -> Result<&str> {
//!     if html.is_empty() {
//!         return Err(DigestError::ConfigError("empty document".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for digest operations.
#[derive(Error, Debug)]
pub enum DigestError {
    /// File not found.
    ///
    /// Returned when an input document or an explicitly requested settings
    /// file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read or write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file syntax errors.
    ///
    /// Returned for unknown keys, lines without a `key: value` shape, and
    /// read failures, with the offending line number where known.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A known setting carried a value that could not be interpreted.
    #[error("Invalid value {value:?} for setting `{key}`")]
    InvalidSetting { key: String, value: String },

    /// Publication serialization errors.
    #[error("Serialization failed: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DigestError {
    fn from(err: serde_json::Error) -> Self {
        DigestError::SerializationError(err.to_string())
    }
}

/// Result type alias for DigestError.
pub type Result<T> = std::result::Result<T, DigestError>;
