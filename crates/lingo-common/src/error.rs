//! Error types and utilities for Lingo

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for Lingo operations
pub type Result<T> = std::result::Result<T, LingoError>;

/// Main error type for Lingo operations.
///
/// Missing translations, unreadable resource files and malformed request
/// headers are not errors; the engine degrades on those. This type covers
/// configuration and I/O failures at the edges of the system.
#[derive(Error, Debug)]
pub enum LingoError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be parsed in the format its extension announced
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Unsupported file format
    #[error("Unsupported file format: {}", path.display())]
    UnsupportedFormat {
        /// File with the unknown extension
        path: PathBuf,
    },

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),
}

impl LingoError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new configuration error tied to a field
    pub fn config_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(path: impl AsRef<Path>, msg: impl ToString) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: msg.to_string(),
        }
    }

    /// Offending configuration field, if this is a field-level error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Config { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LingoError::config("default_lang cannot be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: default_lang cannot be empty"
        );
        assert!(err.field().is_none());
    }

    #[test]
    fn test_config_field_error() {
        let err = LingoError::config_field("must not be empty", "cookie_var");
        assert_eq!(err.field(), Some("cookie_var"));
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let err = LingoError::parse("lang/en-us.toml", "expected a table");
        let text = err.to_string();
        assert!(text.contains("lang/en-us.toml"));
        assert!(text.contains("expected a table"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LingoError = io.into();
        assert!(matches!(err, LingoError::Io(_)));
    }
}
