//! Error types for portfolio-pii.
//!
//! Scanning and redaction are infallible. Errors only arise from allowlist
//! persistence and configuration loading, and are surfaced to the caller
//! immediately without retry.

use std::path::Path;

use thiserror::Error;

/// The main error type for portfolio-pii operations.
#[derive(Debug, Error)]
pub enum PiiError {
    /// An I/O error, with the operation and path that failed.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error, e.g. no allowlist path configured.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// A persisted document or config file has an unrecognised shape.
    #[error("format error: {message}")]
    Format {
        /// Description of what is malformed.
        message: String,
    },

    /// Unknown PII category name.
    #[error("unknown PII category: {name}")]
    InvalidCategory {
        /// The name that failed to parse.
        name: String,
    },
}

/// Result type alias for portfolio-pii operations.
pub type Result<T> = std::result::Result<T, PiiError>;

impl PiiError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create an invalid category error.
    pub fn invalid_category(name: impl Into<String>) -> Self {
        Self::InvalidCategory { name: name.into() }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O result with a context naming the path involved.
    pub fn with_path_context<T>(
        result: std::io::Result<T>,
        action: &str,
        path: &Path,
    ) -> Result<T> {
        result.map_err(|e| Self::io_context(format!("{action} {}", path.display()), e))
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Check if this is a format error.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::IoWithContext { .. })
    }

    /// The underlying I/O error kind, if any.
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::IoWithContext { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PiiError {
    fn from(err: serde_json::Error) -> Self {
        Self::format(err.to_string())
    }
}

impl From<toml::de::Error> for PiiError {
    fn from(err: toml::de::Error) -> Self {
        Self::format(err.to_string())
    }
}
