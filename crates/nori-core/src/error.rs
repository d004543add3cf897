//! Error types and handling for configuration resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for NORI configuration operations
#[derive(Debug, Error)]
pub enum NoriError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A rule name that does not exist in the rule catalog
    #[error("Unknown rule '{rule}' in overlay #{overlay}")]
    UnknownRule { rule: String, overlay: usize },

    /// A base-group reference that the catalog cannot resolve
    #[error("Unknown rule group '{group}' in overlay #{overlay}")]
    UnknownGroup { group: String, overlay: usize },

    /// A glob pattern that failed to compile
    #[error("Invalid glob pattern '{pattern}' in overlay #{overlay}: {source}")]
    InvalidPattern {
        pattern: String,
        overlay: usize,
        #[source]
        source: glob::PatternError,
    },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    UnknownRule,
    UnknownGroup,
    InvalidPattern,
    Io,
    Internal,
}

impl NoriError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoriError::ConfigError { .. } => ErrorKind::Config,
            NoriError::UnknownRule { .. } => ErrorKind::UnknownRule,
            NoriError::UnknownGroup { .. } => ErrorKind::UnknownGroup,
            NoriError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            NoriError::IoError { .. } => ErrorKind::Io,
            NoriError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an unknown-rule error
    pub fn unknown_rule(rule: impl Into<String>, overlay: usize) -> Self {
        Self::UnknownRule {
            rule: rule.into(),
            overlay,
        }
    }

    /// Create an unknown-group error
    pub fn unknown_group(group: impl Into<String>, overlay: usize) -> Self {
        Self::UnknownGroup {
            group: group.into(),
            overlay,
        }
    }

    /// Create an invalid-pattern error
    pub fn invalid_pattern(
        pattern: impl Into<String>,
        overlay: usize,
        source: glob::PatternError,
    ) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            overlay,
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for NoriError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
