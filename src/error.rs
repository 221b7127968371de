//! Error types for revsync
//!
//! Uses `thiserror` for library errors. Port-level errors (`SourceError`,
//! `TargetError`, `ModifierError`, `RevisionError`) live next to their traits
//! and are wrapped here.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ModifierError, RevisionError, SourceError, TargetError};

/// Result type alias for configuration operations
pub type RevsyncResult<T> = Result<T, RevsyncError>;

/// Configuration and environment errors
#[derive(Error, Debug)]
pub enum RevsyncError {
    /// Configuration file missing
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid configuration TOML
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid modifier rule
    #[error("invalid modifier pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Modifier rule with an unusable setting
    #[error("invalid modifier rule '{pattern}': {message}")]
    InvalidRule { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a deploy run
#[derive(Error, Debug)]
pub enum DeployError {
    /// No location with that name is configured
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// No target constructor for the connection scheme
    #[error("unsupported connection scheme in '{connection}'")]
    UnsupportedScheme { connection: String },

    /// Target constructor rejected the location
    #[error("cannot set up target for '{location}': {source}")]
    TargetSetup {
        location: String,
        #[source]
        source: TargetError,
    },

    /// No source constructor for the type, or no type detected
    #[error("unknown source type '{0}'")]
    UnknownSource(String),

    /// Revision marker exists but cannot be read
    #[error("cannot read revision marker '{state}': {message}")]
    RevisionUnreadable { state: String, message: String },

    /// Revision marker content is invalid
    #[error("cannot parse revision marker '{state}': {source}")]
    RevisionParse {
        state: String,
        #[source]
        source: RevisionError,
    },

    /// Source reports no current revision and none was given
    #[error("no target revision: source has no current revision")]
    NoTargetRevision,

    /// Source failed to answer
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// A modifier rule failed
    #[error("modifier failed: {0}")]
    Modifier(#[from] ModifierError),

    /// Target reported a failed transfer
    #[error("transfer failed: {0}")]
    Transfer(#[source] TargetError),

    /// Work area or local marker I/O
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = RevsyncError::InvalidConfig {
            file: PathBuf::from(".revsync.toml"),
            message: "expected table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in .revsync.toml: expected table"
        );
    }

    #[test]
    fn test_error_display_unknown_location() {
        let err = DeployError::UnknownLocation("staging".to_string());
        assert_eq!(err.to_string(), "unknown location 'staging'");
    }

    #[test]
    fn test_error_display_revision_parse() {
        let err = DeployError::RevisionParse {
            state: ".revsync.rev".to_string(),
            source: RevisionError::VersionMismatch {
                found: 3,
                expected: 1,
            },
        };
        assert!(err.to_string().contains(".revsync.rev"));
        assert!(err.to_string().contains("version 3"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DeployError = io_err.into();
        assert!(matches!(err, DeployError::Io(_)));
    }
}
