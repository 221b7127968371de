//! Target Port
//!
//! Abstracts the destination of a deployment (local directory, remote host,
//! console preview). Retries, partial failures and idempotent re-application
//! are the target's responsibility.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::Action;

/// Error during target operations
#[derive(Debug, Error)]
pub enum TargetError {
    /// Connection descriptor could not be understood
    #[error("invalid connection '{connection}': {message}")]
    InvalidConnection { connection: String, message: String },

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Command execution error
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// Required tool or feature not available
    #[error("not available: {0}")]
    NotAvailable(String),
}

/// Trait for deployment targets
pub trait Target {
    /// Display name for logs
    fn display_name(&self) -> String;

    /// Read a file from the destination
    ///
    /// Returns `Ok(None)` if the file does not exist; errors mean the
    /// destination could not be queried.
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, TargetError>;

    /// Execute an ordered batch of actions
    ///
    /// ADD copies `work/<path>` to `<destination>/<path>`, DEL removes
    /// `<destination>/<path>`.
    fn send(&self, work: &Path, actions: &[Action]) -> Result<(), TargetError>;
}
