//! Source Port
//!
//! Abstracts the version-control system that produces the delta between two
//! revisions. Implementations materialize the content of every ADD action
//! into the work area as a side effect of `diff`.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::Action;

/// Error raised by a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying tool could not be started
    #[error("failed to run `{command}`: {message}")]
    Spawn { command: String, message: String },

    /// The underlying tool reported a failure
    #[error("`{command}` failed: {stderr}")]
    Command { command: String, stderr: String },

    /// Output of the underlying tool could not be understood
    #[error("unexpected output from `{command}`: {message}")]
    Parse { command: String, message: String },

    /// Materializing content into the work area failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for source repositories
pub trait Source {
    /// Display name for logs (e.g. "git")
    fn name(&self) -> &str;

    /// Current revision of the repository, if one can be determined
    fn current(&self) -> Result<Option<String>, SourceError>;

    /// Ordered actions needed to go from `from` to `to`
    ///
    /// With `from = None` every file present at `to` is returned as an ADD.
    /// ADD contents are written to `work` at their relative path.
    fn diff(
        &self,
        work: &Path,
        from: Option<&str>,
        to: &str,
    ) -> Result<Vec<Action>, SourceError>;
}
