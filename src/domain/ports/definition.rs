//! Definition Port
//!
//! Deployment rules: which source type to use and how candidate actions are
//! rewritten before execution.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::domain::entities::{Action, Options};

/// Error raised while applying a modifier
#[derive(Debug, Error)]
pub enum ModifierError {
    /// A filter command could not be run or exited unsuccessfully
    #[error("filter `{command}` failed on '{path}': {message}")]
    Filter {
        command: String,
        path: String,
        message: String,
    },

    /// A rename produced a path outside the deployment root
    #[error("rule renames '{path}' to '{destination}', which leaves the deployment root")]
    EscapingDestination { path: String, destination: String },

    /// Work area I/O failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of applying the definition to one candidate action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modification {
    /// Actions to append to the final list, in order
    pub actions: Vec<Action>,
    /// Paths whose materialized copies must be removed from the work area
    pub cancels: Vec<String>,
}

impl Modification {
    /// No output and nothing cancelled
    pub fn none() -> Self {
        Self::default()
    }

    /// Emit a single action
    pub fn emit(action: Action) -> Self {
        Self {
            actions: vec![action],
            cancels: Vec::new(),
        }
    }

    pub fn with_cancel(mut self, path: impl Into<String>) -> Self {
        self.cancels.push(path.into());
        self
    }
}

/// Deployment definition
pub trait Definition {
    /// Explicit source type, or `None` to auto-detect
    fn source_type(&self) -> Option<&str>;

    /// Options passed to the source constructor
    fn source_options(&self) -> &Options;

    /// Rewrite one candidate action
    ///
    /// `seen` holds every destination path already produced during this
    /// pipeline run; implementations record the destinations they emit and
    /// use it to detect several candidates collapsing onto one output.
    fn apply(
        &self,
        work: &Path,
        action: &Action,
        seen: &mut HashSet<String>,
    ) -> Result<Modification, ModifierError>;
}

/// Definition without modifiers: every action passes through unchanged and
/// only the first action for a given path is kept.
#[derive(Debug, Clone, Default)]
pub struct PassthroughDefinition {
    source_type: Option<String>,
    source_options: Options,
}

impl PassthroughDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }
}

impl Definition for PassthroughDefinition {
    fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }

    fn source_options(&self) -> &Options {
        &self.source_options
    }

    fn apply(
        &self,
        _work: &Path,
        action: &Action,
        seen: &mut HashSet<String>,
    ) -> Result<Modification, ModifierError> {
        if !seen.insert(action.path().to_string()) {
            return Ok(Modification::none());
        }
        Ok(Modification::emit(action.clone()))
    }
}
