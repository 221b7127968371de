//! Deploy Options
//!
//! Per-run parameters of the deploy use case.

use std::path::PathBuf;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Name of the location to deploy to
    pub location: String,
    /// Source root; manual paths and local revision markers are relative to it
    pub root: PathBuf,
    /// Extra files to add, after the location's own list
    pub append_files: Vec<String>,
    /// Extra files to delete, after the location's own list
    pub remove_files: Vec<String>,
    /// Base revision; defaults to the last deployed revision
    pub rev_from: Option<String>,
    /// Revision to deploy; defaults to the source's current revision
    pub rev_to: Option<String>,
    /// Answer yes to every confirmation
    pub yes: bool,
}

impl DeployOptions {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            root: PathBuf::from("."),
            append_files: Vec::new(),
            remove_files: Vec::new(),
            rev_from: None,
            rev_to: None,
            yes: false,
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_append_files(mut self, files: Vec<String>) -> Self {
        self.append_files = files;
        self
    }

    pub fn with_remove_files(mut self, files: Vec<String>) -> Self {
        self.remove_files = files;
        self
    }

    pub fn with_from(mut self, revision: impl Into<String>) -> Self {
        self.rev_from = Some(revision.into());
        self
    }

    pub fn with_to(mut self, revision: impl Into<String>) -> Self {
        self.rev_to = Some(revision.into());
        self
    }

    pub fn with_yes(mut self, yes: bool) -> Self {
        self.yes = yes;
        self
    }
}
