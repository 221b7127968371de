//! Revision commit
//!
//! Decides how the updated revision marker is persisted:
//! - remote locations ship the marker inside the transfer batch, so it only
//!   lands if the transfer succeeds;
//! - local locations write the marker to disk after a successful transfer.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{Action, Location};
use crate::infrastructure::fs::atomic_write;

use super::work_area::WorkArea;

/// Commit discipline of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Marker travels with the batch
    Remote,
    /// Marker is written locally after the batch succeeds
    Local,
}

/// Persists the updated revision marker for one run
#[derive(Debug, Clone)]
pub struct RevisionCommit {
    mode: CommitMode,
    state: String,
    local_path: PathBuf,
    serialized: Vec<u8>,
    changed: bool,
}

impl RevisionCommit {
    /// Prepare a commit of `serialized` for a location
    ///
    /// `root` resolves relative local marker paths; `changed` tells whether
    /// the run moves the location to a new revision.
    pub fn new(location: &Location, root: &Path, serialized: Vec<u8>, changed: bool) -> Self {
        let mode = if location.is_local() {
            CommitMode::Local
        } else {
            CommitMode::Remote
        };
        Self {
            mode,
            state: location.state().to_string(),
            local_path: root.join(location.state()),
            serialized,
            changed,
        }
    }

    pub fn mode(&self) -> CommitMode {
        self.mode
    }

    /// Stage the marker into the batch (remote mode, revision changed).
    ///
    /// Returns whether a marker action was appended.
    pub fn stage(&self, work: &WorkArea, actions: &mut Vec<Action>) -> io::Result<bool> {
        if self.mode != CommitMode::Remote || !self.changed {
            return Ok(false);
        }
        work.write(&self.state, &self.serialized)?;
        actions.push(Action::add(self.state.as_str()).with_precedence(Action::MARKER_PRECEDENCE));
        debug!(state = %self.state, "revision marker staged with batch");
        Ok(true)
    }

    /// Write the marker after a successful transfer (local mode).
    ///
    /// Returns whether the local marker was written.
    pub fn finish(&self) -> io::Result<bool> {
        if self.mode != CommitMode::Local {
            return Ok(false);
        }
        atomic_write(&self.local_path, &self.serialized)?;
        debug!(state = %self.local_path.display(), "local revision marker written");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn remote_marker_is_staged_when_changed() {
        let root = tempdir().unwrap();
        let work = WorkArea::new().unwrap();
        let location = Location::new("prod", "ssh://host/srv").with_state("state/rev");
        let commit = RevisionCommit::new(&location, root.path(), b"marker".to_vec(), true);

        let mut actions = vec![Action::add("a.txt")];
        assert!(commit.stage(&work, &mut actions).unwrap());
        assert!(!commit.finish().unwrap());

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].path(), "state/rev");
        assert_eq!(actions[1].precedence(), Action::MARKER_PRECEDENCE);
        assert_eq!(fs::read(work.resolve("state/rev").unwrap()).unwrap(), b"marker");
    }

    #[test]
    fn remote_marker_skipped_when_unchanged() {
        let root = tempdir().unwrap();
        let work = WorkArea::new().unwrap();
        let location = Location::new("prod", "ssh://host/srv");
        let commit = RevisionCommit::new(&location, root.path(), b"marker".to_vec(), false);

        let mut actions = Vec::new();
        assert!(!commit.stage(&work, &mut actions).unwrap());
        assert!(actions.is_empty());
    }

    #[test]
    fn local_marker_written_only_on_finish() {
        let root = tempdir().unwrap();
        let work = WorkArea::new().unwrap();
        let location = Location::new("prod", "file://out").with_local(true);
        let commit = RevisionCommit::new(&location, root.path(), b"marker".to_vec(), true);

        let mut actions = Vec::new();
        assert!(!commit.stage(&work, &mut actions).unwrap());
        assert!(actions.is_empty());
        assert!(!root.path().join(".revsync.rev").exists());

        assert!(commit.finish().unwrap());
        assert_eq!(
            fs::read(root.path().join(".revsync.rev")).unwrap(),
            b"marker"
        );
    }
}
