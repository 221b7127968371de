//! Local directory target (`file://PATH`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{Action, ActionKind, Location};
use crate::domain::ports::{Target, TargetError};
use crate::infrastructure::fs::{contained_join, read_optional};

/// Connection scheme handled by `LocalTarget`
pub const FILE_SCHEME: &str = "file";

/// Target that mirrors actions into a local directory
#[derive(Debug, Clone)]
pub struct LocalTarget {
    root: PathBuf,
}

impl LocalTarget {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build from a `file://PATH` connection; relative paths resolve
    /// against the current directory
    pub fn from_location(location: &Location) -> Result<Self, TargetError> {
        let connection = location.connection();
        let path = connection
            .strip_prefix("file://")
            .filter(|path| !path.is_empty())
            .ok_or_else(|| TargetError::InvalidConnection {
                connection: connection.to_string(),
                message: "expected file://PATH".to_string(),
            })?;
        Ok(Self::new(path))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn add(&self, work: &Path, path: &str) -> io::Result<()> {
        let target = contained_join(&self.root, path)?;
        let source = contained_join(work, path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &target)?;
        Ok(())
    }

    fn delete(&self, path: &str) -> io::Result<()> {
        let target = contained_join(&self.root, path)?;
        match fs::remove_file(&target) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        }
        self.prune_empty_parents(&target);
        Ok(())
    }

    /// Remove now-empty directories between a deleted file and the root
    fn prune_empty_parents(&self, deleted: &Path) {
        let mut current = deleted.parent();
        while let Some(dir) = current {
            if dir == self.root || !dir.starts_with(&self.root) {
                break;
            }
            // fails on non-empty directories, which ends the walk
            if fs::remove_dir(dir).is_err() {
                break;
            }
            current = dir.parent();
        }
    }
}

impl Target for LocalTarget {
    fn display_name(&self) -> String {
        self.root.display().to_string()
    }

    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, TargetError> {
        Ok(read_optional(&contained_join(&self.root, path)?)?)
    }

    fn send(&self, work: &Path, actions: &[Action]) -> Result<(), TargetError> {
        for action in actions {
            match action.kind() {
                ActionKind::Add => self.add(work, action.path())?,
                ActionKind::Del => self.delete(action.path())?,
            }
            debug!(action = %action, root = %self.root.display(), "applied");
        }
        Ok(())
    }
}
