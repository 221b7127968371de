//! Scoped work area
//!
//! A temporary directory owned by a single deployment run. All materialized
//! file content lives here; the directory is removed when the value is
//! dropped, on every exit path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::infrastructure::fs::contained_join;

/// Temporary directory holding materialized content for one run
#[derive(Debug)]
pub struct WorkArea {
    dir: TempDir,
}

impl WorkArea {
    /// Create a fresh, empty work area
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("revsync-").tempdir()?;
        Ok(Self { dir })
    }

    /// Root directory of the work area
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute location of a relative path inside the work area
    ///
    /// Absolute paths and paths climbing out with `..` are rejected.
    pub fn resolve(&self, relative: &str) -> io::Result<PathBuf> {
        contained_join(self.dir.path(), relative)
    }

    /// Write content at a relative path, creating parent directories
    pub fn write(&self, relative: &str, content: &[u8]) -> io::Result<()> {
        let target = self.resolve(relative)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, content)
    }

    /// Copy a file into the work area at a relative path
    pub fn duplicate(&self, source: &Path, relative: &str) -> io::Result<()> {
        let target = self.resolve(relative)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, target).map(|_| ())
    }

    /// Remove the materialized copy of a relative path, if any
    pub fn remove(&self, relative: &str) -> io::Result<()> {
        match fs::remove_file(self.resolve(relative)?) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
