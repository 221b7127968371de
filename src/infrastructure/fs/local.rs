//! Local file helpers
//!
//! Atomic writes, contained joins and "read if present" used by the work
//! area, the revision marker and the local directory target.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::is_contained_path;

/// Write content to a file atomically (temp file in the same directory + rename)
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Join a relative action path onto a directory
///
/// Fails with `InvalidInput` for absolute paths and paths that climb out of
/// `root`, so no caller can read or write outside it.
pub fn contained_join(root: &Path, relative: &str) -> io::Result<PathBuf> {
    if !is_contained_path(relative) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path '{}' escapes {}", relative, root.display()),
        ));
    }
    Ok(root.join(relative))
}

/// Read a file, returning `None` if it does not exist
pub fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/test.txt");

        atomic_write(&path, b"Hello, World!").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello, World!");
    }

    #[test]
    fn atomic_write_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");

        fs::write(&path, "Original").unwrap();
        atomic_write(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn contained_join_stays_below_root() {
        let dir = tempdir().unwrap();
        assert_eq!(
            contained_join(dir.path(), "a/b.txt").unwrap(),
            dir.path().join("a/b.txt")
        );
    }

    #[test]
    fn contained_join_rejects_escaping_paths() {
        let dir = tempdir().unwrap();
        for path in ["/etc/passwd", "../x", "a/../../x", ""] {
            let err = contained_join(dir.path(), path).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{}", path);
        }
    }

    #[test]
    fn read_optional_missing_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(read_optional(&dir.path().join("absent")).unwrap(), None);
    }

    #[test]
    fn read_optional_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("present");
        fs::write(&path, "data").unwrap();

        assert_eq!(read_optional(&path).unwrap(), Some(b"data".to_vec()));
    }
}
