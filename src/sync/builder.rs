//! Candidate action builder
//!
//! Merges the source diff with manually specified files. Appended files are
//! copied into the work area so later stages treat manual and diffed actions
//! the same way.

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::domain::entities::{action_path_from, is_contained_path, Action};

use super::work_area::WorkArea;

/// Manually specified files for one run
#[derive(Debug, Clone, Copy)]
pub struct ManualFiles<'a> {
    pub append: &'a [String],
    pub remove: &'a [String],
}

/// Ordered candidate actions plus the manual paths that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub actions: Vec<Action>,
    /// Append paths that do not exist
    pub missing: Vec<String>,
    /// Absolute paths or paths leaving the root with `..`
    pub rejected: Vec<String>,
}

/// Build the combined candidate list: `diff` followed by manual actions.
///
/// Manual paths are relative to `root`. Directories expand to every file
/// they contain. Missing append paths are skipped with a warning; remove
/// paths always produce at least one DEL, whether or not they exist.
/// Entries that are absolute or climb out of `root` are skipped with a
/// warning and never reach the work area or a target.
pub fn build_candidates(
    root: &Path,
    work: &WorkArea,
    diff: Vec<Action>,
    manual: &[ManualFiles<'_>],
) -> io::Result<Candidates> {
    let mut candidates = Candidates {
        actions: diff,
        ..Candidates::default()
    };

    let mut appended = Vec::new();
    for entry in manual.iter().flat_map(|m| m.append.iter()) {
        if !is_contained_path(entry) {
            warn!(path = %entry, "can't append path outside the source root");
            candidates.rejected.push(entry.clone());
            continue;
        }
        let absolute = root.join(entry);
        if absolute.is_dir() {
            for file in walk_files(&absolute)? {
                appended.push(Action::add(relative_to(root, &file)));
            }
        } else if absolute.is_file() {
            appended.push(Action::add(entry.as_str()));
        } else {
            warn!(path = %entry, "can't append missing file");
            candidates.missing.push(entry.clone());
        }
    }

    for action in &appended {
        work.duplicate(&root.join(action.path()), action.path())?;
    }
    debug!(count = appended.len(), "manual files appended");
    candidates.actions.extend(appended);

    for entry in manual.iter().flat_map(|m| m.remove.iter()) {
        if !is_contained_path(entry) {
            warn!(path = %entry, "can't remove path outside the deployment root");
            candidates.rejected.push(entry.clone());
            continue;
        }
        let absolute = root.join(entry);
        if absolute.is_dir() {
            for file in walk_files(&absolute)? {
                candidates.actions.push(Action::del(relative_to(root, &file)));
            }
        } else {
            candidates.actions.push(Action::del(entry.as_str()));
        }
    }

    Ok(candidates)
}

/// Every regular file below `dir`, in sorted walk order.
fn walk_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let message = e.to_string();
            e.into_io_error()
                .unwrap_or_else(|| io::Error::other(message))
        })?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn relative_to(root: &Path, path: &Path) -> String {
    action_path_from(path.strip_prefix(root).unwrap_or(path))
}
