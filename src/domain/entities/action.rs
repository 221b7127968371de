//! Action entity - a single file-level operation
//!
//! Actions are produced by the source diff and by manual overrides, rewritten
//! by the definition's modifiers, and finally executed by a target in
//! precedence order.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Component, Path};

/// Kind of file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Add or update the file at the destination
    Add,
    /// Delete the file at the destination
    Del,
}

impl ActionKind {
    /// Default precedence of this kind.
    ///
    /// Deletions run before additions so a path can change from file to
    /// directory (or back) within one batch.
    pub fn precedence(self) -> u8 {
        match self {
            ActionKind::Del => 10,
            ActionKind::Add => 20,
        }
    }

    /// Single-character marker used in previews
    pub fn symbol(self) -> char {
        match self {
            ActionKind::Add => '+',
            ActionKind::Del => '-',
        }
    }
}

/// A single file-level operation with a target path
///
/// Paths are relative and always use `/` separators so ordering is stable
/// across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    path: String,
    kind: ActionKind,
    precedence: Option<u8>,
}

impl Action {
    /// Precedence reserved for the revision marker (always sent last)
    pub const MARKER_PRECEDENCE: u8 = u8::MAX;

    pub fn new(path: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            path: normalize_action_path(&path.into()),
            kind,
            precedence: None,
        }
    }

    pub fn add(path: impl Into<String>) -> Self {
        Self::new(path, ActionKind::Add)
    }

    pub fn del(path: impl Into<String>) -> Self {
        Self::new(path, ActionKind::Del)
    }

    /// Override the precedence derived from the action kind
    pub fn with_precedence(mut self, precedence: u8) -> Self {
        self.precedence = Some(precedence);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn is_add(&self) -> bool {
        self.kind == ActionKind::Add
    }

    /// Effective precedence (override if set, otherwise derived from kind)
    pub fn precedence(&self) -> u8 {
        self.precedence.unwrap_or_else(|| self.kind.precedence())
    }

    /// Total ordering key used by the orderer
    pub fn order_key(&self) -> (u8, &str, ActionKind) {
        (self.precedence(), self.path.as_str(), self.kind)
    }
}

impl PartialOrd for ActionKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ActionKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.symbol(), self.path)
    }
}

/// Normalize a relative path for action storage (no `./` prefix).
///
/// On Windows `\` separators become `/`; elsewhere a backslash is an ordinary
/// file name character and is kept.
pub fn normalize_action_path(path: &str) -> String {
    let replaced = if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.to_string()
    };
    let mut trimmed = replaced.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.to_string()
}

/// Whether a relative path stays inside the directory it is joined onto.
///
/// Empty paths, absolute paths and paths with a `..` component are rejected.
pub fn is_contained_path(path: &str) -> bool {
    let path = Path::new(path);
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Convert a filesystem path into an action path.
pub fn action_path_from(path: &Path) -> String {
    normalize_action_path(&path.to_string_lossy())
}
