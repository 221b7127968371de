//! Modifier pass
//!
//! Runs every candidate action through the definition, threading one seen-set
//! across all calls of a single run.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::Action;
use crate::domain::ports::{Definition, ModifierError};

use super::work_area::WorkArea;

/// Result of the modifier pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modified {
    /// Final (unordered) action list
    pub actions: Vec<Action>,
    /// Paths cancelled by modifiers, in the order they were reported
    pub cancelled: Vec<String>,
}

/// Apply the definition to every candidate in order.
///
/// Cancelled paths have their work-area copies removed once all candidates
/// are processed, and any ADD for a cancelled path is dropped from the final
/// list since its content no longer exists. DEL actions are never filtered.
pub fn apply_modifiers(
    definition: &dyn Definition,
    work: &WorkArea,
    candidates: &[Action],
) -> Result<Modified, ModifierError> {
    let mut seen = HashSet::new();
    let mut modified = Modified::default();

    for candidate in candidates {
        let modification = definition.apply(work.path(), candidate, &mut seen)?;
        if modification.actions.is_empty() {
            debug!(action = %candidate, "no output from modifiers");
        }
        modified.actions.extend(modification.actions);
        modified.cancelled.extend(modification.cancels);
    }

    for path in &modified.cancelled {
        work.remove(path).map_err(|source| ModifierError::Io {
            path: path.clone(),
            source,
        })?;
    }

    let cancelled: HashSet<&str> = modified.cancelled.iter().map(|s| s.as_str()).collect();
    modified
        .actions
        .retain(|action| !(action.is_add() && cancelled.contains(action.path())));

    Ok(modified)
}
