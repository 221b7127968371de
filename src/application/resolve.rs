//! Resolution steps shared by the use cases
//!
//! Each step fails with a `DeployError` before anything is written.

use std::path::Path;

use crate::domain::entities::{Environment, Location, Revision};
use crate::domain::ports::{
    Definition, RevisionStore, Source, SourceRegistry, Target, TargetRegistry,
};
use crate::error::DeployError;
use crate::infrastructure::fs::read_optional;

pub(crate) fn resolve_location<'e>(
    environment: &'e Environment,
    name: &str,
) -> Result<&'e Location, DeployError> {
    environment
        .get_location(name)
        .ok_or_else(|| DeployError::UnknownLocation(name.to_string()))
}

pub(crate) fn create_target(
    targets: &TargetRegistry,
    location: &Location,
) -> Result<Box<dyn Target>, DeployError> {
    match targets.create(location) {
        None => Err(DeployError::UnsupportedScheme {
            connection: location.connection().to_string(),
        }),
        Some(created) => created.map_err(|source| DeployError::TargetSetup {
            location: location.name().to_string(),
            source,
        }),
    }
}

/// Load the revision marker of a location
///
/// Remote markers are read through the target; local ones from `root`.
/// A missing marker is an empty revision map.
pub(crate) fn load_revision(
    store: &dyn RevisionStore,
    location: &Location,
    root: &Path,
    target: &dyn Target,
) -> Result<Revision, DeployError> {
    let state = location.state();
    let unreadable = |message: String| DeployError::RevisionUnreadable {
        state: state.to_string(),
        message,
    };

    let data = if location.is_local() {
        read_optional(&root.join(state)).map_err(|e| unreadable(e.to_string()))?
    } else {
        target.read(state).map_err(|e| unreadable(e.to_string()))?
    };

    store
        .parse(data.as_deref().unwrap_or_default())
        .map_err(|source| DeployError::RevisionParse {
            state: state.to_string(),
            source,
        })
}

pub(crate) fn create_source(
    sources: &SourceRegistry,
    definition: &dyn Definition,
    root: &Path,
) -> Result<Box<dyn Source>, DeployError> {
    let explicit = definition.source_type();
    let source_type = sources.resolve_type(explicit, root).ok_or_else(|| {
        DeployError::UnknownSource(explicit.unwrap_or("(not detected)").to_string())
    })?;
    sources
        .create(source_type, root, definition.source_options())
        .ok_or_else(|| DeployError::UnknownSource(source_type.to_string()))?
        .map_err(DeployError::SourceUnavailable)
}
