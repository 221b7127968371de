//! Status Use Case
//!
//! Reports, for one location, the revision last deployed there and the
//! revision the source currently points at. Nothing is written.

use std::path::Path;

use crate::domain::entities::Environment;
use crate::domain::ports::{Definition, RevisionStore, SourceRegistry, TargetRegistry};
use crate::error::DeployError;

use super::resolve::{create_source, create_target, load_revision, resolve_location};

/// Deployment state of one location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationStatus {
    pub location: String,
    pub connection: String,
    /// Revision recorded in the marker, `None` if never deployed
    pub deployed: Option<String>,
    /// Revision the source reports as current
    pub current: Option<String>,
}

impl LocationStatus {
    /// Whether a deploy would have source changes to send
    pub fn is_behind(&self) -> bool {
        self.current.is_some() && self.deployed != self.current
    }
}

pub struct StatusUseCase<'a> {
    environment: &'a Environment,
    definition: &'a dyn Definition,
    targets: &'a TargetRegistry,
    sources: &'a SourceRegistry,
    revisions: &'a dyn RevisionStore,
}

impl<'a> StatusUseCase<'a> {
    pub fn new(
        environment: &'a Environment,
        definition: &'a dyn Definition,
        targets: &'a TargetRegistry,
        sources: &'a SourceRegistry,
        revisions: &'a dyn RevisionStore,
    ) -> Self {
        Self {
            environment,
            definition,
            targets,
            sources,
            revisions,
        }
    }

    pub fn run(&self, name: &str, root: &Path) -> Result<LocationStatus, DeployError> {
        let location = resolve_location(self.environment, name)?;
        let target = create_target(self.targets, location)?;
        let revision = load_revision(self.revisions, location, root, target.as_ref())?;
        let source = create_source(self.sources, self.definition, root)?;

        Ok(LocationStatus {
            location: location.name().to_string(),
            connection: location.connection().to_string(),
            deployed: revision.get(location.name()).map(str::to_string),
            current: source.current()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(deployed: Option<&str>, current: Option<&str>) -> LocationStatus {
        LocationStatus {
            location: "prod".to_string(),
            connection: "file://out".to_string(),
            deployed: deployed.map(str::to_string),
            current: current.map(str::to_string),
        }
    }

    #[test]
    fn behind_when_revisions_differ() {
        assert!(status(Some("A"), Some("B")).is_behind());
        assert!(status(None, Some("B")).is_behind());
    }

    #[test]
    fn not_behind_when_up_to_date_or_source_empty() {
        assert!(!status(Some("B"), Some("B")).is_behind());
        assert!(!status(Some("A"), None).is_behind());
    }
}
