//! Backend Factory
//!
//! Wires the built-in targets and sources into registries. This is the
//! dependency injection point for the binary; tests build their own
//! registries instead.

use crate::domain::ports::{Source, SourceDetector, SourceRegistry, Target, TargetRegistry};
use crate::infrastructure::source::{detect_git, GitSource, GIT_SOURCE_TYPE};
use crate::infrastructure::sync::{LocalTarget, RemoteTarget, FILE_SCHEME, SSH_SCHEME};

/// Targets for `file://` and `ssh://` connections
pub fn default_targets() -> TargetRegistry {
    let mut targets = TargetRegistry::new();
    targets.register(FILE_SCHEME, |location| {
        Ok(Box::new(LocalTarget::from_location(location)?) as Box<dyn Target>)
    });
    targets.register(SSH_SCHEME, |location| {
        Ok(Box::new(RemoteTarget::from_location(location)?) as Box<dyn Target>)
    });
    targets
}

/// Sources available for auto-detection or explicit `source.type`
pub fn default_sources() -> SourceRegistry {
    let mut sources = SourceRegistry::new();
    sources.register(
        GIT_SOURCE_TYPE,
        Some(detect_git as SourceDetector),
        |root, _options| Ok(Box::new(GitSource::new(root)) as Box<dyn Source>),
    );
    sources
}
