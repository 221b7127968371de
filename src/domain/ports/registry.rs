//! Backend Registries
//!
//! Map a scheme token (targets) or source type token (sources) to a
//! constructor. Adding a backend means registering a constructor.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::entities::{Location, Options};

use super::source::{Source, SourceError};
use super::target::{Target, TargetError};

/// Builds a target for a location
pub type TargetConstructor = Box<dyn Fn(&Location) -> Result<Box<dyn Target>, TargetError>>;

/// Builds a source rooted at a directory
pub type SourceConstructor = Box<dyn Fn(&Path, &Options) -> Result<Box<dyn Source>, SourceError>>;

/// Detects whether a directory holds a repository of some source type
pub type SourceDetector = fn(&Path) -> bool;

/// Registry of target constructors keyed by connection scheme
#[derive(Default)]
pub struct TargetRegistry {
    constructors: BTreeMap<String, TargetConstructor>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for a scheme, replacing any previous one
    pub fn register<F>(&mut self, scheme: impl Into<String>, constructor: F)
    where
        F: Fn(&Location) -> Result<Box<dyn Target>, TargetError> + 'static,
    {
        self.constructors
            .insert(scheme.into(), Box::new(constructor));
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(|s| s.as_str())
    }

    /// Build the target for a location
    ///
    /// Returns `None` when the location's scheme is not registered.
    pub fn create(&self, location: &Location) -> Option<Result<Box<dyn Target>, TargetError>> {
        let constructor = self.constructors.get(location.scheme()?)?;
        Some(constructor(location))
    }
}

struct SourceEntry {
    detect: Option<SourceDetector>,
    constructor: SourceConstructor,
}

/// Registry of source constructors keyed by source type
#[derive(Default)]
pub struct SourceRegistry {
    entries: BTreeMap<String, SourceEntry>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for a source type
    ///
    /// `detect`, when given, lets the type be chosen automatically for
    /// directories where no type is configured.
    pub fn register<F>(
        &mut self,
        source_type: impl Into<String>,
        detect: Option<SourceDetector>,
        constructor: F,
    ) where
        F: Fn(&Path, &Options) -> Result<Box<dyn Source>, SourceError> + 'static,
    {
        self.entries.insert(
            source_type.into(),
            SourceEntry {
                detect,
                constructor: Box::new(constructor),
            },
        );
    }

    /// Resolve the source type for a directory
    pub fn resolve_type<'a>(&'a self, explicit: Option<&'a str>, root: &Path) -> Option<&'a str> {
        if let Some(explicit) = explicit {
            return self
                .entries
                .contains_key(explicit)
                .then_some(explicit);
        }
        self.entries
            .iter()
            .find(|(_, entry)| entry.detect.is_some_and(|detect| detect(root)))
            .map(|(name, _)| name.as_str())
    }

    /// Build a source of the given type
    pub fn create(
        &self,
        source_type: &str,
        root: &Path,
        options: &Options,
    ) -> Option<Result<Box<dyn Source>, SourceError>> {
        let entry = self.entries.get(source_type)?;
        Some((entry.constructor)(root, options))
    }
}
