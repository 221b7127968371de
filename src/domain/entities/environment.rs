//! Environment entity - the set of configured locations

use std::collections::BTreeMap;

use super::location::Location;

/// Configured deployment locations, looked up by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    locations: BTreeMap<String, Location>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location, replacing any location with the same name
    pub fn insert(&mut self, location: Location) {
        self.locations
            .insert(location.name().to_string(), location);
    }

    pub fn get_location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Locations sorted by name
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromIterator<Location> for Environment {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut environment = Self::new();
        for location in iter {
            environment.insert(location);
        }
        environment
    }
}
