//! Revision entity - last deployed revision per location
//!
//! A pure data structure; parsing and serialization live in
//! `infrastructure::repositories::revision`.

use std::collections::BTreeMap;

/// Mapping of location name to the last revision deployed there
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Revision {
    entries: BTreeMap<String, String>,
}

impl Revision {
    /// Create an empty revision map (nothing deployed yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the revision deployed to a location
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    /// Record the revision deployed to a location, replacing any previous one
    pub fn set(&mut self, name: impl Into<String>, revision: impl Into<String>) {
        self.entries.insert(name.into(), revision.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries ordered by location name
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Revision {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_absent_name_is_none() {
        let revision = Revision::new();
        assert_eq!(revision.get("production"), None);
    }

    #[test]
    fn set_overwrites_only_named_entry() {
        let mut revision = Revision::new();
        revision.set("production", "A");
        revision.set("staging", "X");
        revision.set("production", "B");

        assert_eq!(revision.get("production"), Some("B"));
        assert_eq!(revision.get("staging"), Some("X"));
        assert_eq!(revision.len(), 2);
    }
}
