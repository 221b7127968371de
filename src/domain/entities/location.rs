//! Location entity - a named deployment destination

use std::collections::BTreeMap;

/// Free-form per-location or per-source options
pub type Options = BTreeMap<String, toml::Value>;

/// Default path of the revision marker
pub const DEFAULT_STATE_PATH: &str = ".revsync.rev";

/// A named deployment destination
///
/// Immutable for the duration of one deployment run.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    connection: String,
    options: Options,
    local: bool,
    state: String,
    append_files: Vec<String>,
    remove_files: Vec<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, connection: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection: connection.into(),
            options: Options::new(),
            local: false,
            state: DEFAULT_STATE_PATH.to_string(),
            append_files: Vec::new(),
            remove_files: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_append_files(mut self, files: Vec<String>) -> Self {
        self.append_files = files;
        self
    }

    pub fn with_remove_files(mut self, files: Vec<String>) -> Self {
        self.remove_files = files;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connection descriptor (`scheme://address`)
    pub fn connection(&self) -> &str {
        &self.connection
    }

    /// Scheme token of the connection descriptor, if any
    pub fn scheme(&self) -> Option<&str> {
        self.connection
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .filter(|scheme| !scheme.is_empty())
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// String option lookup
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }

    /// Whether the revision marker lives on the local machine
    pub fn is_local(&self) -> bool {
        self.local
    }

    /// Path of the revision marker
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn append_files(&self) -> &[String] {
        &self.append_files
    }

    pub fn remove_files(&self) -> &[String] {
        &self.remove_files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_is_parsed_from_connection() {
        let location = Location::new("prod", "ssh://deploy@host/srv");
        assert_eq!(location.scheme(), Some("ssh"));
    }

    #[test]
    fn connection_without_scheme_has_none() {
        assert_eq!(Location::new("prod", "/srv/www").scheme(), None);
        assert_eq!(Location::new("prod", "://srv").scheme(), None);
    }

    #[test]
    fn defaults() {
        let location = Location::new("prod", "file://out");
        assert!(!location.is_local());
        assert_eq!(location.state(), DEFAULT_STATE_PATH);
        assert!(location.append_files().is_empty());
    }
}
