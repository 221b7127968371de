//! TOML Revision Store
//!
//! Implements the RevisionStore port using TOML format:
//!
//! ```toml
//! version = 1
//!
//! [revisions]
//! production = "9f2c1e0"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::entities::Revision;
use crate::domain::ports::{RevisionError, RevisionStore};

/// Current marker format version
pub const REVISION_FORMAT_VERSION: u32 = 1;

/// TOML-based revision marker encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlRevisionStore;

impl TomlRevisionStore {
    pub fn new() -> Self {
        Self
    }
}

/// TOML representation of the marker
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRevision {
    version: u32,
    #[serde(default)]
    revisions: BTreeMap<String, String>,
}

impl RevisionStore for TomlRevisionStore {
    fn parse(&self, data: &[u8]) -> Result<Revision, RevisionError> {
        let content = std::str::from_utf8(data)
            .map_err(|e| RevisionError::InvalidFormat(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Revision::new());
        }

        let parsed: TomlRevision =
            toml::from_str(content).map_err(|e| RevisionError::InvalidFormat(e.to_string()))?;
        if parsed.version != REVISION_FORMAT_VERSION {
            return Err(RevisionError::VersionMismatch {
                found: parsed.version,
                expected: REVISION_FORMAT_VERSION,
            });
        }

        Ok(parsed.revisions.into_iter().collect())
    }

    fn serialize(&self, revision: &Revision) -> Vec<u8> {
        let revisions: toml::Table = revision
            .entries()
            .map(|(name, rev)| (name.to_string(), toml::Value::String(rev.to_string())))
            .collect();

        let mut document = toml::Table::new();
        document.insert(
            "version".to_string(),
            toml::Value::Integer(i64::from(REVISION_FORMAT_VERSION)),
        );
        document.insert("revisions".to_string(), toml::Value::Table(revisions));
        document.to_string().into_bytes()
    }
}
