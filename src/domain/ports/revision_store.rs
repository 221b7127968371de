//! RevisionStore port - abstraction for revision marker encoding
//!
//! Lets the pipeline load and persist revision markers without knowing the
//! on-disk format.

use thiserror::Error;

use crate::domain::entities::Revision;

/// Revision marker decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevisionError {
    /// Marker content is not a valid revision file
    #[error("invalid revision file: {0}")]
    InvalidFormat(String),

    /// Marker was written by an incompatible format version
    #[error("unsupported revision file version {found} (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Encoding of the persisted revision marker
///
/// Implementations must satisfy `parse(serialize(r)) == r`.
pub trait RevisionStore {
    /// Decode marker content; empty content is an empty revision map
    fn parse(&self, data: &[u8]) -> Result<Revision, RevisionError>;

    /// Encode a revision map
    fn serialize(&self, revision: &Revision) -> Vec<u8>;
}
