//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod revision;

pub use revision::{TomlRevisionStore, REVISION_FORMAT_VERSION};
