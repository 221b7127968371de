//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod definition;
pub mod registry;
pub mod revision_store;
pub mod source;
pub mod target;

pub use confirmer::{AssumeNo, AssumeYes, Confirmer};
pub use definition::{Definition, Modification, ModifierError, PassthroughDefinition};
pub use registry::{
    SourceConstructor, SourceDetector, SourceRegistry, TargetConstructor, TargetRegistry,
};
pub use revision_store::{RevisionError, RevisionStore};
pub use source::{Source, SourceError};
pub use target::{Target, TargetError};
