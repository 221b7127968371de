//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `confirm/` - Terminal confirmer
//! - `definition/` - Rule-based definition
//! - `fs/` - Atomic local file helpers
//! - `process` - External command execution
//! - `repositories/` - Revision marker encoding
//! - `source/` - Source implementations (git)
//! - `sync/` - Target implementations (local, remote, console)

pub mod confirm;
pub mod definition;
pub mod fs;
pub mod process;
pub mod repositories;
pub mod source;
pub mod sync;

// Re-export for convenience
pub use confirm::TerminalConfirmer;
pub use definition::RuleDefinition;
pub use repositories::TomlRevisionStore;
pub use source::GitSource;
pub use sync::{ConsoleTarget, LocalTarget, RemoteTarget};
