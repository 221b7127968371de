//! revsync - revision-aware deployment of a source tree
//!
//! revsync compares the revision last deployed to a location with the
//! source's current revision, turns the difference into an ordered batch of
//! file actions, rewrites it through the configured modifier rules and sends
//! it to a local directory or an SSH host. The deployed revision is recorded
//! in a marker file that travels with the batch.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod sync;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployUseCase, LocationStatus, StatusUseCase};
pub use config::{Config, ConfigWarning, CONFIG_FILE_NAME};
pub use domain::entities::{Action, ActionKind, Environment, Location, Revision};
pub use error::{DeployError, RevsyncError, RevsyncResult};
