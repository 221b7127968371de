//! Domain Entities
//!
//! Plain data that flows through the deployment pipeline.

mod action;
mod environment;
mod location;
mod revision;

pub use action::{action_path_from, is_contained_path, normalize_action_path, Action, ActionKind};
pub use environment::Environment;
pub use location::{Location, Options, DEFAULT_STATE_PATH};
pub use revision::Revision;
