//! File System Helpers
//!
//! Local file operations shared by the revision commit and the local target.

mod local;

pub use local::{atomic_write, contained_join, read_optional};
