//! Source Implementations
//!
//! Concrete implementations of the Source port.

mod git;

pub use git::{detect_git, GitSource, GIT_SOURCE_TYPE};
