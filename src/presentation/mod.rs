//! Presentation Layer
//!
//! Builds the concrete backends the binary hands to the use cases.
//!
//! ## Usage
//!
//! ```ignore
//! use revsync::presentation::factory;
//!
//! let targets = factory::default_targets();
//! let sources = factory::default_sources();
//! ```

pub mod factory;

pub use factory::{default_sources, default_targets};
