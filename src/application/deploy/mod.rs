//! Deploy Module
//!
//! Orchestrates one deployment run to a named location.
//!
//! ## Structure
//!
//! - `options` - Per-run parameters (`DeployOptions`)
//! - `result` - Outcome of a successful run (`DeployOutcome`)
//! - `use_case` - Pipeline sequencing (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use revsync::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(&environment, &definition, &targets, &sources, &store, &confirmer, &preview);
//! let ok = use_case.execute(&DeployOptions::new("production"));
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployOutcome;
pub use use_case::DeployUseCase;
