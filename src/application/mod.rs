//! Application Layer
//!
//! Use cases that sequence the domain ports. No I/O happens here directly;
//! every side effect goes through a port passed in by the caller.
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - One deployment run (resolve, diff, modify, order, send, commit)
//! - `StatusUseCase` - Compare the deployed revision with the source's current one

pub mod deploy;
mod resolve;
pub mod status;

pub use deploy::{DeployOptions, DeployOutcome, DeployUseCase};
pub use status::{LocationStatus, StatusUseCase};
