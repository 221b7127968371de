//! Target Implementations
//!
//! Concrete implementations of the Target port:
//! - LocalTarget: local directory (`file://`)
//! - RemoteTarget: remote server via SSH (with pluggable transfer strategy)
//! - ConsoleTarget: preview of a batch on the terminal

mod console;
mod local;
mod remote;

pub use console::ConsoleTarget;
pub use local::{LocalTarget, FILE_SCHEME};
pub use remote::{
    detect_strategy, RemoteAddress, RemoteTarget, RsyncTransfer, ScpTransfer, TransferChoice,
    TransferStrategy, SSH_SCHEME,
};
