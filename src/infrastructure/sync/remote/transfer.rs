//! Remote Transfer Strategy
//!
//! Defines the interface for batch file transfers to remote servers.

use std::path::Path;

use crate::domain::ports::TargetError;
use crate::infrastructure::process::CommandExecutor;

use super::address::RemoteAddress;
use super::rsync::RsyncTransfer;
use super::scp::ScpTransfer;

/// Strategy for transferring files to a remote server
pub trait TransferStrategy {
    /// Get the name of this transfer method (for logging)
    fn name(&self) -> &'static str;

    /// Check if this transfer method is available on the system
    fn is_available(&self, executor: &dyn CommandExecutor, cwd: &Path) -> bool;

    /// Copy the contents of `staging_root` into the remote base directory,
    /// preserving relative paths
    fn transfer(
        &self,
        executor: &dyn CommandExecutor,
        staging_root: &Path,
        remote: &RemoteAddress,
    ) -> Result<(), TargetError>;
}

/// Transfer method selected by the `transfer` location option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferChoice {
    /// rsync when installed, scp otherwise
    #[default]
    Auto,
    Rsync,
    Scp,
}

impl TransferChoice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "rsync" => Some(Self::Rsync),
            "scp" => Some(Self::Scp),
            _ => None,
        }
    }

    /// Resolve to a concrete strategy
    pub fn strategy(
        self,
        executor: &dyn CommandExecutor,
        cwd: &Path,
    ) -> Result<Box<dyn TransferStrategy>, TargetError> {
        match self {
            Self::Rsync => Ok(Box::new(RsyncTransfer)),
            Self::Scp => Ok(Box::new(ScpTransfer)),
            Self::Auto => detect_strategy(executor, cwd).ok_or_else(|| {
                TargetError::NotAvailable(
                    "no transfer method available; install rsync (preferred) or ensure scp is in PATH"
                        .to_string(),
                )
            }),
        }
    }
}

/// Detect and return the best available transfer strategy
pub fn detect_strategy(
    executor: &dyn CommandExecutor,
    cwd: &Path,
) -> Option<Box<dyn TransferStrategy>> {
    // Try rsync first (preferred)
    if RsyncTransfer.is_available(executor, cwd) {
        return Some(Box::new(RsyncTransfer));
    }

    // Fallback to scp (common on Windows)
    if ScpTransfer.is_available(executor, cwd) {
        return Some(Box::new(ScpTransfer));
    }

    None
}
