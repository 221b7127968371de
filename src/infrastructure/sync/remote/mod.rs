//! Remote Target
//!
//! Implements the Target port for remote servers via SSH.
//! Deletions run as one `ssh rm -f` per batch segment; additions are staged
//! and pushed with a pluggable transfer strategy (rsync preferred, scp
//! fallback).

mod address;
mod rsync;
mod scp;
mod transfer;

pub use address::{RemoteAddress, SSH_SCHEME};
pub use rsync::RsyncTransfer;
pub use scp::ScpTransfer;
pub use transfer::{detect_strategy, TransferChoice, TransferStrategy};

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::{is_contained_path, Action, ActionKind, Location};
use crate::domain::ports::{Target, TargetError};
use crate::infrastructure::fs::contained_join;
use crate::infrastructure::process::{
    shell_quote, CommandExecutor, CommandResult, ProcessCommandExecutor,
};

/// Target for a remote server
pub struct RemoteTarget<E = ProcessCommandExecutor> {
    address: RemoteAddress,
    transfer: TransferChoice,
    executor: E,
}

impl RemoteTarget<ProcessCommandExecutor> {
    /// Build from an `ssh://` location; the `transfer` option picks the
    /// transfer method
    pub fn from_location(location: &Location) -> Result<Self, TargetError> {
        Self::from_location_with_executor(location, ProcessCommandExecutor)
    }
}

impl<E: CommandExecutor> RemoteTarget<E> {
    pub fn new(address: RemoteAddress, transfer: TransferChoice, executor: E) -> Self {
        Self {
            address,
            transfer,
            executor,
        }
    }

    pub fn from_location_with_executor(
        location: &Location,
        executor: E,
    ) -> Result<Self, TargetError> {
        let address = RemoteAddress::parse(location.connection())?;
        let transfer = match location.option_str("transfer") {
            None => TransferChoice::Auto,
            Some(value) => {
                TransferChoice::parse(value).ok_or_else(|| TargetError::InvalidConnection {
                    connection: location.connection().to_string(),
                    message: format!("unknown transfer method '{}'", value),
                })?
            }
        };
        Ok(Self::new(address, transfer, executor))
    }

    pub fn address(&self) -> &RemoteAddress {
        &self.address
    }

    fn ssh(&self, command: String, cwd: &Path) -> Result<CommandResult, TargetError> {
        let args = self.address.ssh_args(command);
        self.executor
            .execute("ssh", &args, cwd)
            .map_err(|e| TargetError::Connection(e.to_string()))
    }

    fn remote_path(&self, path: &str) -> Result<String, TargetError> {
        if !is_contained_path(path) {
            return Err(TargetError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path '{}' escapes {}", path, self.address),
            )));
        }
        Ok(shell_quote(&self.address.path_of(path)))
    }

    fn delete_all(&self, work: &Path, actions: &[Action]) -> Result<(), TargetError> {
        let paths = actions
            .iter()
            .map(|action| self.remote_path(action.path()))
            .collect::<Result<Vec<_>, _>>()?;
        let result = self.ssh(format!("rm -f {}", paths.join(" ")), work)?;
        if !result.success {
            return Err(TargetError::CommandFailed(format!(
                "remote delete failed: {}",
                result.failure_message()
            )));
        }
        debug!(count = actions.len(), remote = %self.address, "deleted");
        Ok(())
    }

    fn add_all(
        &self,
        work: &Path,
        actions: &[Action],
        strategy: &dyn TransferStrategy,
    ) -> Result<(), TargetError> {
        let staging = tempfile::Builder::new().prefix("revsync-stage-").tempdir()?;
        for action in actions {
            let staged = contained_join(staging.path(), action.path())?;
            if let Some(parent) = staged.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(contained_join(work, action.path())?, &staged)?;
        }
        strategy.transfer(&self.executor, staging.path(), &self.address)?;
        debug!(
            count = actions.len(),
            remote = %self.address,
            method = strategy.name(),
            "transferred"
        );
        Ok(())
    }
}

impl<E: CommandExecutor> Target for RemoteTarget<E> {
    fn display_name(&self) -> String {
        self.address.to_string()
    }

    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, TargetError> {
        let remote_file = self.remote_path(path)?;
        let cwd = std::env::temp_dir();

        let test = self.ssh(format!("test -f {}", remote_file), &cwd)?;
        if !test.success {
            // `test` exits 1 for a missing file; ssh itself fails with 255
            if test.code == Some(1) {
                return Ok(None);
            }
            return Err(TargetError::Connection(test.failure_message()));
        }

        let cat = self.ssh(format!("cat {}", remote_file), &cwd)?;
        if !cat.success {
            return Err(TargetError::CommandFailed(format!(
                "failed to read {}: {}",
                path,
                cat.failure_message()
            )));
        }
        Ok(Some(cat.stdout))
    }

    fn send(&self, work: &Path, actions: &[Action]) -> Result<(), TargetError> {
        // Refuse the whole batch before any remote command runs
        for action in actions {
            self.remote_path(action.path())?;
        }

        let strategy = if actions.iter().any(Action::is_add) {
            Some(self.transfer.strategy(&self.executor, work)?)
        } else {
            None
        };

        // Segments of equal (precedence, kind) keep the batch order across calls
        for segment in
            actions.chunk_by(|a, b| a.precedence() == b.precedence() && a.kind() == b.kind())
        {
            match segment[0].kind() {
                ActionKind::Del => self.delete_all(work, segment)?,
                ActionKind::Add => {
                    let strategy = strategy.as_deref().ok_or_else(|| {
                        TargetError::NotAvailable("no transfer method resolved".to_string())
                    })?;
                    self.add_all(work, segment, strategy)?;
                }
            }
        }
        info!(count = actions.len(), remote = %self.address, "remote batch sent");
        Ok(())
    }
}
