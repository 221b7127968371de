//! Rsync Transfer Strategy
//!
//! Uses rsync for efficient incremental file transfers.
//! This is the preferred method on Unix systems.

use std::path::Path;

use crate::domain::ports::TargetError;
use crate::infrastructure::process::{display_command, CommandExecutor};

use super::address::RemoteAddress;
use super::transfer::TransferStrategy;

/// Transfer strategy using rsync
pub struct RsyncTransfer;

impl RsyncTransfer {
    fn args(staging_root: &Path, remote: &RemoteAddress) -> Vec<String> {
        let mut args = vec!["-rlptz".to_string()];
        if let Some(port) = remote.port() {
            args.push("-e".to_string());
            args.push(format!("ssh -p {}", port));
        }
        // trailing slash = copy contents
        args.push(format!("{}/", staging_root.display()));
        args.push(format!(
            "{}:{}/",
            remote.destination(),
            remote.base().trim_end_matches('/')
        ));
        args
    }
}

impl TransferStrategy for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn is_available(&self, executor: &dyn CommandExecutor, cwd: &Path) -> bool {
        executor
            .execute("rsync", &["--version".to_string()], cwd)
            .map(|result| result.success)
            .unwrap_or(false)
    }

    fn transfer(
        &self,
        executor: &dyn CommandExecutor,
        staging_root: &Path,
        remote: &RemoteAddress,
    ) -> Result<(), TargetError> {
        let args = Self::args(staging_root, remote);
        let result = executor
            .execute("rsync", &args, staging_root)
            .map_err(|e| TargetError::Connection(e.to_string()))?;

        if !result.success {
            return Err(TargetError::CommandFailed(format!(
                "`{}` exited with code {:?}: {}",
                display_command("rsync", &args),
                result.code,
                result.failure_message()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::process::testing::ScriptedExecutor;

    #[test]
    fn rsync_transfer_name() {
        assert_eq!(RsyncTransfer.name(), "rsync");
    }

    #[test]
    fn rsync_copies_staging_contents() {
        let executor = ScriptedExecutor::new();
        executor.push_ok("");
        let remote = RemoteAddress::parse("ssh://deploy@example.com:2222/srv/www").unwrap();

        RsyncTransfer
            .transfer(&executor, Path::new("/tmp/stage"), &remote)
            .unwrap();

        let calls = executor.calls();
        assert_eq!(calls[0].program, "rsync");
        assert_eq!(
            calls[0].args,
            vec![
                "-rlptz",
                "-e",
                "ssh -p 2222",
                "/tmp/stage/",
                "deploy@example.com:/srv/www/"
            ]
        );
    }

    #[test]
    fn rsync_failure_is_reported() {
        let executor = ScriptedExecutor::new();
        executor.push_failure(12, "connection unexpectedly closed");
        let remote = RemoteAddress::parse("ssh://host/srv").unwrap();

        let result = RsyncTransfer.transfer(&executor, Path::new("/tmp/stage"), &remote);

        assert!(matches!(result, Err(TargetError::CommandFailed(_))));
    }
}
