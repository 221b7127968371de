//! SCP Transfer Strategy
//!
//! Uses scp for file transfers to remote servers.
//! This is the fallback method when rsync is not available,
//! particularly on Windows systems with OpenSSH.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::TargetError;
use crate::infrastructure::process::{display_command, shell_quote, CommandExecutor};

use super::address::RemoteAddress;
use super::transfer::TransferStrategy;

/// Transfer strategy using scp
///
/// Unlike rsync, scp doesn't create remote directories, so they are
/// created with `ssh mkdir -p` first.
pub struct ScpTransfer;

impl ScpTransfer {
    /// Remote directories (relative) that must exist before copying
    fn parent_dirs(staging_root: &Path) -> BTreeSet<PathBuf> {
        WalkBuilder::new(staging_root)
            .standard_filters(false)
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .filter_map(|entry| {
                entry
                    .path()
                    .parent()
                    .and_then(|parent| parent.strip_prefix(staging_root).ok())
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .collect()
    }

    fn create_remote_dirs(
        executor: &dyn CommandExecutor,
        staging_root: &Path,
        remote: &RemoteAddress,
    ) -> Result<(), TargetError> {
        let mut dirs = vec![shell_quote(remote.base())];
        dirs.extend(
            Self::parent_dirs(staging_root)
                .iter()
                .map(|dir| shell_quote(&remote.path_of(&dir.to_string_lossy()))),
        );

        let args = remote.ssh_args(format!("mkdir -p {}", dirs.join(" ")));
        let result = executor
            .execute("ssh", &args, staging_root)
            .map_err(|e| TargetError::Connection(e.to_string()))?;
        if !result.success {
            return Err(TargetError::CommandFailed(format!(
                "failed to create remote directories: {}",
                result.failure_message()
            )));
        }
        Ok(())
    }
}

impl TransferStrategy for ScpTransfer {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn is_available(&self, executor: &dyn CommandExecutor, cwd: &Path) -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        executor.execute("scp", &[], cwd).is_ok()
    }

    fn transfer(
        &self,
        executor: &dyn CommandExecutor,
        staging_root: &Path,
        remote: &RemoteAddress,
    ) -> Result<(), TargetError> {
        let mut entries: Vec<PathBuf> = fs::read_dir(staging_root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        if entries.is_empty() {
            return Ok(());
        }
        entries.sort();

        Self::create_remote_dirs(executor, staging_root, remote)?;

        let mut args = vec!["-r".to_string(), "-p".to_string()];
        if let Some(port) = remote.port() {
            args.push("-P".to_string());
            args.push(port.to_string());
        }
        args.extend(entries.iter().map(|entry| entry.display().to_string()));
        args.push(format!(
            "{}:{}/",
            remote.destination(),
            remote.base().trim_end_matches('/')
        ));

        let result = executor
            .execute("scp", &args, staging_root)
            .map_err(|e| TargetError::Connection(e.to_string()))?;
        if !result.success {
            return Err(TargetError::CommandFailed(format!(
                "`{}` exited with code {:?}: {}",
                display_command("scp", &args),
                result.code,
                result.failure_message()
            )));
        }
        Ok(())
    }
}
