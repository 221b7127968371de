//! External command execution
//!
//! Sources and targets drive `git`, `ssh`, `rsync` and `scp` through the
//! `CommandExecutor` trait so tests can substitute scripted results.

use std::io;
use std::path::Path;
use std::process::Command;

/// Outcome of one finished command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl CommandResult {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Error text: stderr, falling back to stdout when stderr is empty
    pub fn failure_message(&self) -> String {
        if self.stderr.trim().is_empty() {
            self.stdout_lossy().trim().to_string()
        } else {
            self.stderr.trim().to_string()
        }
    }
}

pub trait CommandExecutor {
    fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<CommandResult>;
}

/// Runs commands as child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCommandExecutor;

impl CommandExecutor for ProcessCommandExecutor {
    fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<CommandResult> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(CommandResult {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Render a command line for logs and error messages
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote a string for a POSIX shell
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
