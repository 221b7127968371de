//! Common helpers for revsync CLI tests
//!
//! - `TestEnv`: a temp project directory plus a temp output directory
//! - `git`: run git inside the project, `None` when git is not installed

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the revsync binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project and deployment directories
pub struct TestEnv {
    pub project: TempDir,
    pub output: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project: tempfile::tempdir().unwrap(),
            output: tempfile::tempdir().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project.path().join(relative)
    }

    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.output.path().join(relative)
    }

    /// `file://` connection pointing at the output directory
    pub fn output_connection(&self) -> String {
        format!("file://{}", self.output.path().display())
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn write_config(&self, content: &str) {
        self.write(".revsync.toml", content);
    }

    /// Run revsync from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_revsync"))
            .args(args)
            .current_dir(self.project.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run git in the project directory and return trimmed stdout
    ///
    /// Returns `None` when git cannot be spawned.
    pub fn git(&self, args: &[&str]) -> Option<String> {
        git_in(self.project.path(), args)
    }

    /// Initialise a repository with a committer identity
    pub fn init_git(&self) -> bool {
        self.git(&["init", "-q"]).is_some()
            && self.git(&["config", "user.email", "test@example.com"]).is_some()
            && self.git(&["config", "user.name", "revsync test"]).is_some()
            && self.git(&["config", "commit.gpgsign", "false"]).is_some()
    }

    /// Stage everything and commit, returning the new HEAD
    pub fn commit(&self, message: &str) -> String {
        self.git(&["add", "-A"]).unwrap();
        self.git(&["commit", "-q", "-m", message]).unwrap();
        self.git(&["rev-parse", "HEAD"]).unwrap()
    }
}

pub fn git_in(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
