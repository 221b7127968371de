//! Git source
//!
//! Answers revision queries for a git working copy by running the `git`
//! command line. Contents are taken from the object database, never from the
//! working tree, so uncommitted changes are not deployed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{Action, ActionKind};
use crate::domain::ports::{Source, SourceError};
use crate::infrastructure::fs::contained_join;
use crate::infrastructure::process::{
    display_command, CommandExecutor, CommandResult, ProcessCommandExecutor,
};

/// Source type token for git repositories
pub const GIT_SOURCE_TYPE: &str = "git";

/// Tree mode of a submodule commit
const GITLINK_MODE: &str = "160000";

/// Whether a directory is a git working copy
pub fn detect_git(root: &Path) -> bool {
    root.join(".git").exists()
}

#[derive(Debug, Clone)]
pub struct GitSource<E = ProcessCommandExecutor> {
    root: PathBuf,
    executor: E,
}

impl GitSource<ProcessCommandExecutor> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            executor: ProcessCommandExecutor,
        }
    }
}

impl<E: CommandExecutor> GitSource<E> {
    pub fn with_executor(root: impl Into<PathBuf>, executor: E) -> Self {
        Self {
            root: root.into(),
            executor,
        }
    }

    fn execute(&self, args: &[&str]) -> Result<(String, CommandResult), SourceError> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let command = display_command("git", &args);
        let result = self
            .executor
            .execute("git", &args, &self.root)
            .map_err(|e| SourceError::Spawn {
                command: command.clone(),
                message: e.to_string(),
            })?;
        Ok((command, result))
    }

    fn run(&self, args: &[&str]) -> Result<(String, Vec<u8>), SourceError> {
        let (command, result) = self.execute(args)?;
        if !result.success {
            return Err(SourceError::Command {
                stderr: result.failure_message(),
                command,
            });
        }
        Ok((command, result.stdout))
    }

    /// Changed paths between two revisions; submodule entries are skipped
    fn changed(&self, from: &str, to: &str) -> Result<Vec<Action>, SourceError> {
        let (command, stdout) = self.run(&["diff", "--raw", "-z", "--no-renames", from, to])?;
        let fields = split_nul(&command, &stdout)?;

        let mut actions = Vec::new();
        let mut fields = fields.into_iter();
        while let Some(header) = fields.next() {
            let path = fields.next().ok_or_else(|| SourceError::Parse {
                command: command.clone(),
                message: format!("entry '{}' without a path", header),
            })?;
            let entry = RawEntry::parse(&header).ok_or_else(|| SourceError::Parse {
                command: command.clone(),
                message: format!("malformed entry '{}' for '{}'", header, path),
            })?;
            let old_link = entry.old_mode == GITLINK_MODE;
            let new_link = entry.new_mode == GITLINK_MODE;
            let kind = match entry.status {
                'A' | 'M' if new_link => None,
                'A' | 'M' => Some(ActionKind::Add),
                'D' if old_link => None,
                'D' => Some(ActionKind::Del),
                // A file replaced by a submodule leaves nothing to deploy
                'T' if new_link => (!old_link).then_some(ActionKind::Del),
                'T' => Some(ActionKind::Add),
                status => {
                    return Err(SourceError::Parse {
                        command,
                        message: format!("unexpected status '{}' for '{}'", status, path),
                    })
                }
            };
            match kind {
                Some(ActionKind::Add) => actions.push(Action::add(path)),
                Some(ActionKind::Del) => actions.push(Action::del(path)),
                None => debug!(path = %path, "submodule entry skipped"),
            }
        }
        Ok(actions)
    }

    /// Every file of a revision; submodule commits are not files
    fn tree(&self, to: &str) -> Result<Vec<Action>, SourceError> {
        let (command, stdout) = self.run(&["ls-tree", "-r", "-z", to])?;
        let mut actions = Vec::new();
        for entry in split_nul(&command, &stdout)? {
            let (meta, path) = entry.split_once('\t').ok_or_else(|| SourceError::Parse {
                command: command.clone(),
                message: format!("malformed tree entry '{}'", entry),
            })?;
            match meta.split(' ').nth(1) {
                Some("blob") => actions.push(Action::add(path)),
                Some("commit") => debug!(path, "submodule entry skipped"),
                _ => {
                    return Err(SourceError::Parse {
                        command,
                        message: format!("unexpected tree entry '{}'", entry),
                    })
                }
            }
        }
        Ok(actions)
    }

    fn materialize(&self, work: &Path, to: &str, path: &str) -> Result<(), SourceError> {
        let object = format!("{}:{}", to, path);
        let (_, content) = self.run(&["cat-file", "blob", &object])?;
        let target = contained_join(work, path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        Ok(())
    }
}

impl<E: CommandExecutor> Source for GitSource<E> {
    fn name(&self) -> &str {
        GIT_SOURCE_TYPE
    }

    fn current(&self) -> Result<Option<String>, SourceError> {
        let (command, result) = self.execute(&["rev-parse", "--verify", "-q", "HEAD"])?;
        if !result.success {
            // --verify -q fails silently when HEAD has no commit yet
            if result.code == Some(1) && result.stderr.trim().is_empty() {
                return Ok(None);
            }
            return Err(SourceError::Command {
                stderr: result.failure_message(),
                command,
            });
        }
        let revision = result.stdout_lossy().trim().to_string();
        Ok((!revision.is_empty()).then_some(revision))
    }

    fn diff(&self, work: &Path, from: Option<&str>, to: &str) -> Result<Vec<Action>, SourceError> {
        let actions = match from {
            Some(from) => self.changed(from, to)?,
            None => self.tree(to)?,
        };
        for action in actions.iter().filter(|action| action.is_add()) {
            self.materialize(work, to, action.path())?;
        }
        debug!(from = ?from, to, count = actions.len(), "git diff collected");
        Ok(actions)
    }
}

/// Header of a `git diff --raw` record: `:<old mode> <new mode> <old> <new> <status>`
struct RawEntry<'a> {
    old_mode: &'a str,
    new_mode: &'a str,
    status: char,
}

impl<'a> RawEntry<'a> {
    fn parse(header: &'a str) -> Option<Self> {
        let mut parts = header.strip_prefix(':')?.split(' ');
        let old_mode = parts.next()?;
        let new_mode = parts.next()?;
        let status = parts.nth(2)?.chars().next()?;
        Some(Self {
            old_mode,
            new_mode,
            status,
        })
    }
}

fn split_nul(command: &str, stdout: &[u8]) -> Result<Vec<String>, SourceError> {
    stdout
        .split(|byte| *byte == 0)
        .filter(|field| !field.is_empty())
        .map(|field| {
            String::from_utf8(field.to_vec()).map_err(|e| SourceError::Parse {
                command: command.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::process::testing::ScriptedExecutor;
    use tempfile::tempdir;

    /// `git diff --raw -z` output for (old mode, new mode, status, path) rows
    fn raw(rows: &[(&str, &str, char, &str)]) -> Vec<u8> {
        let mut out = Vec::new();
        for (old, new, status, path) in rows {
            out.extend_from_slice(
                format!(":{} {} 1111111 2222222 {}\0{}\0", old, new, status, path).as_bytes(),
            );
        }
        out
    }

    #[test]
    fn current_returns_head() {
        let executor = ScriptedExecutor::new();
        executor.push_ok("9f2c1e0\n");
        let source = GitSource::with_executor("/repo", &executor);

        assert_eq!(source.current().unwrap(), Some("9f2c1e0".to_string()));
        assert_eq!(
            executor.calls()[0].args,
            vec!["rev-parse", "--verify", "-q", "HEAD"]
        );
    }

    #[test]
    fn current_is_none_without_commits() {
        let executor = ScriptedExecutor::new();
        executor.push_failure(1, "");
        let source = GitSource::with_executor("/repo", &executor);

        assert_eq!(source.current().unwrap(), None);
    }

    #[test]
    fn current_propagates_git_errors() {
        let executor = ScriptedExecutor::new();
        executor.push_failure(128, "fatal: not a git repository");
        let source = GitSource::with_executor("/repo", &executor);

        assert!(matches!(
            source.current(),
            Err(SourceError::Command { .. })
        ));
    }

    #[test]
    fn diff_between_revisions_materializes_additions() {
        let work = tempdir().unwrap();
        let executor = ScriptedExecutor::new();
        executor
            .push_ok(raw(&[
                ("100644", "100644", 'M', "src/app.js"),
                ("100644", "000000", 'D', "old.txt"),
                ("000000", "100644", 'A', "docs/new.md"),
            ]))
            .push_ok("console.log(1)")
            .push_ok("# New");
        let source = GitSource::with_executor("/repo", &executor);

        let actions = source.diff(work.path(), Some("A"), "B").unwrap();

        assert_eq!(
            actions,
            vec![
                Action::add("src/app.js"),
                Action::del("old.txt"),
                Action::add("docs/new.md"),
            ]
        );
        assert_eq!(
            fs::read_to_string(work.path().join("src/app.js")).unwrap(),
            "console.log(1)"
        );
        assert_eq!(
            fs::read_to_string(work.path().join("docs/new.md")).unwrap(),
            "# New"
        );

        let calls = executor.calls();
        assert_eq!(
            calls[0].args,
            vec!["diff", "--raw", "-z", "--no-renames", "A", "B"]
        );
        assert_eq!(calls[1].args, vec!["cat-file", "blob", "B:src/app.js"]);
        assert_eq!(calls[2].args, vec!["cat-file", "blob", "B:docs/new.md"]);
    }

    #[test]
    fn diff_without_base_lists_whole_tree() {
        let work = tempdir().unwrap();
        let executor = ScriptedExecutor::new();
        executor
            .push_ok(&b"100644 blob 2e65efe\ta.txt\0100644 blob f2ad6c7\tb/c.txt\0"[..])
            .push_ok("a")
            .push_ok("c");
        let source = GitSource::with_executor("/repo", &executor);

        let actions = source.diff(work.path(), None, "HEAD").unwrap();

        assert_eq!(actions, vec![Action::add("a.txt"), Action::add("b/c.txt")]);
        assert_eq!(
            executor.calls()[0].args,
            vec!["ls-tree", "-r", "-z", "HEAD"]
        );
        assert_eq!(fs::read_to_string(work.path().join("b/c.txt")).unwrap(), "c");
    }

    #[test]
    fn unexpected_status_is_a_parse_error() {
        let work = tempdir().unwrap();
        let executor = ScriptedExecutor::new();
        executor.push_ok(raw(&[("100644", "100644", 'U', "conflict.txt")]));
        let source = GitSource::with_executor("/repo", &executor);

        assert!(matches!(
            source.diff(work.path(), Some("A"), "B"),
            Err(SourceError::Parse { .. })
        ));
    }

    #[test]
    fn detect_requires_git_directory() {
        let dir = tempdir().unwrap();
        assert!(!detect_git(dir.path()));
        fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(detect_git(dir.path()));
    }

    #[test]
    fn submodules_are_not_listed_in_the_tree() {
        let work = tempdir().unwrap();
        let executor = ScriptedExecutor::new();
        executor
            .push_ok(
                &b"100644 blob 2e65efe\tindex.html\0160000 commit 8c3f0a1\tvendor/lib\0"[..],
            )
            .push_ok("<html>");
        let source = GitSource::with_executor("/repo", &executor);

        let actions = source.diff(work.path(), None, "HEAD").unwrap();

        assert_eq!(actions, vec![Action::add("index.html")]);
        assert_eq!(executor.calls().len(), 2);
        assert!(!work.path().join("vendor/lib").exists());
    }

    #[test]
    fn submodule_changes_are_skipped() {
        let work = tempdir().unwrap();
        let executor = ScriptedExecutor::new();
        executor
            .push_ok(raw(&[
                ("000000", "160000", 'A', "vendor/new"),
                ("160000", "160000", 'M', "vendor/lib"),
                ("160000", "000000", 'D', "vendor/old"),
                ("100644", "160000", 'T', "vendor/was-file"),
                ("160000", "100644", 'T', "vendor/now-file"),
                ("100644", "100644", 'M', "app.js"),
            ]))
            .push_ok("now")
            .push_ok("app");
        let source = GitSource::with_executor("/repo", &executor);

        let actions = source.diff(work.path(), Some("A"), "B").unwrap();

        assert_eq!(
            actions,
            vec![
                Action::del("vendor/was-file"),
                Action::add("vendor/now-file"),
                Action::add("app.js"),
            ]
        );
        let calls = executor.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1].args, vec!["cat-file", "blob", "B:vendor/now-file"]);
    }
}
