//! Rule-based definition
//!
//! `[[modifiers]]` rules are tried in declaration order; the first rule whose
//! pattern matches an action path decides what happens to it. Paths no rule
//! matches pass through unchanged.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use regex::Regex;
use tracing::debug;

use crate::config::{Config, ModifierRule};
use crate::domain::entities::{is_contained_path, normalize_action_path, Action, Options};
use crate::domain::ports::{Definition, Modification, ModifierError};
use crate::error::{RevsyncError, RevsyncResult};
use crate::infrastructure::fs::contained_join;

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    rename: Option<String>,
    filter: Option<String>,
    ignore: bool,
    order: Option<u8>,
}

impl CompiledRule {
    fn compile(rule: &ModifierRule) -> RevsyncResult<Self> {
        let regex = Regex::new(&rule.pattern).map_err(|e| RevsyncError::InvalidPattern {
            pattern: rule.pattern.clone(),
            message: e.to_string(),
        })?;
        if let Some(order) = rule.order.filter(|order| *order >= Action::MARKER_PRECEDENCE) {
            return Err(RevsyncError::InvalidRule {
                pattern: rule.pattern.clone(),
                message: format!(
                    "order {} is reserved for the revision marker (maximum is {})",
                    order,
                    Action::MARKER_PRECEDENCE - 1
                ),
            });
        }
        Ok(Self {
            regex,
            rename: rule.rename.clone(),
            filter: rule.filter.clone(),
            ignore: rule.ignore,
            order: rule.order,
        })
    }

    fn destination(&self, path: &str) -> String {
        match &self.rename {
            Some(template) => normalize_action_path(&self.regex.replace(path, template.as_str())),
            None => path.to_string(),
        }
    }
}

/// Definition driven by the `[source]` and `[[modifiers]]` configuration
#[derive(Debug, Clone, Default)]
pub struct RuleDefinition {
    source_type: Option<String>,
    source_options: Options,
    rules: Vec<CompiledRule>,
}

impl RuleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the rules of a configuration
    pub fn from_config(config: &Config) -> RevsyncResult<Self> {
        let rules = config
            .modifiers
            .iter()
            .map(CompiledRule::compile)
            .collect::<RevsyncResult<Vec<_>>>()?;
        Ok(Self {
            source_type: config.source.source_type.clone(),
            source_options: config.source.options.clone(),
            rules,
        })
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, rule: &ModifierRule) -> RevsyncResult<Self> {
        self.rules.push(CompiledRule::compile(rule)?);
        Ok(self)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn matching_rule(&self, path: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.regex.is_match(path))
    }
}

impl Definition for RuleDefinition {
    fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }

    fn source_options(&self) -> &Options {
        &self.source_options
    }

    fn apply(
        &self,
        work: &Path,
        action: &Action,
        seen: &mut HashSet<String>,
    ) -> Result<Modification, ModifierError> {
        let path = action.path();
        let Some(rule) = self.matching_rule(path) else {
            if !seen.insert(path.to_string()) {
                debug!(path, "duplicate destination dropped");
                return Ok(Modification::none());
            }
            return Ok(Modification::emit(action.clone()));
        };

        if rule.ignore {
            debug!(path, "ignored by rule");
            return Ok(cancel_source(Modification::none(), action, true));
        }

        let destination = rule.destination(path);
        let renamed = destination != path;
        if renamed && !is_contained_path(&destination) {
            return Err(ModifierError::EscapingDestination {
                path: path.to_string(),
                destination,
            });
        }

        if !seen.insert(destination.clone()) {
            debug!(path, destination = %destination, "duplicate destination dropped");
            return Ok(cancel_source(Modification::none(), action, renamed));
        }

        if action.is_add() {
            if let Some(filter) = &rule.filter {
                run_filter(filter, work, path, &destination)?;
            } else if renamed {
                copy_content(work, path, &destination)?;
            }
        }

        let mut emitted = Action::new(destination, action.kind());
        if let Some(order) = rule.order {
            emitted = emitted.with_precedence(order);
        }
        Ok(cancel_source(Modification::emit(emitted), action, renamed))
    }
}

/// ADD actions whose content no longer lives at their own path cancel it
fn cancel_source(modification: Modification, action: &Action, cancel: bool) -> Modification {
    if cancel && action.is_add() {
        modification.with_cancel(action.path())
    } else {
        modification
    }
}

fn copy_content(work: &Path, from: &str, to: &str) -> Result<(), ModifierError> {
    let io_error = |source: std::io::Error| ModifierError::Io {
        path: to.to_string(),
        source,
    };
    let target = contained_join(work, to).map_err(io_error)?;
    let source = contained_join(work, from).map_err(io_error)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::copy(source, &target).map_err(io_error)?;
    Ok(())
}

/// Pipe `work/from` through a shell command into `work/to`
fn run_filter(command: &str, work: &Path, from: &str, to: &str) -> Result<(), ModifierError> {
    let input = contained_join(work, from)
        .and_then(fs::File::open)
        .map_err(|source| ModifierError::Io {
            path: from.to_string(),
            source,
        })?;

    let output = shell(command)
        .current_dir(work)
        .stdin(Stdio::from(input))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ModifierError::Filter {
            command: command.to_string(),
            path: from.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ModifierError::Filter {
            command: command.to_string(),
            path: from.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let io_error = |source: std::io::Error| ModifierError::Io {
        path: to.to_string(),
        source,
    };
    let target = contained_join(work, to).map_err(io_error)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(&target, &output.stdout).map_err(io_error)?;
    debug!(command, from, to, "filter applied");
    Ok(())
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
