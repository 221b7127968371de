use std::path::Path;

use anyhow::Result;
use tracing::error;
use revsync::infrastructure::{ConsoleTarget, TerminalConfirmer, TomlRevisionStore};
use revsync::presentation::{default_sources, default_targets};
use revsync::{DeployOptions, DeployOutcome, DeployUseCase};

use super::Project;

/// Deploy command entry point
pub fn cmd_deploy(
    config: Option<&Path>,
    location: String,
    append: Vec<String>,
    remove: Vec<String>,
    from: Option<String>,
    to: Option<String>,
    yes: bool,
) -> Result<()> {
    let project = Project::load(config)?;
    let definition = project.definition()?;
    let targets = default_targets();
    let sources = default_sources();
    let revisions = TomlRevisionStore::new();
    let confirmer = TerminalConfirmer::stdio();
    let preview = ConsoleTarget::stdout();

    let mut options = DeployOptions::new(location)
        .with_root(project.root.clone())
        .with_append_files(append)
        .with_remove_files(remove)
        .with_yes(yes);
    if let Some(from) = from {
        options = options.with_from(from);
    }
    if let Some(to) = to {
        options = options.with_to(to);
    }

    let use_case = DeployUseCase::new(
        &project.environment,
        &definition,
        &targets,
        &sources,
        &revisions,
        &confirmer,
        &preview,
    );

    let outcome = match use_case.run(&options) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(location = %options.location, error = %e, "deployment failed");
            return Err(e.into());
        }
    };

    match outcome {
        DeployOutcome::Deployed { revision, actions } => {
            println!(
                "Deployed {} to {} ({} action(s))",
                revision, options.location, actions
            );
        }
        DeployOutcome::NothingToDeploy { revision } => {
            println!("{} is up to date at {}", options.location, revision);
        }
        DeployOutcome::Declined => println!("Aborted"),
    }
    Ok(())
}
