use std::path::Path;

use anyhow::Result;
use revsync::infrastructure::TomlRevisionStore;
use revsync::presentation::{default_sources, default_targets};
use revsync::StatusUseCase;

use super::Project;

pub fn cmd_status(config: Option<&Path>, location: &str) -> Result<()> {
    let project = Project::load(config)?;
    let definition = project.definition()?;
    let targets = default_targets();
    let sources = default_sources();
    let revisions = TomlRevisionStore::new();

    let status = StatusUseCase::new(
        &project.environment,
        &definition,
        &targets,
        &sources,
        &revisions,
    )
    .run(location, &project.root)?;

    println!("{} ({})", status.location, status.connection);
    println!(
        "  deployed: {}",
        status.deployed.as_deref().unwrap_or("never deployed")
    );
    println!(
        "  current:  {}",
        status.current.as_deref().unwrap_or("(no revision)")
    );
    if status.is_behind() {
        println!("  changes pending");
    }
    Ok(())
}
