use std::path::Path;

use anyhow::Result;

use super::Project;

pub fn cmd_locations(config: Option<&Path>) -> Result<()> {
    let project = Project::load(config)?;

    if project.environment.is_empty() {
        println!("No locations configured");
        return Ok(());
    }
    for location in project.environment.locations() {
        let mode = if location.is_local() {
            "local marker"
        } else {
            "remote marker"
        };
        println!("{}\t{}\t{}", location.name(), location.connection(), mode);
    }
    Ok(())
}
