//! Deploy Use Case
//!
//! Orchestrates one deployment run:
//! 1. Resolve the location and build its target
//! 2. Load the revision marker and build the source
//! 3. Resolve the revision range
//! 4. Build, modify and order the action batch
//! 5. Preview, confirm and send it
//! 6. Commit the new revision marker
//!
//! The work area lives for the duration of one run and is removed on every
//! exit path.

use tracing::{error, info};

use crate::application::resolve::{
    create_source, create_target, load_revision, resolve_location,
};
use crate::domain::entities::Environment;
use crate::domain::ports::{
    Confirmer, Definition, RevisionStore, SourceRegistry, Target, TargetRegistry,
};
use crate::error::DeployError;
use crate::sync::{
    apply_modifiers, build_candidates, order_actions, ManualFiles, RevisionCommit, WorkArea,
};

use super::options::DeployOptions;
use super::result::DeployOutcome;

/// Deploy use case - sequences the reconciliation pipeline
///
/// Collaborators are borrowed so callers (and tests) keep ownership and can
/// inspect them after the run.
pub struct DeployUseCase<'a> {
    environment: &'a Environment,
    definition: &'a dyn Definition,
    targets: &'a TargetRegistry,
    sources: &'a SourceRegistry,
    revisions: &'a dyn RevisionStore,
    confirmer: &'a dyn Confirmer,
    preview: &'a dyn Target,
}

impl<'a> DeployUseCase<'a> {
    pub fn new(
        environment: &'a Environment,
        definition: &'a dyn Definition,
        targets: &'a TargetRegistry,
        sources: &'a SourceRegistry,
        revisions: &'a dyn RevisionStore,
        confirmer: &'a dyn Confirmer,
        preview: &'a dyn Target,
    ) -> Self {
        Self {
            environment,
            definition,
            targets,
            sources,
            revisions,
            confirmer,
            preview,
        }
    }

    /// Run a deployment, logging any failure
    ///
    /// Returns `true` when the run succeeded, including runs with nothing to
    /// deploy and runs the user declined.
    pub fn execute(&self, options: &DeployOptions) -> bool {
        match self.run(options) {
            Ok(_) => true,
            Err(e) => {
                error!(location = %options.location, "{}", e);
                false
            }
        }
    }

    /// Run a deployment
    pub fn run(&self, options: &DeployOptions) -> Result<DeployOutcome, DeployError> {
        let location = resolve_location(self.environment, &options.location)?;
        let name = location.name();

        let target = create_target(self.targets, location)?;
        let mut revision =
            load_revision(self.revisions, location, &options.root, target.as_ref())?;
        let source = create_source(self.sources, self.definition, &options.root)?;

        let rev_from = match &options.rev_from {
            Some(rev) => Some(rev.clone()),
            None => revision.get(name).map(str::to_string),
        };
        if rev_from.is_none() && !options.yes {
            let question = format!(
                "No current revision found for location \"{}\", maybe you're deploying for the first time. Initiate full deploy?",
                name
            );
            if !self.confirmer.confirm(&question) {
                info!(location = name, "full deploy declined");
                return Ok(DeployOutcome::Declined);
            }
        }

        let rev_to = match &options.rev_to {
            Some(rev) => rev.clone(),
            None => source.current()?.ok_or(DeployError::NoTargetRevision)?,
        };
        revision.set(name, rev_to.as_str());
        info!(
            location = name,
            from = rev_from.as_deref().unwrap_or("(none)"),
            to = %rev_to,
            source = source.name(),
            "revision range resolved"
        );

        let work = WorkArea::new()?;
        let diff = source.diff(work.path(), rev_from.as_deref(), &rev_to)?;

        let manual = [
            ManualFiles {
                append: location.append_files(),
                remove: location.remove_files(),
            },
            ManualFiles {
                append: &options.append_files,
                remove: &options.remove_files,
            },
        ];
        let candidates = build_candidates(&options.root, &work, diff, &manual)?;
        let mut actions = apply_modifiers(self.definition, &work, &candidates.actions)?.actions;

        let changed = rev_from.as_deref() != Some(rev_to.as_str());
        let commit = RevisionCommit::new(
            location,
            &options.root,
            self.revisions.serialize(&revision),
            changed,
        );
        commit.stage(&work, &mut actions)?;

        if actions.is_empty() {
            info!(location = name, "no deployment required");
            return Ok(DeployOutcome::NothingToDeploy { revision: rev_to });
        }

        order_actions(&mut actions);
        self.preview
            .send(work.path(), &actions)
            .map_err(DeployError::Transfer)?;

        if !options.yes && !self.confirmer.confirm("Execute synchronization?") {
            info!(location = name, "synchronization declined");
            return Ok(DeployOutcome::Declined);
        }

        target
            .send(work.path(), &actions)
            .map_err(DeployError::Transfer)?;
        commit.finish()?;

        info!(
            location = name,
            target = %target.display_name(),
            count = actions.len(),
            "deployment done"
        );
        Ok(DeployOutcome::Deployed {
            revision: rev_to,
            actions: actions.len(),
        })
    }
}
