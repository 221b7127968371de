//! Deploy Result
//!
//! Outcomes of a deploy run that did not fail.

/// How a deploy run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The batch was sent and the revision marker committed
    Deployed { revision: String, actions: usize },
    /// Nothing to transfer; the target was not contacted for writes
    NothingToDeploy { revision: String },
    /// The user declined a confirmation
    Declined,
}

impl DeployOutcome {
    pub fn has_changes(&self) -> bool {
        matches!(self, Self::Deployed { .. })
    }
}
