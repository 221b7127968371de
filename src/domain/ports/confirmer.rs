//! Confirmer Port
//!
//! Yes/no questions asked during a deployment. The terminal implementation
//! lives in `infrastructure::confirm`.

/// Trait for answering yes/no questions
pub trait Confirmer {
    /// Ask a question and return the answer
    fn confirm(&self, question: &str) -> bool;
}

/// Confirmer that always answers yes.
///
/// Use this when `--yes` is passed.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

/// Confirmer that always answers no.
pub struct AssumeNo;

impl Confirmer for AssumeNo {
    fn confirm(&self, _question: &str) -> bool {
        false
    }
}
