//! Definition Implementations
//!
//! Concrete implementations of the Definition port.

mod rules;

pub use rules::RuleDefinition;
