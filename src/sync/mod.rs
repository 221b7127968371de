//! Reconciliation pipeline stages
//!
//! - `work_area` - scoped temporary directory for materialized content
//! - `builder` - merges the source diff with manual files
//! - `modifiers` - runs candidates through the definition
//! - `order` - sorts the final batch
//! - `commit` - persists the revision marker
//!
//! The stages are sequenced by `application::deploy::DeployUseCase`.

pub mod builder;
pub mod commit;
pub mod modifiers;
pub mod order;
pub mod work_area;

pub use builder::{build_candidates, Candidates, ManualFiles};
pub use commit::{CommitMode, RevisionCommit};
pub use modifiers::{apply_modifiers, Modified};
pub use order::{is_ordered, order_actions};
pub use work_area::WorkArea;
