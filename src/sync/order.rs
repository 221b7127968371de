//! Action ordering
//!
//! Sorts the final batch by `(precedence, path)`. The kind is used as a last
//! tie-breaker so the comparison is a total order and sorting is idempotent.

use crate::domain::entities::Action;

/// Sort actions into execution order
pub fn order_actions(actions: &mut [Action]) {
    actions.sort_by(|a, b| a.order_key().cmp(&b.order_key()));
}

/// Whether actions are already in execution order
pub fn is_ordered(actions: &[Action]) -> bool {
    actions
        .windows(2)
        .all(|pair| pair[0].order_key() <= pair[1].order_key())
}
