//! Property tests for action ordering.

use proptest::prelude::*;

use revsync::domain::entities::normalize_action_path;
use revsync::sync::{is_ordered, order_actions};
use revsync::Action;

fn action() -> impl Strategy<Value = Action> {
    let path = "[a-c]{1,3}(/[a-c]{1,3}){0,2}";
    (path, any::<bool>(), proptest::option::of(0u8..40)).prop_map(|(path, add, precedence)| {
        let action = if add {
            Action::add(path)
        } else {
            Action::del(path)
        };
        match precedence {
            Some(p) => action.with_precedence(p),
            None => action,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Ordered output satisfies is_ordered and keeps every action.
    #[test]
    fn property_order_is_sorted_permutation(mut actions in proptest::collection::vec(action(), 0..32)) {
        let mut expected = actions.clone();
        order_actions(&mut actions);

        prop_assert!(is_ordered(&actions));
        prop_assert_eq!(actions.len(), expected.len());
        for action in &actions {
            let index = expected.iter().position(|a| a == action);
            prop_assert!(index.is_some());
            if let Some(index) = index {
                expected.remove(index);
            }
        }
    }

    /// PROPERTY: Ordering twice gives the same sequence as ordering once.
    #[test]
    fn property_order_is_idempotent(mut actions in proptest::collection::vec(action(), 0..32)) {
        order_actions(&mut actions);
        let once = actions.clone();
        order_actions(&mut actions);
        prop_assert_eq!(actions, once);
    }

    /// PROPERTY: Default precedence puts every DEL before every ADD.
    #[test]
    fn property_deletions_before_additions(paths in proptest::collection::vec(("[a-z]{1,6}", any::<bool>()), 0..32)) {
        let mut actions: Vec<Action> = paths
            .into_iter()
            .map(|(path, add)| if add { Action::add(path) } else { Action::del(path) })
            .collect();
        order_actions(&mut actions);

        let first_add = actions.iter().position(Action::is_add).unwrap_or(actions.len());
        prop_assert!(actions[first_add..].iter().all(Action::is_add));
    }

    /// PROPERTY: Normalizing is idempotent and strips leading `./`;
    /// backslashes are separators only on Windows.
    #[test]
    fn property_normalize_idempotent(path in "(\\./){0,3}[A-Za-z0-9_\\\\/.-]{0,32}") {
        let once = normalize_action_path(&path);
        prop_assert_eq!(normalize_action_path(&once), once.clone());
        prop_assert!(!once.starts_with("./"));
        if cfg!(windows) {
            prop_assert!(!once.contains('\\'));
        } else {
            prop_assert_eq!(once.matches('\\').count(), path.matches('\\').count());
        }
    }
}
