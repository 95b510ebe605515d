//! Property-based tests for the set and the transition engine.
//!
//! These tests use proptest to verify the documented contracts across
//! many randomly generated event tables and states.

use proptest::prelude::*;
use std::collections::HashSet;
use turnstile::{Event, Events, FiniteStateMachine, Set, TransitionError};

const STATE_SPACE: std::ops::Range<u8> = 0..5;

prop_compose! {
    fn arbitrary_event()(
        name in prop::sample::select(vec!["go", "stop", "reset", "jump", "spin"]),
        from in prop::collection::vec(STATE_SPACE, 0..4),
        to in STATE_SPACE,
    ) -> Event<u8> {
        Event::new(name, from, to)
    }
}

prop_compose! {
    fn arbitrary_table()(
        events in prop::collection::vec(arbitrary_event(), 0..8)
    ) -> Events<u8> {
        events
    }
}

/// The set of states the spec derives as reachable from `state`:
/// every `to` of an event listing `state` among its sources.
fn expected_reachable(table: &Events<u8>, state: u8) -> HashSet<u8> {
    table
        .iter()
        .filter(|event| event.from.contains(&state))
        .map(|event| event.to)
        .collect()
}

proptest! {
    #[test]
    fn set_add_is_idempotent(elements in prop::collection::vec(STATE_SPACE, 0..20)) {
        let mut set = Set::new();
        for element in &elements {
            set.add(*element);
            set.add(*element);
        }

        let distinct: HashSet<u8> = elements.iter().copied().collect();
        prop_assert_eq!(set.size(), distinct.len());
    }

    #[test]
    fn set_keys_agree_with_size_and_membership(
        elements in prop::collection::vec(STATE_SPACE, 0..20)
    ) {
        let set: Set<u8> = elements.iter().copied().collect();
        let keys = set.keys();

        prop_assert_eq!(keys.len(), set.size());

        let as_set: HashSet<u8> = keys.iter().copied().collect();
        prop_assert_eq!(as_set.len(), keys.len());
        for key in &keys {
            prop_assert!(set.has(key));
        }
    }

    #[test]
    fn set_delete_removes_only_the_element(
        elements in prop::collection::vec(STATE_SPACE, 1..20),
        victim in STATE_SPACE,
    ) {
        let mut set: Set<u8> = elements.iter().copied().collect();
        let size_before = set.size();
        let was_present = set.has(&victim);

        set.delete(&victim);

        prop_assert!(!set.has(&victim));
        let expected = if was_present { size_before - 1 } else { size_before };
        prop_assert_eq!(set.size(), expected);
    }

    #[test]
    fn initial_state_survives_construction(
        initial in STATE_SPACE,
        table in arbitrary_table(),
    ) {
        let fsm = FiniteStateMachine::new(initial, table);
        prop_assert_eq!(fsm.state(), &initial);
    }

    #[test]
    fn available_states_match_the_table(
        initial in STATE_SPACE,
        table in arbitrary_table(),
    ) {
        let expected = expected_reachable(&table, initial);
        let fsm = FiniteStateMachine::new(initial, table);

        let available = fsm.available_states();
        let as_set: HashSet<u8> = available.iter().copied().collect();

        // No duplicates, and exactly the derived reachable set.
        prop_assert_eq!(as_set.len(), available.len());
        prop_assert_eq!(as_set, expected);
    }

    #[test]
    fn can_move_to_agrees_with_available_states(
        initial in STATE_SPACE,
        table in arbitrary_table(),
    ) {
        let fsm = FiniteStateMachine::new(initial, table);
        let available: HashSet<u8> = fsm.available_states().into_iter().collect();

        for target in STATE_SPACE {
            prop_assert_eq!(fsm.can_move_to(&target), available.contains(&target));
        }
    }

    #[test]
    fn unregistered_event_never_moves_the_state(
        initial in STATE_SPACE,
        table in arbitrary_table(),
    ) {
        let mut fsm = FiniteStateMachine::new(initial, table);

        let result = fsm.fire("never defined");
        prop_assert_eq!(
            result,
            Err(TransitionError::UnknownEvent("never defined".to_string()))
        );
        prop_assert_eq!(fsm.state(), &initial);
    }

    #[test]
    fn fire_moves_exactly_when_target_is_reachable(
        initial in STATE_SPACE,
        table in arbitrary_table(),
        name in prop::sample::select(vec!["go", "stop", "reset", "jump", "spin"]),
    ) {
        // Last definition of the name wins the target.
        let target = table
            .iter()
            .rev()
            .find(|event| event.name == name)
            .map(|event| event.to);

        let mut fsm = FiniteStateMachine::new(initial, table);
        let legal = target.is_some_and(|t| fsm.can_move_to(&t));
        let result = fsm.fire(name);

        match (target, legal) {
            (None, _) => {
                prop_assert_eq!(result, Err(TransitionError::UnknownEvent(name.to_string())));
                prop_assert_eq!(fsm.state(), &initial);
            }
            (Some(to), false) => {
                prop_assert_eq!(
                    result,
                    Err(TransitionError::InvalidTransition { from: initial, to })
                );
                prop_assert_eq!(fsm.state(), &initial);
            }
            (Some(to), true) => {
                prop_assert_eq!(result, Ok(()));
                prop_assert_eq!(fsm.state(), &to);
            }
        }
    }

    #[test]
    fn failed_fires_leave_the_machine_usable(
        initial in STATE_SPACE,
        table in arbitrary_table(),
    ) {
        let mut fsm = FiniteStateMachine::new(initial, table);
        let available_before: HashSet<u8> = fsm.available_states().into_iter().collect();

        let _ = fsm.fire("never defined");

        let available_after: HashSet<u8> = fsm.available_states().into_iter().collect();
        prop_assert_eq!(available_before, available_after);
        prop_assert_eq!(fsm.state(), &initial);
    }
}
