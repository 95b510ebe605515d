//! The transition engine.
//!
//! A machine is built once from an initial state and an event table, and
//! from then on only mutates through successful [`fire`] calls. Two indexes
//! are derived at construction and never rebuilt: an event-name → target
//! map, and a source-state → reachable-states map.
//!
//! [`fire`]: FiniteStateMachine::fire

use super::error::TransitionError;
use super::event::{Event, State};
use super::set::Set;
use std::collections::HashMap;

/// A finite state machine over caller-defined states.
///
/// The machine tracks a single current state and permits transitions only
/// through events registered at construction. Failed firings leave the
/// state untouched and the machine usable; there is no error or closed
/// lifecycle state to recover from.
///
/// Construction never fails. Degenerate event tables — empty, with
/// duplicate names, with self-loops, with empty `from` lists — are all
/// accepted silently. Dead-end states (targets with no outgoing events)
/// are legal.
///
/// The machine has no internal synchronization; wrap it in a lock if it
/// must be shared across threads.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Event, FiniteStateMachine};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Account {
///     Inactive,
///     Active,
/// }
///
/// let mut fsm = FiniteStateMachine::new(
///     Account::Inactive,
///     vec![
///         Event::new("activate", [Account::Inactive], Account::Active),
///         Event::new("deactivate", [Account::Active], Account::Inactive),
///     ],
/// );
///
/// assert_eq!(fsm.state(), &Account::Inactive);
/// fsm.fire("activate").unwrap();
/// assert_eq!(fsm.state(), &Account::Active);
/// ```
#[derive(Clone, Debug)]
pub struct FiniteStateMachine<S: State> {
    state: S,
    events: HashMap<String, S>,
    transitions: HashMap<S, Set<S>>,
}

impl<S: State> FiniteStateMachine<S> {
    /// Build a machine from an initial state and an event table.
    ///
    /// Both indexes are derived in a single pass over the table. When two
    /// events share a name, the later one determines the name's target,
    /// but every row still contributes its `from` → `to` pairs to the
    /// reachability index. No validation is performed.
    pub fn new(initial: S, events: impl IntoIterator<Item = Event<S>>) -> Self {
        let mut event_map = HashMap::new();
        let mut transitions: HashMap<S, Set<S>> = HashMap::new();

        for event in events {
            event_map.insert(event.name, event.to.clone());
            for from in event.from {
                transitions.entry(from).or_default().add(event.to.clone());
            }
        }

        Self {
            state: initial,
            events: event_map,
            transitions,
        }
    }

    /// The current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// States reachable from the current state via any single event.
    ///
    /// Returns a snapshot in unspecified order; empty (never an error) when
    /// the current state has no outgoing transitions. Compare results as
    /// sets, not sequences.
    pub fn available_states(&self) -> Vec<S> {
        match self.transitions.get(&self.state) {
            Some(reachable) => reachable.keys(),
            None => Vec::new(),
        }
    }

    /// Whether `target` is reachable from the current state.
    pub fn can_move_to(&self, target: &S) -> bool {
        self.transitions
            .get(&self.state)
            .is_some_and(|reachable| reachable.has(target))
    }

    /// Fire a named event, moving to its target state if the transition is
    /// legal from the current state.
    ///
    /// Fails with [`TransitionError::UnknownEvent`] if the name was never
    /// registered, and with [`TransitionError::InvalidTransition`] if the
    /// event's target is not reachable from the current state. The current
    /// state is unchanged on any failure.
    ///
    /// Legality is checked by reachability of the *target state*, not by
    /// event identity: if any registered event makes the same target
    /// reachable from the current state, the firing succeeds.
    pub fn fire(&mut self, event: &str) -> Result<(), TransitionError<S>> {
        let target = self
            .events
            .get(event)
            .ok_or_else(|| TransitionError::UnknownEvent(event.to_string()))?;

        if !self.can_move_to(target) {
            return Err(TransitionError::InvalidTransition {
                from: self.state.clone(),
                to: target.clone(),
            });
        }

        self.state = target.clone();
        Ok(())
    }
}
