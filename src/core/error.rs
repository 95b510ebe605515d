//! Transition errors surfaced by [`fire`](crate::core::FiniteStateMachine::fire).

use super::event::State;
use thiserror::Error;

/// Errors a `fire` call can return. The machine's state is unchanged in
/// either case and the machine stays fully usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError<S: State> {
    /// The event name was never registered at construction time.
    /// Usually a typo or a configuration defect.
    #[error("event \"{0}\" has not been defined")]
    UnknownEvent(String),

    /// The event is defined, but its target is not reachable from the
    /// current state. Expected in normal control flow when a transition is
    /// simply not allowed right now.
    #[error("can not move from {from:?} to {to:?}")]
    InvalidTransition { from: S, to: S },
}
