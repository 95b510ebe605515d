//! Builder API for ergonomic machine construction.
//!
//! [`MachineBuilder`] offers a fluent alternative to assembling an event
//! table by hand; the [`events!`](crate::events) macro covers the fully
//! declarative case.

pub mod macros;

use crate::core::{Event, Events, FiniteStateMachine, State};

/// Fluent builder for a [`FiniteStateMachine`].
///
/// Construction of the machine never fails, so `build` is infallible —
/// the builder exists purely for ergonomics.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::MachineBuilder;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Job {
///     Queued,
///     Running,
///     Done,
/// }
///
/// let mut fsm = MachineBuilder::new(Job::Queued)
///     .event("start", [Job::Queued], Job::Running)
///     .event("finish", [Job::Running], Job::Done)
///     .build();
///
/// fsm.fire("start").unwrap();
/// assert_eq!(fsm.state(), &Job::Running);
/// ```
pub struct MachineBuilder<S: State> {
    initial: S,
    events: Events<S>,
}

impl<S: State> MachineBuilder<S> {
    /// Start a builder with the machine's initial state.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            events: Vec::new(),
        }
    }

    /// Append one event to the table.
    pub fn event(
        mut self,
        name: impl Into<String>,
        from: impl IntoIterator<Item = S>,
        to: S,
    ) -> Self {
        self.events.push(Event::new(name, from, to));
        self
    }

    /// Append a batch of pre-built events, preserving their order.
    pub fn events(mut self, events: impl IntoIterator<Item = Event<S>>) -> Self {
        self.events.extend(events);
        self
    }

    /// Build the machine.
    pub fn build(self) -> FiniteStateMachine<S> {
        FiniteStateMachine::new(self.initial, self.events)
    }
}
