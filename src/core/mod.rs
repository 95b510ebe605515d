//! Core transition engine: states, events, the machine, and its errors.

pub mod error;
pub mod event;
pub mod machine;
pub mod set;

pub use error::TransitionError;
pub use event::{Event, Events, State};
pub use machine::FiniteStateMachine;
pub use set::Set;
