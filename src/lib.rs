//! Turnstile: a small generic finite state machine library.
//!
//! A machine is built once from an initial state and a table of named
//! events, each legal from a specific set of source states and leading to
//! one target state. From then on the machine tracks a current state and
//! enforces that it only changes through permitted events. It is meant as
//! an embeddable building block for code that needs explicit, validated
//! state transitions: order lifecycles, connection states, workflow stages.
//!
//! # Core Concepts
//!
//! - **State**: any caller type with value-semantic equality and hashing
//!   (enums and strings both work; see the [`State`] bound)
//! - **Event**: a named transition from a set of source states to one target
//! - **Firing**: `fire(name)` either moves the machine or returns a
//!   [`TransitionError`] and leaves it untouched
//!
//! The machine holds no external resources, performs no I/O, and has no
//! internal locking; callers needing cross-thread access wrap it in their
//! own mutual exclusion.
//!
//! # Example
//!
//! ```rust
//! use turnstile::{FiniteStateMachine, TransitionError, events};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Account {
//!     Inactive,
//!     Active,
//!     Frozen,
//! }
//!
//! let mut fsm = FiniteStateMachine::new(
//!     Account::Inactive,
//!     events! {
//!         "activate": [Account::Inactive] => Account::Active,
//!         "deactivate": [Account::Active] => Account::Inactive,
//!         "freeze": [Account::Active] => Account::Frozen,
//!     },
//! );
//!
//! // Freezing is not legal yet.
//! assert_eq!(
//!     fsm.fire("freeze"),
//!     Err(TransitionError::InvalidTransition {
//!         from: Account::Inactive,
//!         to: Account::Frozen,
//!     })
//! );
//!
//! fsm.fire("activate").unwrap();
//! fsm.fire("freeze").unwrap();
//! assert_eq!(fsm.state(), &Account::Frozen);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use core::{Event, Events, FiniteStateMachine, Set, State, TransitionError};
