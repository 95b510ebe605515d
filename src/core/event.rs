//! Event definitions and the `State` bound for machine states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Bound for types usable as machine states.
///
/// States are opaque values supplied by the caller; the machine only needs
/// to clone them, compare them, and use them as hash-map keys. Equality and
/// hashing must have value semantics: two states that compare equal must
/// hash identically, and comparison must not depend on object identity.
///
/// A blanket impl covers every qualifying type, so callers never implement
/// this trait by hand — an enum deriving `Clone, PartialEq, Eq, Hash, Debug`
/// (or a string type) is already a valid state.
pub trait State: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> State for T {}

/// A named transition descriptor.
///
/// An event declares that firing `name` moves the machine to `to`, and is
/// legal from any of the states listed in `from`. Events are plain data:
/// the machine copies what it needs at construction and never consults the
/// table again.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Event;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// let close = Event::new("close", [Door::Open], Door::Closed);
/// assert_eq!(close.name, "close");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event<S> {
    /// Name the caller fires this event by.
    pub name: String,
    /// States this event may be fired from.
    pub from: Vec<S>,
    /// State the machine moves to when this event fires.
    pub to: S,
}

impl<S> Event<S> {
    /// Create an event from a name, its source states, and its target.
    pub fn new(name: impl Into<String>, from: impl IntoIterator<Item = S>, to: S) -> Self {
        Self {
            name: name.into(),
            from: from.into_iter().collect(),
            to,
        }
    }
}

/// An ordered event table.
///
/// Order matters only when two events share a name: the later definition
/// determines the name's effective target.
pub type Events<S> = Vec<Event<S>>;
