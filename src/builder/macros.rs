//! Macros for declarative event-table construction.

/// Build an event table from a literal description.
///
/// Each entry reads as `"name": [source states] => target state` and
/// becomes one [`Event`](crate::core::Event); the expansion preserves
/// entry order, so later entries win on name collisions exactly as they
/// would in a hand-built table.
///
/// # Example
///
/// ```rust
/// use turnstile::core::FiniteStateMachine;
/// use turnstile::events;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// let table = events! {
///     "close": [Door::Open] => Door::Closed,
///     "open": [Door::Closed] => Door::Open,
///     "lock": [Door::Closed] => Door::Locked,
///     "unlock": [Door::Locked] => Door::Closed,
/// };
///
/// let mut fsm = FiniteStateMachine::new(Door::Open, table);
/// fsm.fire("close").unwrap();
/// fsm.fire("lock").unwrap();
/// assert_eq!(fsm.state(), &Door::Locked);
/// ```
#[macro_export]
macro_rules! events {
    (
        $(
            $name:literal : [ $($from:expr),* $(,)? ] => $to:expr
        ),* $(,)?
    ) => {
        vec![
            $(
                $crate::core::Event::new($name, vec![$($from),*], $to)
            ),*
        ]
    };
}
