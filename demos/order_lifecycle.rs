//! Order Lifecycle State Machine
//!
//! This example demonstrates an e-commerce order lifecycle.
//!
//! Key concepts:
//! - Declarative event tables via the `events!` macro
//! - Querying reachable states before acting
//! - Both error kinds: unknown events and illegal transitions
//!
//! Run with: cargo run --example order_lifecycle

use turnstile::{events, FiniteStateMachine};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
enum Order {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

fn main() {
    println!("=== Order Lifecycle State Machine ===\n");

    let mut fsm = FiniteStateMachine::new(
        Order::Pending,
        events! {
            "pay": [Order::Pending] => Order::Paid,
            "ship": [Order::Paid] => Order::Shipped,
            "deliver": [Order::Shipped] => Order::Delivered,
            "cancel": [Order::Pending, Order::Paid] => Order::Cancelled,
        },
    );

    println!("Initial state: {:?}", fsm.state());
    println!("Reachable now: {:?}\n", fsm.available_states());

    // Shipping before payment is rejected and the state is untouched.
    match fsm.fire("ship") {
        Ok(()) => println!("shipped?!"),
        Err(err) => println!("Rejected: {err}"),
    }
    println!("State after rejection: {:?}\n", fsm.state());

    // A typo'd event name is a different error kind.
    match fsm.fire("shp") {
        Ok(()) => println!("shipped?!"),
        Err(err) => println!("Rejected: {err}"),
    }

    println!("\nWalking the happy path:");
    for event in ["pay", "ship", "deliver"] {
        fsm.fire(event).expect("legal transition");
        println!("  fired {event:10} -> {:?}", fsm.state());
    }

    // Delivered is a dead end: nothing is reachable from it.
    println!("\nReachable from {:?}: {:?}", fsm.state(), fsm.available_states());
    println!(
        "Can we still cancel? {}",
        fsm.can_move_to(&Order::Cancelled)
    );

    println!("\n=== Example Complete ===");
}
