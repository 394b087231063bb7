//! Turnstile Gate
//!
//! The classic coin-operated turnstile, driven by events.
//!
//! Key concepts:
//! - Declarative configuration via the `configuration!` macro
//! - Event dispatch with `trigger`
//! - Rejected events leave the machine where it was
//!
//! Run with: cargo run --example turnstile_gate

use turnstile::{configuration, Machine};

fn main() {
    println!("=== Turnstile Gate Example ===\n");

    let config = configuration! {
        initial: "locked",
        states: {
            "locked" => { "coin" => "unlocked" },
            "unlocked" => { "push" => "locked" },
        }
    }
    .unwrap();

    let mut gate = Machine::new(config);
    println!("Gate starts: {}", gate.current_state());

    gate.trigger("coin").unwrap();
    println!("After a coin: {}", gate.current_state());

    gate.trigger("push").unwrap();
    println!("After a push: {}", gate.current_state());

    // Pushing a locked gate goes nowhere
    match gate.trigger("push") {
        Ok(()) => unreachable!(),
        Err(err) => println!("Pushing while locked: {err}"),
    }
    println!("Still: {}", gate.current_state());

    // One step back, one step forward
    gate.undo();
    println!("Undo returns to: {}", gate.current_state());
    gate.redo();
    println!("Redo moves back to: {}", gate.current_state());

    println!("\n=== Example Complete ===");
}
