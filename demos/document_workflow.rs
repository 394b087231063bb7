//! Document Workflow
//!
//! An editorial pipeline built with the fluent builder API.
//!
//! Key concepts:
//! - Fluent construction with `ConfigurationBuilder` and `StateBuilder`
//! - Querying which states respond to an event
//! - Direct state changes and reset
//!
//! Run with: cargo run --example document_workflow

use turnstile::{ConfigurationBuilder, Machine, StateBuilder};

fn main() {
    println!("=== Document Workflow Example ===\n");

    let config = ConfigurationBuilder::new()
        .initial("draft")
        .state(StateBuilder::new("draft").on("submit", "review"))
        .state(
            StateBuilder::new("review")
                .on("approve", "published")
                .on("reject", "draft"),
        )
        .state(StateBuilder::new("published").on("retract", "draft"))
        .build()
        .unwrap();

    let mut doc = Machine::new(config);

    println!("All states: {:?}", doc.states());
    println!("States handling 'reject': {:?}", doc.states_handling("reject"));
    println!();

    doc.trigger("submit").unwrap();
    doc.trigger("approve").unwrap();
    println!("After submit + approve: {}", doc.current_state());

    // Editorial override: drop straight back to review
    doc.change_state("review").unwrap();
    println!("After override: {}", doc.current_state());

    doc.undo();
    println!("Undo restores: {}", doc.current_state());

    doc.reset();
    println!("Reset lands on: {}", doc.current_state());

    println!("\n=== Example Complete ===");
}
