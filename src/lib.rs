//! Turnstile: a declarative, table-driven state machine library
//!
//! A turnstile machine is one self-contained value: a [`Configuration`]
//! describing the states and their per-state event tables, the name of the
//! active state, and a two-slot history buffer giving exactly one step of
//! undo and one step of redo.
//!
//! # Core Concepts
//!
//! - **Configuration**: declarative shape of the machine (the initial state
//!   plus every declared state with its event table)
//! - **Machine**: the runtime value that tracks the active state and applies
//!   transitions by event lookup or direct assignment
//! - **Undo/redo buffer**: single-slot history in each direction; a
//!   transition arms undo, an undo arms redo
//!
//! # Example
//!
//! ```rust
//! use turnstile::{configuration, Machine};
//!
//! let config = configuration! {
//!     initial: "hungry",
//!     states: {
//!         "hungry" => { "eat" => "full" },
//!         "full" => { "wait" => "hungry" },
//!     }
//! }
//! .unwrap();
//!
//! let mut machine = Machine::new(config);
//! assert_eq!(machine.current_state(), "hungry");
//!
//! machine.trigger("eat").unwrap();
//! assert_eq!(machine.current_state(), "full");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "hungry");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "full");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigurationBuilder, StateBuilder};
pub use core::{Configuration, Machine, StateConfig, TransitionError, TransitionRule};
