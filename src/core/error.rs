//! Runtime error types for machine operations.

use thiserror::Error;

/// Errors raised when a state change or event trigger cannot be applied.
///
/// The machine is left untouched when one of these is returned; a
/// transition either fully applies or not at all.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// Target of a direct state change is not declared in the configuration.
    #[error("State '{state}' is not declared in the configuration")]
    UnknownState { state: String },

    /// The active state has no rule for the triggered event.
    #[error("No transition for event '{event}' from state '{state}'")]
    UnknownTransition { state: String, event: String },
}
