//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when assembling a configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Add at least one state")]
    NoStates,

    #[error("Initial state '{state}' is not among the declared states")]
    UndeclaredInitialState { state: String },

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("State '{state}' declares more than one rule for event '{event}'")]
    DuplicateTransition { state: String, event: String },
}
