//! Builder for assembling machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Configuration, StateConfig};

/// Builder for constructing configurations with a fluent API.
///
/// `build` checks what a hand-written [`Configuration`] literal cannot:
/// that an initial state was given and is declared, that no state is
/// declared twice, and that no state's table carries the same event twice.
///
/// # Example
///
/// ```rust
/// use turnstile::{ConfigurationBuilder, StateBuilder};
///
/// let config = ConfigurationBuilder::new()
///     .initial("draft")
///     .state(StateBuilder::new("draft").on("submit", "review"))
///     .state(StateBuilder::new("review").on("approve", "published"))
///     .state(StateBuilder::new("published"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "draft");
/// assert_eq!(config.state_names(), vec!["draft", "review", "published"]);
/// ```
pub struct ConfigurationBuilder {
    initial: Option<String>,
    states: Vec<StateConfig>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state using a builder.
    pub fn state(mut self, builder: StateBuilder) -> Self {
        self.states.push(builder.build());
        self
    }

    /// Add a pre-built state declaration.
    pub fn add_state(mut self, state: StateConfig) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple state declarations at once.
    pub fn states(mut self, states: Vec<StateConfig>) -> Self {
        self.states.extend(states);
        self
    }

    /// Build the configuration.
    ///
    /// Returns an error if required pieces are missing or a declaration
    /// table carries a duplicate key.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        for (i, state) in self.states.iter().enumerate() {
            if self.states[..i].iter().any(|seen| seen.name == state.name) {
                return Err(BuildError::DuplicateState {
                    state: state.name.clone(),
                });
            }

            for (j, rule) in state.transitions.iter().enumerate() {
                if state.transitions[..j].iter().any(|seen| seen.on == rule.on) {
                    return Err(BuildError::DuplicateTransition {
                        state: state.name.clone(),
                        event: rule.on.clone(),
                    });
                }
            }
        }

        if !self.states.iter().any(|state| state.name == initial) {
            return Err(BuildError::UndeclaredInitialState { state: initial });
        }

        Ok(Configuration {
            initial,
            states: self.states,
        })
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
