//! Builder for declaring a single state and its event rules.

use crate::core::{StateConfig, TransitionRule};

/// Builder for one state declaration with a fluent API.
///
/// # Example
///
/// ```rust
/// use turnstile::StateBuilder;
///
/// let state = StateBuilder::new("review")
///     .on("approve", "published")
///     .on("reject", "draft")
///     .build();
///
/// assert_eq!(state.name, "review");
/// assert_eq!(state.target_for("reject"), Some("draft"));
/// ```
pub struct StateBuilder {
    name: String,
    transitions: Vec<TransitionRule>,
}

impl StateBuilder {
    /// Start declaring a state with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// Add an event rule: when `event` fires, move to `target`.
    ///
    /// Rules keep the order they were added in. Duplicate event keys are
    /// reported by [`ConfigurationBuilder::build`](crate::builder::ConfigurationBuilder::build).
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push(TransitionRule {
            on: event.into(),
            target: target.into(),
        });
        self
    }

    /// Build the state declaration.
    pub fn build(self) -> StateConfig {
        StateConfig {
            name: self.name,
            transitions: self.transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_state_without_rules() {
        let state = StateBuilder::new("terminal").build();

        assert_eq!(state.name, "terminal");
        assert!(state.transitions.is_empty());
    }

    #[test]
    fn on_adds_rules_in_order() {
        let state = StateBuilder::new("closed")
            .on("lock", "locked")
            .on("open", "open")
            .build();

        assert_eq!(state.transitions.len(), 2);
        assert_eq!(state.transitions[0].on, "lock");
        assert_eq!(state.transitions[1].on, "open");
    }

    #[test]
    fn built_state_resolves_targets() {
        let state = StateBuilder::new("hungry").on("eat", "full").build();

        assert_eq!(state.target_for("eat"), Some("full"));
        assert!(!state.handles("sleep"));
    }
}
