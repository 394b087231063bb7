//! Declarative machine configuration.
//!
//! A `Configuration` is the immutable description of a machine's shape:
//! the initial state plus every declared state with its event table.
//! States keep their declaration order, so listings report them in the
//! order the author wrote them down.

use serde::{Deserialize, Serialize};

/// A single event rule: when `on` fires, the machine moves to `target`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TransitionRule {
    /// Event identifier that activates this rule
    pub on: String,
    /// State the machine moves to when the event fires
    pub target: String,
}

/// A declared state: its name plus the events it responds to.
///
/// Event keys are expected to be unique within one state; the builder
/// enforces this, a hand-written literal is taken as-is and the first
/// matching rule wins on lookup.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StateConfig {
    /// Name of the state
    pub name: String,
    /// Event table for the state, in declaration order
    pub transitions: Vec<TransitionRule>,
}

impl StateConfig {
    /// Look up the target state for an event, if this state handles it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::StateBuilder;
    ///
    /// let state = StateBuilder::new("hungry").on("eat", "full").build();
    ///
    /// assert_eq!(state.target_for("eat"), Some("full"));
    /// assert_eq!(state.target_for("sleep"), None);
    /// ```
    pub fn target_for(&self, event: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|rule| rule.on == event)
            .map(|rule| rule.target.as_str())
    }

    /// Check whether this state has a rule for the event.
    pub fn handles(&self, event: &str) -> bool {
        self.target_for(event).is_some()
    }
}

/// Immutable description of a machine's shape.
///
/// A configuration is plain data. It performs no structural validation of
/// its own; use [`ConfigurationBuilder`](crate::builder::ConfigurationBuilder)
/// to get duplicate and missing-declaration checks at build time.
///
/// # Example
///
/// ```rust
/// use turnstile::{Configuration, StateConfig, TransitionRule};
///
/// let config = Configuration {
///     initial: "closed".to_string(),
///     states: vec![
///         StateConfig {
///             name: "closed".to_string(),
///             transitions: vec![TransitionRule {
///                 on: "open".to_string(),
///                 target: "open".to_string(),
///             }],
///         },
///         StateConfig {
///             name: "open".to_string(),
///             transitions: vec![],
///         },
///     ],
/// };
///
/// assert!(config.contains("open"));
/// assert_eq!(config.state_names(), vec!["closed", "open"]);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Configuration {
    /// Name of the state a fresh machine starts in
    pub initial: String,
    /// Declared states, in declaration order
    pub states: Vec<StateConfig>,
}

impl Configuration {
    /// Find a declared state by name.
    pub fn state(&self, name: &str) -> Option<&StateConfig> {
        self.states.iter().find(|state| state.name == name)
    }

    /// Check whether a state name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.state(name).is_some()
    }

    /// All declared state names, in declaration order.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|state| state.name.as_str()).collect()
    }

    /// Names of the states whose table handles `event`, in declaration order.
    ///
    /// Returns an empty vec when no state handles the event.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::configuration;
    ///
    /// let config = configuration! {
    ///     initial: "normal",
    ///     states: {
    ///         "normal" => { "study" => "busy", "get_hungry" => "hungry" },
    ///         "busy" => { "get_hungry" => "hungry" },
    ///         "hungry" => { "eat" => "normal" },
    ///     }
    /// }
    /// .unwrap();
    ///
    /// assert_eq!(config.states_handling("get_hungry"), vec!["normal", "busy"]);
    /// assert!(config.states_handling("fly").is_empty());
    /// ```
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|state| state.handles(event))
            .map(|state| state.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door_config() -> Configuration {
        Configuration {
            initial: "locked".to_string(),
            states: vec![
                StateConfig {
                    name: "locked".to_string(),
                    transitions: vec![TransitionRule {
                        on: "unlock".to_string(),
                        target: "closed".to_string(),
                    }],
                },
                StateConfig {
                    name: "closed".to_string(),
                    transitions: vec![
                        TransitionRule {
                            on: "lock".to_string(),
                            target: "locked".to_string(),
                        },
                        TransitionRule {
                            on: "open".to_string(),
                            target: "open".to_string(),
                        },
                    ],
                },
                StateConfig {
                    name: "open".to_string(),
                    transitions: vec![TransitionRule {
                        on: "close".to_string(),
                        target: "closed".to_string(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn state_finds_declared_states() {
        let config = door_config();

        assert!(config.state("locked").is_some());
        assert!(config.state("open").is_some());
        assert!(config.state("ajar").is_none());
    }

    #[test]
    fn contains_matches_declared_names_only() {
        let config = door_config();

        assert!(config.contains("closed"));
        assert!(!config.contains("CLOSED"));
        assert!(!config.contains(""));
    }

    #[test]
    fn state_names_preserve_declaration_order() {
        let config = door_config();

        assert_eq!(config.state_names(), vec!["locked", "closed", "open"]);
    }

    #[test]
    fn target_for_follows_the_event_table() {
        let config = door_config();
        let closed = config.state("closed").unwrap();

        assert_eq!(closed.target_for("open"), Some("open"));
        assert_eq!(closed.target_for("lock"), Some("locked"));
        assert_eq!(closed.target_for("unlock"), None);
    }

    #[test]
    fn handles_reports_table_membership() {
        let config = door_config();

        assert!(config.state("locked").unwrap().handles("unlock"));
        assert!(!config.state("locked").unwrap().handles("open"));
    }

    #[test]
    fn states_handling_filters_in_declaration_order() {
        let config = door_config();

        assert_eq!(config.states_handling("lock"), vec!["closed"]);
        assert_eq!(config.states_handling("unlock"), vec!["locked"]);
        assert!(config.states_handling("kick").is_empty());
    }

    #[test]
    fn states_handling_can_match_several_states() {
        let mut config = door_config();
        config.states[2].transitions.push(TransitionRule {
            on: "lock".to_string(),
            target: "locked".to_string(),
        });

        assert_eq!(config.states_handling("lock"), vec!["closed", "open"]);
    }

    #[test]
    fn configuration_serializes_correctly() {
        let config = door_config();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Configuration = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
