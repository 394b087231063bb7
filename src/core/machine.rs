//! The machine runtime: event dispatch and the single-step undo buffer.

use crate::core::config::Configuration;
use crate::core::error::TransitionError;
use serde::{Deserialize, Serialize};

/// A running state machine.
///
/// A `Machine` owns its [`Configuration`] and tracks three names: the
/// active state, the state it left on the last transition, and the state a
/// [`redo`](Machine::redo) would restore. The two history slots give
/// exactly one step of undo and one step of redo; older history is not
/// kept.
///
/// All operations are synchronous and apply fully or not at all. The
/// machine takes no locks; callers sharing one across threads must
/// serialize access themselves.
///
/// # Example
///
/// ```rust
/// use turnstile::{configuration, Machine};
///
/// let config = configuration! {
///     initial: "draft",
///     states: {
///         "draft" => { "submit" => "review" },
///         "review" => { "approve" => "published", "reject" => "draft" },
///         "published" => { },
///     }
/// }
/// .unwrap();
///
/// let mut machine = Machine::new(config);
/// machine.trigger("submit").unwrap();
/// machine.trigger("approve").unwrap();
/// assert_eq!(machine.current_state(), "published");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Machine {
    config: Configuration,
    current: String,
    previous: Option<String>,
    next: Option<String>,
}

impl Machine {
    /// Create a machine resting in the configuration's initial state.
    ///
    /// The configuration is taken as-is; nothing is validated here. A
    /// configuration whose `initial` names an undeclared state yields a
    /// machine whose first `trigger` fails, exactly as the tables dictate.
    pub fn new(config: Configuration) -> Self {
        let current = config.initial.clone();
        Self {
            config,
            current,
            previous: None,
            next: None,
        }
    }

    /// Name of the active state (pure).
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// The configuration this machine runs on (pure).
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Move directly to a declared state, bypassing the event tables.
    ///
    /// On success the departed state lands in the undo slot. A redo target
    /// armed by an earlier [`undo`](Machine::undo) is left in place, so a
    /// later `redo` can restore a state unrelated to this change; callers
    /// that want a clean slate should call
    /// [`clear_history`](Machine::clear_history) first.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::UnknownState`] and leaves the machine
    /// untouched when `state` is not declared in the configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{configuration, Machine};
    ///
    /// let config = configuration! {
    ///     initial: "idle",
    ///     states: {
    ///         "idle" => { "start" => "running" },
    ///         "running" => { "stop" => "idle" },
    ///     }
    /// }
    /// .unwrap();
    ///
    /// let mut machine = Machine::new(config);
    /// machine.change_state("running").unwrap();
    /// assert_eq!(machine.current_state(), "running");
    ///
    /// assert!(machine.change_state("exploded").is_err());
    /// assert_eq!(machine.current_state(), "running");
    /// ```
    pub fn change_state(&mut self, state: &str) -> Result<(), TransitionError> {
        if !self.config.contains(state) {
            return Err(TransitionError::UnknownState {
                state: state.to_string(),
            });
        }

        self.previous = Some(self.current.clone());
        self.current = state.to_string();
        Ok(())
    }

    /// Fire an event and follow the active state's table.
    ///
    /// On success the departed state lands in the undo slot.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::UnknownTransition`] and leaves the
    /// machine untouched when the active state has no rule for `event`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{configuration, Machine};
    ///
    /// let config = configuration! {
    ///     initial: "hungry",
    ///     states: {
    ///         "hungry" => { "eat" => "full" },
    ///         "full" => { },
    ///     }
    /// }
    /// .unwrap();
    ///
    /// let mut machine = Machine::new(config);
    /// machine.trigger("eat").unwrap();
    /// assert_eq!(machine.current_state(), "full");
    ///
    /// // "full" has no rule for "eat"
    /// assert!(machine.trigger("eat").is_err());
    /// assert_eq!(machine.current_state(), "full");
    /// ```
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|state| state.target_for(event));

        let Some(target) = target else {
            return Err(TransitionError::UnknownTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        let target = target.to_string();
        self.previous = Some(self.current.clone());
        self.current = target;
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// Only the active state is touched. The undo slot still names
    /// whatever state was recorded before the reset, so a following
    /// [`undo`](Machine::undo) jumps to that state rather than to the
    /// state the machine was in when `reset` was called.
    pub fn reset(&mut self) {
        self.current = self.config.initial.clone();
    }

    /// All declared state names, in declaration order (pure).
    pub fn states(&self) -> Vec<&str> {
        self.config.state_names()
    }

    /// Names of the states whose table handles `event`, in declaration
    /// order (pure). Empty when no state handles it.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config.states_handling(event)
    }

    /// Whether an [`undo`](Machine::undo) would currently succeed (pure).
    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// Whether a [`redo`](Machine::redo) would currently succeed (pure).
    pub fn can_redo(&self) -> bool {
        self.next.is_some()
    }

    /// Step back to the state recorded by the last transition.
    ///
    /// Returns `false` without touching anything when no step is recorded.
    /// Undoing consumes the record and arms the redo slot, so two undos in
    /// a row never both succeed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::{configuration, Machine};
    ///
    /// let config = configuration! {
    ///     initial: "hungry",
    ///     states: {
    ///         "hungry" => { "eat" => "full" },
    ///         "full" => { },
    ///     }
    /// }
    /// .unwrap();
    ///
    /// let mut machine = Machine::new(config);
    /// assert!(!machine.undo());
    ///
    /// machine.trigger("eat").unwrap();
    /// assert!(machine.undo());
    /// assert_eq!(machine.current_state(), "hungry");
    ///
    /// assert!(machine.redo());
    /// assert_eq!(machine.current_state(), "full");
    /// ```
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.previous.take() else {
            return false;
        };

        self.next = Some(self.current.clone());
        self.current = previous;
        true
    }

    /// Step forward again after an [`undo`](Machine::undo).
    ///
    /// Returns `false` without touching anything when no redo target is
    /// armed. Redoing consumes the target and re-arms the undo slot.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.next.take() else {
            return false;
        };

        self.previous = Some(self.current.clone());
        self.current = next;
        true
    }

    /// Forget both history slots. The active state is unaffected.
    pub fn clear_history(&mut self) {
        self.previous = None;
        self.next = None;
    }
}
