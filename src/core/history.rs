//! State transition history tracking.
//!
//! Every call to [`Context::transition_to`](crate::Context::transition_to)
//! appends one [`StateTransition`] to the context's [`StateHistory`].
//! Transitions hold state names, not states, so a replaced state is
//! released as soon as the context lets go of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateTransition;
/// use statecraft::ConcreteState;
///
/// let transition = StateTransition::between(
///     &ConcreteState::ConcreteStateA,
///     &ConcreteState::ConcreteStateB,
/// );
/// assert_eq!(transition.from, "ConcreteStateA");
/// assert_eq!(transition.to, "ConcreteStateB");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Name of the state being replaced
    pub from: String,
    /// Name of the state installed in its place
    pub to: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Record a transition between two states, stamped now.
    pub fn between<S: super::State>(from: &S, to: &S) -> Self {
        Self {
            from: from.name().to_string(),
            to: to.name().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// [`record`](Self::record) returns a new history with the transition
/// appended and leaves the original alone; [`push`](Self::push) appends in
/// place.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateHistory, StateTransition};
/// use statecraft::ConcreteState::{ConcreteStateA, ConcreteStateB};
///
/// let history = StateHistory::new()
///     .record(StateTransition::between(&ConcreteStateA, &ConcreteStateB))
///     .record(StateTransition::between(&ConcreteStateB, &ConcreteStateA));
///
/// let path = history.get_path();
/// assert_eq!(path, ["ConcreteStateA", "ConcreteStateB", "ConcreteStateA"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// Get the names of the states traversed.
    ///
    /// Returns the `from` name of the first transition followed by the
    /// `to` name of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last transition, `None` if empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
