//! The context that owns a state and delegates requests to it.

use crate::core::{Handler, StateHistory, StateTransition};
use crate::error::StateError;
use tracing::{debug, info};

/// The two request types a [`Context`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Routed to [`Handler::handle1`]
    First,
    /// Routed to [`Handler::handle2`]
    Second,
}

/// Holds the current state and forwards requests to it.
///
/// The context always owns exactly one state. Handlers receive the context
/// mutably and replace that state through [`transition_to`](Self::transition_to);
/// the previous state is dropped at that point. The history keeps state names
/// only, and both the history and the transcript can be drained with
/// [`take_history`](Self::take_history) and [`take_transcript`](Self::take_transcript).
///
/// # Example
///
/// ```rust
/// use statecraft::{ConcreteState, Context};
///
/// let mut context = Context::new(ConcreteState::ConcreteStateA);
/// context.request1();
/// context.request2();
///
/// assert_eq!(context.current_state(), &ConcreteState::ConcreteStateA);
/// assert_eq!(context.history().len(), 2);
/// ```
#[derive(Debug)]
pub struct Context<S: Handler> {
    current: S,
    history: StateHistory,
    transcript: Vec<String>,
}

impl<S: Handler> Context<S> {
    /// Create a context holding `initial`.
    ///
    /// Installing the initial state is not a transition: nothing is
    /// recorded in the history or narrated.
    pub fn new(initial: S) -> Self {
        debug!(state = initial.name(), "Context created");
        Self {
            current: initial,
            history: StateHistory::new(),
            transcript: Vec::new(),
        }
    }

    /// Replace the current state with `next`, dropping the old one.
    pub fn transition_to(&mut self, next: S) {
        self.narrate(format!("Context: Transition to {}", next.name()));
        info!(from = self.current.name(), to = next.name(), "State transition");

        self.history.push(StateTransition::between(&self.current, &next));
        self.current = next;
    }

    /// Transition to the state called `name`.
    ///
    /// Unknown names are rejected before the context is touched.
    ///
    /// ```rust
    /// use statecraft::{ConcreteState, Context, StateError};
    ///
    /// let mut context = Context::new(ConcreteState::ConcreteStateA);
    /// context.transition_to_named("ConcreteStateB").unwrap();
    /// assert_eq!(context.current_state(), &ConcreteState::ConcreteStateB);
    ///
    /// let err = context.transition_to_named("ConcreteStateC").unwrap_err();
    /// assert!(matches!(err, StateError::InvalidState { .. }));
    /// assert_eq!(context.history().len(), 1);
    /// ```
    pub fn transition_to_named(&mut self, name: &str) -> Result<(), StateError> {
        let next = name.parse::<S>()?;
        self.transition_to(next);
        Ok(())
    }

    /// Forward to the current state's `handle1`.
    pub fn request1(&mut self) {
        let state = self.current.clone();
        state.handle1(self);
    }

    /// Forward to the current state's `handle2`.
    pub fn request2(&mut self) {
        let state = self.current.clone();
        state.handle2(self);
    }

    /// Forward `request` to the matching request method.
    pub fn dispatch(&mut self, request: Request) {
        match request {
            Request::First => self.request1(),
            Request::Second => self.request2(),
        }
    }

    /// Append a line to the transcript.
    pub fn narrate(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug!("{line}");
        self.transcript.push(line);
    }

    /// The state currently owned by the context.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Transitions recorded since creation or the last `take_history`.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Remove and return the recorded history, leaving it empty.
    pub fn take_history(&mut self) -> StateHistory {
        std::mem::take(&mut self.history)
    }

    /// Every narrated line, oldest first.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Remove and return the narrated lines, leaving the transcript empty.
    pub fn take_transcript(&mut self) -> Vec<String> {
        std::mem::take(&mut self.transcript)
    }
}
