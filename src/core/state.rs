//! Core traits implemented by every state a [`Context`] can hold.
//!
//! [`State`] carries identity (a name usable in traces and lookups) and
//! [`Handler`] carries behavior. Both are checked at compile time: a state
//! type that forgets a handler does not build.

use crate::context::Context;
use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;

/// Trait for values a [`Context`] can hold as its current state.
///
/// # Required Traits
///
/// - `Clone`: the context hands a copy of the current state to its handler,
///   leaving itself free to be borrowed mutably during the call
/// - `PartialEq` + `Debug`: states are compared and printed by tests
/// - `Serialize` + `Deserialize`: states can be stored alongside other data
/// - `FromStr`: states can be looked up by name
///
/// Most implementations come from the [`state_enum!`](crate::state_enum) macro.
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
/// use statecraft::StateError;
/// use serde::{Deserialize, Serialize};
/// use std::str::FromStr;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     On,
///     Off,
/// }
///
/// impl FromStr for Lamp {
///     type Err = StateError;
///
///     fn from_str(name: &str) -> Result<Self, Self::Err> {
///         match name {
///             "On" => Ok(Self::On),
///             "Off" => Ok(Self::Off),
///             other => Err(StateError::InvalidState { name: other.to_string() }),
///         }
///     }
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// assert!(Lamp::from_str("Dim").is_err());
/// ```
pub trait State:
    Clone
    + PartialEq
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
    + FromStr<Err = StateError>
{
    /// Get the state's name for traces and lookups.
    fn name(&self) -> &str;
}

/// Behavior a state performs for each request type.
///
/// Handlers receive the dispatching context explicitly and may call
/// [`Context::transition_to`] on it to replace themselves. The context
/// outlives the call, so a handler can never observe a missing owner.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{Handler, State};
/// use statecraft::{state_enum, Context};
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// impl Handler for Door {
///     fn handle1(&self, context: &mut Context<Self>) {
///         if *self == Door::Open {
///             context.transition_to(Door::Closed);
///         }
///     }
///
///     fn handle2(&self, context: &mut Context<Self>) {
///         if *self == Door::Closed {
///             context.transition_to(Door::Open);
///         }
///     }
/// }
///
/// let mut context = Context::new(Door::Open);
/// context.request1();
/// assert_eq!(context.current_state(), &Door::Closed);
/// ```
pub trait Handler: State {
    /// Perform the action for request type 1.
    fn handle1(&self, context: &mut Context<Self>);

    /// Perform the action for request type 2.
    fn handle2(&self, context: &mut Context<Self>);
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Idle,
            Busy,
        }
    }

    impl Handler for TestState {
        fn handle1(&self, context: &mut Context<Self>) {
            context.narrate(format!("{} got request1", self.name()));
            context.transition_to(TestState::Busy);
        }

        fn handle2(&self, context: &mut Context<Self>) {
            context.narrate(format!("{} got request2", self.name()));
            context.transition_to(TestState::Idle);
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn from_str_accepts_variant_names() {
        assert_eq!("Idle".parse::<TestState>(), Ok(TestState::Idle));
        assert_eq!("Busy".parse::<TestState>(), Ok(TestState::Busy));
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "idle".parse::<TestState>().unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidState {
                name: "idle".to_string()
            }
        );
    }

    #[test]
    fn handler_sees_its_own_context() {
        let mut context = Context::new(TestState::Idle);
        context.request1();
        assert_eq!(context.current_state(), &TestState::Busy);
        assert_eq!(context.transcript()[0], "Idle got request1");

        context.request2();
        assert_eq!(context.current_state(), &TestState::Idle);
        assert_eq!(context.history().get_path(), ["Idle", "Busy", "Idle"]);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
