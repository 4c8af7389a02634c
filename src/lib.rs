//! Statecraft: the State pattern in Rust
//!
//! A [`Context`] owns exactly one state and forwards every request to it.
//! The state decides what the request means and may replace itself by calling
//! [`Context::transition_to`] on the context it was handed.
//!
//! # Core Concepts
//!
//! - **State**: identity of a state via the `State` trait
//! - **Handler**: per-request behavior via the `Handler` trait
//! - **Context**: owner of the current state, its history, and a transcript
//!
//! # Example
//!
//! ```rust
//! use statecraft::{ConcreteState, Context};
//!
//! let mut context = Context::new(ConcreteState::ConcreteStateA);
//! context.request1();
//! assert_eq!(context.current_state(), &ConcreteState::ConcreteStateB);
//!
//! context.request2();
//! assert_eq!(context.current_state(), &ConcreteState::ConcreteStateA);
//!
//! let path = context.history().get_path();
//! assert_eq!(path.len(), 3);
//! ```

pub mod concrete;
pub mod context;
pub mod core;
pub mod error;
mod macros;

// Re-export commonly used types
pub use concrete::ConcreteState;
pub use context::{Context, Request};
pub use crate::core::{Handler, State, StateHistory, StateTransition};
pub use error::StateError;
