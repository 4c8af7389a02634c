//! Errors raised when naming or installing states.

use thiserror::Error;

/// Errors that can occur when resolving a state from outside the type system.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    /// The name does not match any variant of the state type
    #[error("Unrecognized state '{name}'")]
    InvalidState { name: String },
}
