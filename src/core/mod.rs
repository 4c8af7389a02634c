//! Core state types and transition bookkeeping.
//!
//! This module contains the contract every state fulfills and the
//! history a [`Context`](crate::Context) keeps of its transitions:
//! - State identity via the `State` trait
//! - State behavior via the `Handler` trait
//! - Immutable history tracking

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Handler, State};
