//! The two-state machine shipped with the crate.
//!
//! `ConcreteStateA` moves to `ConcreteStateB` on request 1 and
//! `ConcreteStateB` moves back on request 2. Every other request leaves the
//! state where it is, so alternating requests cycle forever.

use crate::context::Context;
use crate::core::{Handler, State};
use crate::state_enum;

state_enum! {
    pub enum ConcreteState {
        ConcreteStateA,
        ConcreteStateB,
    }
}

impl ConcreteState {
    fn announce(&self, context: &mut Context<Self>, request: u8) {
        context.narrate(format!("{} handles request{request}.", self.name()));
    }

    fn announce_change(&self, context: &mut Context<Self>) {
        context.narrate(format!(
            "{} wants to change the state of the context.",
            self.name()
        ));
    }
}

impl Handler for ConcreteState {
    fn handle1(&self, context: &mut Context<Self>) {
        self.announce(context, 1);
        if let Self::ConcreteStateA = self {
            self.announce_change(context);
            context.transition_to(Self::ConcreteStateB);
        }
    }

    fn handle2(&self, context: &mut Context<Self>) {
        self.announce(context, 2);
        if let Self::ConcreteStateB = self {
            self.announce_change(context);
            context.transition_to(Self::ConcreteStateA);
        }
    }
}
