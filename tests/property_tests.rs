//! Property-based tests for the context and its two-state machine.
//!
//! These tests use proptest to drive random request sequences through a
//! context and compare the outcome with a simple model.

use proptest::prelude::*;
use statecraft::ConcreteState::{ConcreteStateA, ConcreteStateB};
use statecraft::{ConcreteState, Context, Request, State};

prop_compose! {
    fn arbitrary_state()(variant in 0..2u8) -> ConcreteState {
        match variant {
            0 => ConcreteStateA,
            _ => ConcreteStateB,
        }
    }
}

fn arbitrary_request() -> impl Strategy<Value = Request> {
    prop_oneof![Just(Request::First), Just(Request::Second)]
}

fn flips(state: &ConcreteState, request: Request) -> bool {
    matches!(
        (state, request),
        (ConcreteStateA, Request::First) | (ConcreteStateB, Request::Second)
    )
}

fn other(state: &ConcreteState) -> ConcreteState {
    match state {
        ConcreteStateA => ConcreteStateB,
        ConcreteStateB => ConcreteStateA,
    }
}

proptest! {
    #[test]
    fn context_follows_model(
        initial in arbitrary_state(),
        requests in prop::collection::vec(arbitrary_request(), 0..40)
    ) {
        let mut context = Context::new(initial.clone());
        let mut expected = initial;
        let mut flip_count = 0;

        for request in requests {
            if flips(&expected, request) {
                expected = other(&expected);
                flip_count += 1;
            }
            context.dispatch(request);
            prop_assert_eq!(context.current_state(), &expected);
        }

        prop_assert_eq!(context.history().len(), flip_count);
        let traces = context
            .transcript()
            .iter()
            .filter(|line| line.starts_with("Context: Transition to"))
            .count();
        prop_assert_eq!(traces, flip_count);
    }

    #[test]
    fn flipping_calls_alternate_states(
        initial in arbitrary_state(),
        requests in prop::collection::vec(arbitrary_request(), 1..40)
    ) {
        let mut context = Context::new(initial);
        for request in requests {
            context.dispatch(request);
        }

        for transition in context.history().transitions() {
            prop_assert_ne!(&transition.from, &transition.to);
        }
        for pair in context.history().transitions().windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
    }

    #[test]
    fn non_flipping_calls_never_change_state(
        initial in arbitrary_state(),
        repeats in 1..20usize
    ) {
        let request = match initial {
            ConcreteStateA => Request::Second,
            ConcreteStateB => Request::First,
        };
        let mut context = Context::new(initial.clone());

        for _ in 0..repeats {
            context.dispatch(request);
        }

        prop_assert_eq!(context.current_state(), &initial);
        prop_assert!(context.history().is_empty());
        prop_assert_eq!(context.transcript().len(), repeats);
    }

    #[test]
    fn transition_to_named_accepts_every_name(state in arbitrary_state()) {
        let mut context = Context::new(ConcreteStateA);
        prop_assert!(context.transition_to_named(state.name()).is_ok());
        prop_assert_eq!(context.current_state(), &state);
    }

    #[test]
    fn unknown_names_leave_context_untouched(name in "[a-z]{1,12}") {
        let mut context = Context::new(ConcreteStateB);
        prop_assert!(context.transition_to_named(&name).is_err());
        prop_assert_eq!(context.current_state(), &ConcreteStateB);
        prop_assert!(context.history().is_empty());
    }
}
