//! Property-based tests for the transition interpreter.
//!
//! These tests use proptest to verify the interpreter's contract holds
//! across many randomly generated event sequences.

use proptest::prelude::*;
use statechart::builder::ChartBuilder;
use statechart::chart::{Chart, EventTarget, TransitionEntry};
use statechart::machine::Machine;
use statechart::{event_enum, state_enum};

state_enum! {
    enum Light {
        Green,
        Yellow,
        Red,
    }
}

event_enum! {
    enum Signal {
        Timer,
    }
}

state_enum! {
    enum Counter {
        Active,
    }
}

event_enum! {
    enum CounterEvent {
        Increment,
        Decrement,
    }
}

state_enum! {
    enum Fetch {
        Idle,
        Loading,
        Success,
        Cancelled,
        Failure,
    }
}

event_enum! {
    enum FetchEvent {
        Fetch,
        Resolve,
        Reject,
        Retry,
    }
}

fn light_chart() -> Chart<Light, Signal, ()> {
    ChartBuilder::new(Light::Green, ())
        .state(
            Light::Green,
            [TransitionEntry::on([(
                Signal::Timer,
                EventTarget::simple(Light::Yellow),
            )])],
        )
        .state(
            Light::Yellow,
            [TransitionEntry::on([(
                Signal::Timer,
                EventTarget::simple(Light::Red),
            )])],
        )
        .state(
            Light::Red,
            [TransitionEntry::on([(
                Signal::Timer,
                EventTarget::simple(Light::Green),
            )])],
        )
        .build()
}

fn guarded_counter() -> Chart<Counter, CounterEvent, i64> {
    ChartBuilder::new(Counter::Active, 0)
        .state(
            Counter::Active,
            [TransitionEntry::on([
                (
                    CounterEvent::Increment,
                    EventTarget::with_actions(Counter::Active, ["increment"]),
                ),
                (
                    CounterEvent::Decrement,
                    EventTarget::with_actions_and_guard(
                        Counter::Active,
                        ["decrement"],
                        "not_negative",
                    ),
                ),
            ])],
        )
        .action("increment", |count| count + 1)
        .action("decrement", |count| count - 1)
        .guard("not_negative", |count: &i64| *count >= 0)
        .build()
}

fn fetch_chart() -> Chart<Fetch, FetchEvent, u32> {
    ChartBuilder::new(Fetch::Idle, 0)
        .state(
            Fetch::Idle,
            [TransitionEntry::on([(
                FetchEvent::Fetch,
                EventTarget::simple(Fetch::Loading),
            )])],
        )
        .state(
            Fetch::Loading,
            [TransitionEntry::on([
                (FetchEvent::Resolve, EventTarget::simple(Fetch::Success)),
                (FetchEvent::Reject, EventTarget::simple(Fetch::Failure)),
            ])],
        )
        .no_transitions(Fetch::Success)
        .final_state(Fetch::Cancelled)
        .state(
            Fetch::Failure,
            [TransitionEntry::on([
                (
                    FetchEvent::Retry,
                    EventTarget::with_action(Fetch::Loading, |retries: u32| retries + 1),
                ),
                (FetchEvent::Reject, EventTarget::simple(Fetch::Cancelled)),
            ])],
        )
        .build()
}

prop_compose! {
    fn arbitrary_fetch_event()(variant in 0..4u8) -> FetchEvent {
        match variant {
            0 => FetchEvent::Fetch,
            1 => FetchEvent::Resolve,
            2 => FetchEvent::Reject,
            _ => FetchEvent::Retry,
        }
    }
}

prop_compose! {
    fn arbitrary_counter_event()(variant in 0..2u8) -> CounterEvent {
        match variant {
            0 => CounterEvent::Increment,
            _ => CounterEvent::Decrement,
        }
    }
}

proptest! {
    #[test]
    fn light_position_follows_timer_count(steps in 0usize..30) {
        let mut machine = Machine::from_chart(light_chart());
        let cycle = [Light::Green, Light::Yellow, Light::Red];

        for i in 1..=steps {
            let state = machine.transition(Signal::Timer);
            prop_assert_eq!(state, cycle[i % 3].clone());
        }
    }

    #[test]
    fn counter_matches_reference_model(
        events in prop::collection::vec(arbitrary_counter_event(), 0..40)
    ) {
        let mut machine = Machine::from_chart(guarded_counter());
        let mut model: i64 = 0;

        for event in events {
            match event {
                CounterEvent::Increment => model += 1,
                CounterEvent::Decrement if model > 0 => model -= 1,
                CounterEvent::Decrement => {}
            }
            machine.transition(event);
            prop_assert_eq!(machine.context(), &model);
        }
    }

    #[test]
    fn counter_context_never_negative(
        events in prop::collection::vec(arbitrary_counter_event(), 0..40)
    ) {
        let mut machine = Machine::from_chart(guarded_counter());

        for event in events {
            machine.transition(event);
            prop_assert!(*machine.context() >= 0);
        }
    }

    #[test]
    fn liveness_is_monotonic(
        events in prop::collection::vec(arbitrary_fetch_event(), 0..30)
    ) {
        let mut machine = Machine::from_chart(fetch_chart());
        let mut seen_halted = false;

        for event in events {
            machine.transition(event);
            if seen_halted {
                prop_assert!(!machine.is_alive());
            }
            seen_halted = seen_halted || !machine.is_alive();
        }
    }

    #[test]
    fn halted_machine_is_frozen(
        events in prop::collection::vec(arbitrary_fetch_event(), 0..20)
    ) {
        let mut machine = Machine::from_chart(fetch_chart());
        machine.transition(FetchEvent::Fetch);
        machine.transition(FetchEvent::Resolve);
        // Departing from Success halts: it is declared with no transitions.
        machine.transition(FetchEvent::Resolve);
        prop_assert!(!machine.is_alive());

        let state = machine.current_state().clone();
        let context = *machine.context();
        let committed = machine.log().records().len();

        for event in events {
            prop_assert_eq!(machine.transition(event), state.clone());
            prop_assert_eq!(machine.context(), &context);
            prop_assert_eq!(machine.log().records().len(), committed);
        }
    }

    #[test]
    fn unhandled_events_are_idempotent(
        events in prop::collection::vec(arbitrary_fetch_event(), 0..20)
    ) {
        // From Idle only Fetch is handled; everything else must leave the
        // machine exactly as it was.
        let mut machine = Machine::from_chart(fetch_chart());

        for event in events.into_iter().filter(|event| *event != FetchEvent::Fetch) {
            let state = machine.transition(event);
            prop_assert_eq!(state, Fetch::Idle);
            prop_assert_eq!(machine.context(), &0);
            prop_assert!(machine.is_alive());
        }
    }

    #[test]
    fn rejected_batches_never_leak_partial_context(
        events in prop::collection::vec(arbitrary_counter_event(), 1..40)
    ) {
        // The decrement guard always fails here, so the two-action batch
        // must never leave any partial effect behind.
        let chart = ChartBuilder::new(Counter::Active, 0)
            .state(
                Counter::Active,
                [TransitionEntry::on([
                    (
                        CounterEvent::Increment,
                        EventTarget::with_actions(Counter::Active, ["increment"]),
                    ),
                    (
                        CounterEvent::Decrement,
                        EventTarget::with_actions_and_guard(
                            Counter::Active,
                            ["decrement", "decrement"],
                            "never",
                        ),
                    ),
                ])],
            )
            .action("increment", |count: i64| count + 1)
            .action("decrement", |count: i64| count - 1)
            .guard("never", |_: &i64| false)
            .build();

        let mut machine = Machine::from_chart(chart);
        let mut expected = 0i64;

        for event in events {
            if event == CounterEvent::Increment {
                expected += 1;
            }
            machine.transition(event);
            prop_assert_eq!(machine.context(), &expected);
        }
    }
}
