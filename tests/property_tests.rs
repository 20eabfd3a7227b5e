//! Property-based tests for the pool and state machine.
//!
//! These tests use proptest to verify invariants hold across
//! many randomly generated call sequences.

use proptest::prelude::*;
use respawn::{Flow, Phase, ResourcePool, StateMachine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Pool whose instances are never reusable, counting creations.
fn hot_pool(capacity: usize) -> (ResourcePool<i32>, Rc<Cell<usize>>) {
    let created = Rc::new(Cell::new(0));
    let counter = Rc::clone(&created);
    let pool = ResourcePool::with_capacity(
        move || {
            counter.set(counter.get() + 1);
            counter.get() as i32
        },
        |_: &i32| false,
        |_| {},
        capacity,
    );
    (pool, created)
}

const REGISTERED: [&str; 3] = ["A", "B", "C"];

prop_compose! {
    fn arbitrary_target()(index in 0..5usize) -> &'static str {
        // three registered states plus two that never exist
        ["A", "B", "C", "Missing", "Ghost"][index]
    }
}

proptest! {
    #[test]
    fn pool_never_exceeds_capacity(
        capacity in 1..16usize,
        calls in 0..64usize,
    ) {
        let (mut pool, created) = hot_pool(capacity);

        for _ in 0..calls {
            let _ = pool.acquire().unwrap();
            prop_assert!(pool.len() <= capacity);
        }

        prop_assert_eq!(created.get(), calls.min(capacity));
    }

    #[test]
    fn pool_exhaustion_is_signalled_not_raised(
        capacity in 1..8usize,
        extra in 1..8usize,
    ) {
        let (mut pool, _) = hot_pool(capacity);

        for _ in 0..capacity {
            prop_assert!(pool.acquire().unwrap().is_some());
        }
        for _ in 0..extra {
            prop_assert_eq!(pool.acquire(), Ok(None));
        }
    }

    #[test]
    fn reusable_pool_creates_at_most_once(calls in 1..32usize) {
        let created = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&created);
        let mut pool = ResourcePool::new(
            move || {
                counter.set(counter.get() + 1);
                0i32
            },
            |_: &i32| true,
            |_| {},
        );

        for _ in 0..calls {
            prop_assert!(pool.acquire().unwrap().is_some());
        }

        prop_assert_eq!(created.get(), 1);
        prop_assert_eq!(pool.len(), 1);
    }

    #[test]
    fn disposal_destroys_exactly_what_was_created(
        capacity in 1..8usize,
        calls in 0..24usize,
    ) {
        let destroyed = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&destroyed);
        let mut pool = ResourcePool::with_capacity(
            || 0i32,
            |_: &i32| false,
            move |_| counter.set(counter.get() + 1),
            capacity,
        );

        for _ in 0..calls {
            let _ = pool.acquire().unwrap();
        }
        let held = pool.len();

        pool.dispose().unwrap();
        prop_assert_eq!(destroyed.get(), held);
        prop_assert_eq!(pool.len(), 0);
    }

    #[test]
    fn machine_only_activates_registered_states(
        targets in prop::collection::vec(arbitrary_target(), 1..24)
    ) {
        let mut machine = StateMachine::new();
        for id in REGISTERED {
            machine.add(id, |_| Flow::Continue);
        }

        let mut expected: Option<&str> = None;
        for target in targets {
            machine.transition(target);
            if REGISTERED.contains(&target) {
                expected = Some(target);
            }
            prop_assert_eq!(machine.current_id(), expected);
        }
    }

    #[test]
    fn committed_transition_observes_exit_then_enter(
        targets in prop::collection::vec(arbitrary_target(), 1..24)
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut machine = StateMachine::new();
        for id in REGISTERED {
            let log = Rc::clone(&log);
            machine.add(id, move |phase| {
                log.borrow_mut().push(phase);
                Flow::Continue
            });
        }

        for target in targets {
            let had_current = machine.current_id().is_some();
            let commits = REGISTERED.contains(&target)
                && machine.current_id() != Some(target);

            log.borrow_mut().clear();
            machine.transition(target);

            let observed = log.borrow().clone();
            if commits && had_current {
                prop_assert_eq!(observed, vec![Phase::Exit, Phase::Enter]);
            } else if commits {
                prop_assert_eq!(observed, vec![Phase::Enter]);
            } else {
                prop_assert!(observed.is_empty());
            }
        }
    }

    #[test]
    fn self_transition_never_invokes_callbacks(index in 0..3usize) {
        let hits = Rc::new(Cell::new(0usize));
        let mut machine = StateMachine::new();
        for id in REGISTERED {
            let hits = Rc::clone(&hits);
            machine.add(id, move |_| {
                hits.set(hits.get() + 1);
                Flow::Continue
            });
        }

        let id = REGISTERED[index];
        machine.transition(id);
        let after_entry = hits.get();

        machine.transition(id);
        prop_assert_eq!(hits.get(), after_entry);
        prop_assert_eq!(machine.current_id(), Some(id));
    }

    #[test]
    fn update_count_matches_tick_count(ticks in 0..32usize) {
        let updates = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&updates);
        let mut machine = StateMachine::new();
        machine.add("Run", move |phase| {
            if phase == Phase::Update {
                counter.set(counter.get() + 1);
            }
            Flow::Continue
        });
        machine.transition("Run");

        for _ in 0..ticks {
            machine.update();
        }

        prop_assert_eq!(updates.get(), ticks);
    }
}
