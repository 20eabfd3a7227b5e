//! The keyed state machine.

use super::phase::{Flow, Phase};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

/// Shared handle to a state callback.
///
/// Callbacks are reference-counted so the machine can cache the active
/// callback *by value* at transition time instead of re-resolving the key on
/// every tick. Overwriting or removing the active state's registration
/// therefore does not affect the callback already in flight; the replacement
/// takes effect on the next transition into that identifier.
pub type StateFn = Rc<dyn Fn(Phase) -> Flow>;

/// A state machine over named states with `Enter`/`Update`/`Exit` phases.
///
/// Each registered identifier maps to one callback that receives every
/// [`Phase`] the machine dispatches to it. Transition legality is enforced
/// by the states themselves: the outgoing state may veto on `Exit` and the
/// incoming state may veto on `Enter` by returning [`Flow::Abort`].
///
/// The machine assumes a single-threaded, step-driven caller: one
/// [`transition`](Self::transition) or [`update`](Self::update) at a time,
/// driven from an external loop.
///
/// # Example
///
/// ```rust
/// use respawn::{Flow, Phase, StateMachine};
///
/// let mut machine = StateMachine::new();
/// machine.add("Idle", |_phase| Flow::Continue);
/// machine.add("Walk", |phase| {
///     if phase == Phase::Enter {
///         // kick off the walk animation, set velocity, ...
///     }
///     Flow::Continue
/// });
///
/// machine.transition("Walk");
/// assert_eq!(machine.current_id(), Some("Walk"));
///
/// machine.update(); // dispatches Phase::Update to "Walk"
/// ```
#[derive(Default)]
pub struct StateMachine {
    states: HashMap<String, StateFn>,
    current_id: Option<String>,
    current: Option<StateFn>,
}

impl StateMachine {
    /// Create an empty machine with no active state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite the callback for `id`.
    ///
    /// Registration alone never activates a state; a state becomes current
    /// only through [`transition`](Self::transition). Overwriting the
    /// *active* state's registration leaves the cached callback in place
    /// until the next transition into `id` (see [`StateFn`]).
    pub fn add(&mut self, id: impl Into<String>, state: impl Fn(Phase) -> Flow + 'static) {
        self.add_shared(id, Rc::new(state));
    }

    /// Register or overwrite a pre-built callback handle for `id`.
    ///
    /// Useful when one callback is shared between several identifiers.
    pub fn add_shared(&mut self, id: impl Into<String>, state: StateFn) {
        self.states.insert(id.into(), state);
    }

    /// Delete the registration for `id`, reporting whether it existed.
    ///
    /// Removing the *active* state does not transition away from it: the
    /// machine keeps dispatching `Update` to the cached callback, and
    /// [`is_dangling`](Self::is_dangling) starts reporting `true`. Leaving
    /// the machine in that condition is the caller's responsibility.
    pub fn remove(&mut self, id: &str) -> bool {
        self.states.remove(id).is_some()
    }

    /// Attempt to make `next` the active state.
    ///
    /// The steps run in order and short-circuit:
    ///
    /// 1. An unregistered `next` is silently ignored.
    /// 2. A self-transition (`next` already active) is silently ignored.
    /// 3. The active state, if any, receives `Exit`; [`Flow::Abort`] cancels
    ///    the transition with the active state unchanged.
    /// 4. The target receives `Enter`; [`Flow::Abort`] cancels the
    ///    transition. The outgoing `Exit` has already fired by then — that
    ///    side effect is deliberate and is not rolled back.
    /// 5. Only after both verdicts allow it does the machine commit the new
    ///    identifier and cache its callback.
    ///
    /// Nothing is reported for ignored or vetoed transitions; vetoes are
    /// control flow, not failures.
    pub fn transition(&mut self, next: &str) {
        let Some(target) = self.states.get(next).cloned() else {
            trace!(target = next, "ignoring transition to unregistered state");
            return;
        };

        if self.current_id.as_deref() == Some(next) {
            trace!(target = next, "ignoring self-transition");
            return;
        }

        if let Some(current) = &self.current {
            if current(Phase::Exit).is_abort() {
                trace!(target = next, "transition vetoed on Exit");
                return;
            }
        }

        if target(Phase::Enter).is_abort() {
            trace!(target = next, "transition vetoed on Enter");
            return;
        }

        self.current_id = Some(next.to_owned());
        self.current = Some(target);
        trace!(state = next, "transition committed");
    }

    /// Dispatch `Update` to the active state, if any.
    ///
    /// The callback's verdict is ignored; only `Enter` and `Exit` can veto.
    pub fn update(&self) {
        if let Some(current) = &self.current {
            let _ = current(Phase::Update);
        }
    }

    /// Identifier of the active state, or `None` before the first
    /// successful transition.
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Whether a callback is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no states are registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether the active identifier is no longer registered.
    ///
    /// This happens when [`remove`](Self::remove) deletes the active state.
    /// The machine still drives the cached callback; the caller decides how
    /// to recover.
    pub fn is_dangling(&self) -> bool {
        match &self.current_id {
            Some(id) => !self.states.contains_key(id),
            None => false,
        }
    }
}
