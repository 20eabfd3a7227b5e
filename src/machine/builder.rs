//! Builder for constructing state machines.

use super::error::BuildError;
use super::phase::{Flow, Phase};
use super::state_machine::{StateFn, StateMachine};
use std::rc::Rc;

/// Builder for constructing state machines with a fluent API.
///
/// Registers states up front and optionally activates an initial one as part
/// of `build`, so the machine comes back ready to tick.
///
/// # Example
///
/// ```rust
/// use respawn::machine::{Flow, StateMachineBuilder};
///
/// let machine = StateMachineBuilder::new()
///     .state("Idle", |_phase| Flow::Continue)
///     .state("Walk", |_phase| Flow::Continue)
///     .initial("Idle")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_id(), Some("Idle"));
/// ```
#[derive(Default)]
pub struct StateMachineBuilder {
    states: Vec<(String, StateFn)>,
    initial: Option<String>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state. Later registrations under the same identifier
    /// overwrite earlier ones, as with [`StateMachine::add`].
    pub fn state(mut self, id: impl Into<String>, callback: impl Fn(Phase) -> Flow + 'static) -> Self {
        self.states.push((id.into(), Rc::new(callback)));
        self
    }

    /// Register a pre-built callback handle.
    pub fn shared_state(mut self, id: impl Into<String>, callback: StateFn) -> Self {
        self.states.push((id.into(), callback));
        self
    }

    /// Set the state to activate during `build` (optional).
    pub fn initial(mut self, id: impl Into<String>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Build the machine, activating the initial state if one was given.
    ///
    /// Activation is a real transition, so the initial state's `Enter`
    /// callback fires and may veto.
    ///
    /// # Errors
    ///
    /// - [`BuildError::NoStates`] if nothing was registered.
    /// - [`BuildError::UnknownInitialState`] if the initial identifier was
    ///   never registered.
    /// - [`BuildError::InitialRejected`] if the initial state vetoed its own
    ///   `Enter`.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = StateMachine::new();
        for (id, callback) in self.states {
            machine.add_shared(id, callback);
        }

        if let Some(initial) = self.initial {
            if !machine.contains(&initial) {
                return Err(BuildError::UnknownInitialState(initial));
            }

            machine.transition(&initial);
            if machine.current_id() != Some(initial.as_str()) {
                return Err(BuildError::InitialRejected(initial));
            }
        }

        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_states() {
        let result = StateMachineBuilder::new().build();
        assert_eq!(result.err(), Some(BuildError::NoStates));
    }

    #[test]
    fn builder_without_initial_leaves_machine_inactive() {
        let machine = StateMachineBuilder::new()
            .state("Idle", |_| Flow::Continue)
            .build()
            .unwrap();

        assert_eq!(machine.current_id(), None);
        assert!(machine.contains("Idle"));
    }

    #[test]
    fn builder_activates_initial_state() {
        let machine = StateMachineBuilder::new()
            .state("Idle", |_| Flow::Continue)
            .state("Walk", |_| Flow::Continue)
            .initial("Idle")
            .build()
            .unwrap();

        assert_eq!(machine.current_id(), Some("Idle"));
    }

    #[test]
    fn builder_rejects_unknown_initial_state() {
        let result = StateMachineBuilder::new()
            .state("Idle", |_| Flow::Continue)
            .initial("Missing")
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::UnknownInitialState("Missing".to_owned()))
        );
    }

    #[test]
    fn builder_reports_initial_enter_veto() {
        let result = StateMachineBuilder::new()
            .state("Sealed", |phase| {
                if phase == Phase::Enter {
                    Flow::Abort
                } else {
                    Flow::Continue
                }
            })
            .initial("Sealed")
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::InitialRejected("Sealed".to_owned()))
        );
    }

    #[test]
    fn later_registration_overwrites_earlier() {
        use std::cell::Cell;

        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);

        let machine = StateMachineBuilder::new()
            .state("Idle", |_| Flow::Continue)
            .state("Idle", move |_| {
                counter.set(counter.get() + 1);
                Flow::Continue
            })
            .initial("Idle")
            .build()
            .unwrap();

        machine.update();
        assert_eq!(machine.len(), 1);
        assert_eq!(hits.get(), 2, "Enter then Update hit the overwriting state");
    }
}
