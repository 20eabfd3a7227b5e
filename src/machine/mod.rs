//! Keyed state machine with phase callbacks and veto-guarded transitions.
//!
//! A [`StateMachine`] maps string identifiers to a single callback of shape
//! `Fn(Phase) -> Flow`. Exactly one identifier is active at a time (or none,
//! before the first transition). Transitions dispatch `Exit` to the outgoing
//! state and `Enter` to the incoming one; either can veto by returning
//! [`Flow::Abort`]. A driver loop calls [`StateMachine::update`] once per
//! tick to dispatch `Update` to the active state.

mod builder;
mod error;
mod phase;
mod state_machine;

pub use builder::StateMachineBuilder;
pub use error::BuildError;
pub use phase::{Flow, Phase};
pub use state_machine::{StateFn, StateMachine};
