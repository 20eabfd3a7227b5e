//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("no states registered. Call .state(id, callback) before .build()")]
    NoStates,

    #[error("initial state '{0}' is not registered")]
    UnknownInitialState(String),

    #[error("initial state '{0}' vetoed Enter")]
    InitialRejected(String),
}
