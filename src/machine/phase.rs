//! Lifecycle phases and the callback verdict type.

use serde::{Deserialize, Serialize};

/// Lifecycle phase dispatched to a state's callback.
///
/// Phases are events delivered *to* a state, not machine-level states: the
/// machine's real state is its currently active identifier.
///
/// - `Enter` — dispatched to the target state during a transition. Returning
///   [`Flow::Abort`] vetoes the transition.
/// - `Update` — dispatched once per tick to the active state. The verdict is
///   ignored.
/// - `Exit` — dispatched to the outgoing state before a transition commits.
///   Returning [`Flow::Abort`] vetoes the transition before `Enter` fires.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    Enter,
    Update,
    Exit,
}

/// Verdict returned by a state callback.
///
/// Only `Enter` and `Exit` consult the verdict; an `Abort` during either
/// phase cancels the in-progress transition. This is a control signal, not
/// an error — a state that always aborts `Exit` is a deliberate trap state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Flow {
    /// Allow the transition to proceed.
    Continue,
    /// Veto the in-progress transition.
    Abort,
}

impl Flow {
    /// Whether this verdict vetoes the transition.
    pub fn is_abort(self) -> bool {
        matches!(self, Flow::Abort)
    }

    /// Whether this verdict allows the transition to proceed.
    pub fn is_continue(self) -> bool {
        matches!(self, Flow::Continue)
    }
}
