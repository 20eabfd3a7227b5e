//! Pool errors.

use thiserror::Error;

/// Errors reported by [`ResourcePool`](super::ResourcePool) operations.
///
/// Pool exhaustion is deliberately *not* an error — `acquire` signals it with
/// `Ok(None)` so the caller can retry on a later tick.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("pool has been disposed and no longer accepts operations")]
    Disposed,
}
