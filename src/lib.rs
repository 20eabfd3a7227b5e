//! Respawn: tick-driven runtime primitives
//!
//! Respawn provides two small, independent building blocks for applications
//! that run a cooperative, step-driven loop (game loops, simulations,
//! schedulers):
//!
//! - **[`ResourcePool`]**: a bounded collection of reusable,
//!   expensively-constructed objects. Instances are created lazily on
//!   demand, recycled through a caller-supplied availability predicate, and
//!   destroyed exactly once at teardown.
//! - **[`StateMachine`]**: named states keyed by string identifier, each a
//!   single callback dispatched with `Enter`/`Update`/`Exit` phases. A state
//!   can veto a transition in or out of itself by returning [`Flow::Abort`].
//!
//! Neither primitive depends on the other; an application composes them
//! (for example, a spawner owning a `ResourcePool<Projectile>` and a
//! `StateMachine` for behavior) from its own driver loop. The [`Registry`]
//! rounds the crate out with an explicit, test-injectable alternative to the
//! global-singleton pattern for shared services.
//!
//! # Example
//!
//! ```rust
//! use respawn::{Flow, Phase, StateMachine};
//!
//! let mut machine = StateMachine::new();
//! machine.add("Idle", |_phase| Flow::Continue);
//! machine.add("Walk", |phase| {
//!     if phase == Phase::Enter {
//!         // set up animation, velocity, ...
//!     }
//!     Flow::Continue
//! });
//!
//! machine.transition("Idle");
//! assert_eq!(machine.current_id(), Some("Idle"));
//!
//! // one call per tick from the driver loop
//! machine.update();
//!
//! machine.transition("Walk");
//! assert_eq!(machine.current_id(), Some("Walk"));
//! ```
//!
//! ```rust
//! use respawn::ResourcePool;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct Projectile {
//!     live: Cell<bool>,
//! }
//!
//! let mut pool = ResourcePool::with_capacity(
//!     || Rc::new(Projectile { live: Cell::new(false) }),
//!     |shot: &Rc<Projectile>| !shot.live.get(),
//!     |_shot| { /* free engine-side resources */ },
//!     8,
//! );
//!
//! let shot = pool.acquire().unwrap().unwrap();
//! shot.live.set(true); // checked out until the caller flips it back
//! ```

pub mod machine;
pub mod pool;
pub mod registry;

// Re-export commonly used types
pub use machine::{Flow, Phase, StateFn, StateMachine};
pub use pool::{PoolError, ResourcePool};
pub use registry::Registry;
