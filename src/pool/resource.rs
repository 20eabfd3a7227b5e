//! The generic resource pool.

use super::error::PoolError;
use tracing::trace;

/// Lifecycle hooks supplied by the pool's owner.
///
/// Dropped as a unit when the pool is disposed, so no hook can fire on a
/// disposed pool.
struct Hooks<T> {
    create: Box<dyn FnMut() -> T>,
    is_available: Box<dyn Fn(&T) -> bool>,
    destroy: Box<dyn FnMut(T)>,
}

/// A bounded pool of reusable instances of `T`.
///
/// The pool owns every instance it has created and hands out *shared* copies
/// (`T: Clone` — in practice a handle type such as `Rc<...>` or a `Copy`
/// value). It never tracks checked-out state itself: reuse eligibility is
/// decided solely by the `is_available` predicate, which lets the owner
/// encode arbitrary policy — an "inactive" flag, a reference count, a
/// cooldown timer — without the pool knowing the resource's shape.
///
/// Instances are created lazily, one per `acquire` that finds nothing
/// reusable, and only destroyed at disposal. There is no partial eviction.
///
/// All operations assume a single-threaded, step-driven caller; nothing here
/// blocks or suspends.
///
/// # Example
///
/// ```rust
/// use respawn::ResourcePool;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut pool = ResourcePool::with_capacity(
///     || Rc::new(Cell::new(false)),      // create: a fresh "active" flag
///     |slot: &Rc<Cell<bool>>| !slot.get(), // available while inactive
///     |_slot| {},                          // nothing extra to free
///     2,
/// );
///
/// let first = pool.acquire().unwrap().unwrap();
/// first.set(true); // checked out: unavailable until flipped back
///
/// let second = pool.acquire().unwrap().unwrap();
/// second.set(true);
///
/// // capacity reached and nothing reusable: not an error, try again later
/// assert!(pool.acquire().unwrap().is_none());
///
/// first.set(false);
/// let reused = pool.acquire().unwrap().unwrap();
/// assert!(Rc::ptr_eq(&first, &reused));
/// ```
pub struct ResourcePool<T> {
    slots: Vec<T>,
    capacity: usize,
    hooks: Option<Hooks<T>>,
}

impl<T> ResourcePool<T> {
    /// Create an unbounded pool (capacity is effectively unlimited).
    ///
    /// - `create` constructs a new instance on demand; it may allocate
    ///   external resources and is only invoked when nothing is reusable.
    /// - `is_available` decides whether an already-pooled instance may be
    ///   handed out again.
    /// - `destroy` frees an instance; invoked exactly once per instance, at
    ///   disposal time only.
    pub fn new<C, A, D>(create: C, is_available: A, destroy: D) -> Self
    where
        C: FnMut() -> T + 'static,
        A: Fn(&T) -> bool + 'static,
        D: FnMut(T) + 'static,
    {
        Self::with_capacity(create, is_available, destroy, 0)
    }

    /// Create a pool with a hard limit on the number of instances.
    ///
    /// A `capacity` of zero means unbounded, matching [`new`](Self::new).
    pub fn with_capacity<C, A, D>(create: C, is_available: A, destroy: D, capacity: usize) -> Self
    where
        C: FnMut() -> T + 'static,
        A: Fn(&T) -> bool + 'static,
        D: FnMut(T) + 'static,
    {
        let (slots, capacity) = if capacity > 0 {
            (Vec::with_capacity(capacity), capacity)
        } else {
            (Vec::new(), usize::MAX)
        };

        Self {
            slots,
            capacity,
            hooks: Some(Hooks {
                create: Box::new(create),
                is_available: Box::new(is_available),
                destroy: Box::new(destroy),
            }),
        }
    }

    /// Hand out a reusable instance, creating one only when necessary.
    ///
    /// Scans pooled instances in insertion order and returns the first one
    /// the availability predicate accepts; the scan mutates nothing, so the
    /// caller is expected to make the instance unavailable (e.g. by flipping
    /// an activity flag) until it can be reused again. When nothing is
    /// reusable and the pool is below capacity, a new instance is created
    /// and appended.
    ///
    /// `Ok(None)` means the pool is at capacity with nothing reusable — a
    /// "try again later" signal, not a failure.
    ///
    /// # Errors
    ///
    /// [`PoolError::Disposed`] if the pool has been disposed.
    pub fn acquire(&mut self) -> Result<Option<T>, PoolError>
    where
        T: Clone,
    {
        let hooks = self.hooks.as_mut().ok_or(PoolError::Disposed)?;

        for slot in &self.slots {
            if (hooks.is_available)(slot) {
                trace!("reusing pooled instance");
                return Ok(Some(slot.clone()));
            }
        }

        if self.slots.len() < self.capacity {
            let instance = (hooks.create)();
            self.slots.push(instance.clone());
            trace!(pooled = self.slots.len(), "created new pooled instance");
            return Ok(Some(instance));
        }

        trace!(capacity = self.capacity, "pool exhausted");
        Ok(None)
    }

    /// Tear the pool down, destroying every pooled instance.
    ///
    /// `destroy` runs once per instance, in insertion order. Afterwards the
    /// pool is empty and permanently disposed; any further `acquire`,
    /// `dispose`, or implicit drop-time teardown is a no-op beyond the
    /// reported error. Hook failures are not caught or retried; a panic in
    /// `destroy` propagates to the caller.
    ///
    /// # Errors
    ///
    /// [`PoolError::Disposed`] if the pool was already disposed. No destroy
    /// hook runs a second time.
    pub fn dispose(&mut self) -> Result<(), PoolError> {
        let mut hooks = self.hooks.take().ok_or(PoolError::Disposed)?;

        let destroyed = self.slots.len();
        for slot in self.slots.drain(..) {
            (hooks.destroy)(slot);
        }

        trace!(destroyed, "pool disposed");
        Ok(())
    }

    /// Number of instances currently held (zero once disposed).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool currently holds no instances.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The configured hard limit (`usize::MAX` when unbounded).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the pool has entered its terminal disposed state.
    pub fn is_disposed(&self) -> bool {
        self.hooks.is_none()
    }
}

impl<T> Drop for ResourcePool<T> {
    /// Disposal is RAII-backed: if the owner never called
    /// [`dispose`](Self::dispose), dropping the pool runs the same teardown,
    /// so `destroy` still fires exactly once per held instance.
    fn drop(&mut self) {
        let _ = self.dispose();
    }
}
