//! Explicit shared-instance registry.
//!
//! The classic alternative here is a lazily-initialized global singleton.
//! That pattern makes code depend on ambient process-wide state and is hard
//! to isolate in tests, so this module keeps the useful part — "create the
//! shared instance at most once, even under racing callers" — and drops the
//! globalness: a [`Registry`] is an ordinary value the application
//! constructs and passes to its collaborators (one per process, one per
//! test, one per subsystem, as it sees fit).

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::trace;

/// Type-keyed store of lazily-created shared instances.
///
/// At most one instance per concrete type lives in a registry. The first
/// `get_or_init` for a type runs the supplied factory; every later call for
/// that type returns a clone of the same [`Arc`], regardless of the factory
/// it passes. The internal lock is held only around the check-then-create
/// sequence, never while callers use the instance.
///
/// # Example
///
/// ```rust
/// use respawn::Registry;
///
/// struct AudioService {
///     volume: f32,
/// }
///
/// let registry = Registry::new();
///
/// let audio = registry.get_or_init(|| AudioService { volume: 0.8 });
/// let again = registry.get_or_init(|| AudioService { volume: 0.1 });
///
/// // same instance; the second factory never ran
/// assert!(std::sync::Arc::ptr_eq(&audio, &again));
/// assert_eq!(again.volume, 0.8);
/// ```
#[derive(Default)]
pub struct Registry {
    entries: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the shared instance of `T`, creating it on first access.
    ///
    /// The factory runs at most once per type per registry, inside the
    /// exclusive region, so racing callers cannot double-create.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock was poisoned by a panicking factory on
    /// another thread.
    pub fn get_or_init<T, F>(&self, factory: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let mut entries = self.entries.lock().expect("registry lock poisoned");

        let entry = entries.entry(TypeId::of::<T>()).or_insert_with(|| {
            trace!(type_name = std::any::type_name::<T>(), "creating shared instance");
            Arc::new(factory())
        });

        Arc::clone(entry)
            .downcast::<T>()
            .unwrap_or_else(|_| unreachable!("entry keyed by TypeId::of::<T>() stores a T"))
    }

    /// Whether an instance of `T` has been created.
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.entries
            .lock()
            .expect("registry lock poisoned")
            .contains_key(&TypeId::of::<T>())
    }

    /// Number of instances created so far.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("registry lock poisoned").len()
    }

    /// Whether no instances have been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
