//! Fine-grained reactive state handles
//!
//! A push-only signal store: widgets keep their mutable fields in typed
//! [`State<T>`] handles, and every write notifies the store's change
//! listeners. Hosts hook a listener to schedule a re-render; nothing here
//! pulls, diffs, or rebuilds.
//!
//! ```rust
//! use tapdown_core::reactive::StateStore;
//!
//! let store = StateStore::new();
//! let open = store.state(false);
//!
//! store.on_change(|id| tracing::trace!(?id, "state changed"));
//! open.set(true);
//! assert!(open.get());
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Unique identifier for a signal
    pub struct SignalId;
}

/// Callback invoked after any signal in the store changes
pub type ChangeListener = Arc<dyn Fn(SignalId) + Send + Sync>;

struct SignalSlot {
    value: Box<dyn Any + Send>,
}

struct StoreInner {
    signals: SlotMap<SignalId, SignalSlot>,
    listeners: SmallVec<[ChangeListener; 2]>,
}

/// Shared signal store backing [`State<T>`] handles
///
/// Cheap to clone; all clones see the same signals.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                signals: SlotMap::with_key(),
                listeners: SmallVec::new(),
            })),
        }
    }

    /// Allocate a new signal and return its typed handle
    pub fn state<T: Clone + Send + 'static>(&self, initial: T) -> State<T> {
        let id = {
            let mut inner = self.inner.lock().unwrap();
            inner.signals.insert(SignalSlot {
                value: Box::new(initial),
            })
        };
        State {
            store: self.clone(),
            id,
            _marker: PhantomData,
        }
    }

    /// Register a listener called after every signal write
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(SignalId) + Send + Sync + 'static,
    {
        self.inner.lock().unwrap().listeners.push(Arc::new(listener));
    }

    fn get<T: Clone + 'static>(&self, id: SignalId) -> Option<T> {
        let inner = self.inner.lock().unwrap();
        inner
            .signals
            .get(id)
            .and_then(|slot| slot.value.downcast_ref::<T>())
            .cloned()
    }

    fn set<T: Send + 'static>(&self, id: SignalId, value: T) {
        let listeners: SmallVec<[ChangeListener; 2]> = {
            let mut inner = self.inner.lock().unwrap();
            if let Some(slot) = inner.signals.get_mut(id) {
                slot.value = Box::new(value);
            }
            inner.listeners.clone()
        };
        tracing::trace!(?id, "signal set");
        // Notify outside the lock so listeners may read state freely
        for listener in listeners {
            listener(id);
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A typed handle to one signal in a [`StateStore`]
///
/// Handles are cheap to clone and share; the value lives in the store.
pub struct State<T> {
    store: StateStore,
    id: SignalId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            id: self.id,
            _marker: PhantomData,
        }
    }
}

impl<T: Clone + Send + 'static> State<T> {
    /// Read the current value
    pub fn get(&self) -> T {
        self.store
            .get(self.id)
            .expect("signal slot missing or type mismatch")
    }

    /// Replace the value and notify listeners
    pub fn set(&self, value: T) {
        self.store.set(self.id, value);
    }

    /// The underlying signal identity
    pub fn signal_id(&self) -> SignalId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_state_get_set() {
        let store = StateStore::new();
        let label = store.state(String::new());
        assert_eq!(label.get(), "");

        label.set("Kotlin".to_string());
        assert_eq!(label.get(), "Kotlin");
    }

    #[test]
    fn test_handles_share_value() {
        let store = StateStore::new();
        let open = store.state(false);
        let alias = open.clone();

        alias.set(true);
        assert!(open.get());
    }

    #[test]
    fn test_change_listener_fires_per_write() {
        let store = StateStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        store.on_change(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let value = store.state(0u32);
        value.set(1);
        value.set(2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_may_read_state() {
        // Notification happens outside the store lock
        let store = StateStore::new();
        let value = store.state(7u32);
        let value_for_listener = value.clone();
        let observed = Arc::new(AtomicUsize::new(0));
        let observed_in = observed.clone();
        store.on_change(move |_| {
            observed_in.store(value_for_listener.get() as usize, Ordering::SeqCst);
        });

        value.set(42);
        assert_eq!(observed.load(Ordering::SeqCst), 42);
    }
}
