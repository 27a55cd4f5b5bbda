//! # Observable Store
//!
//! A shared state container with subscribe/notify semantics. Every store in
//! the client (UI flags, settings, swap draft, wallet status) is one of these.
//!
//! - Updates run under the write lock, so each call is atomic.
//! - Listeners are called after the lock is released, once per update, with
//!   the post-update snapshot, in subscription order.
//! - Updates from different threads are serialized through notification, so
//!   listeners observe them in the order they were applied.
//! - Listeners may read or update the store from inside the callback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Store<S> {
    state: RwLock<S>,
    listeners: RwLock<Vec<(SubscriptionId, Listener<S>)>>,
    next_id: AtomicU64,
    /// Held from mutation until every listener has run. Reentrant so a
    /// listener can update the store on the same thread.
    writes: ReentrantMutex<()>,
}

impl<S: Clone> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            writes: ReentrantMutex::new(()),
        }
    }

    /// Clone of the current state.
    pub fn get(&self) -> S {
        self.state.read().clone()
    }

    /// Read the state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.read())
    }

    /// Mutate the state and notify subscribers.
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let _writing = self.writes.lock();
        let (result, snapshot) = {
            let mut state = self.state.write();
            let result = f(&mut state);
            (result, state.clone())
        };
        self.notify(&snapshot);
        result
    }

    /// Run `f` while holding the write sequence, so no other thread's
    /// update lands in between. Nested [`Store::update`] calls from `f` on
    /// this thread are allowed.
    pub fn exclusive<R>(&self, f: impl FnOnce() -> R) -> R {
        let _writing = self.writes.lock();
        f()
    }

    /// Replace the whole state and notify subscribers.
    pub fn set(&self, next: S) {
        self.update(|state| *state = next);
    }

    pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.read().len()
    }

    fn notify(&self, snapshot: &S) {
        // Snapshot the listener list so callbacks can subscribe or unsubscribe.
        let listeners: Vec<Listener<S>> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
