//! Slot change listeners and their removal tokens
//!
//! Listeners fire synchronously, inline with the mutation that triggered
//! them. The registry never holds its lock while a callback runs, so a
//! listener may touch the inventory again; the last write wins.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};

/// Called with `(slot, before, after)` after a slot changed
pub type SlotChangeListener<S> = Arc<dyn Fn(usize, &S, &S) + Send + Sync>;

/// Called after any slot of an inventory changed
pub type InvChangeListener = Arc<dyn Fn() + Send + Sync>;

/// Called once when a listener is removed or its inventory invalidated
pub type ListenerRemoval = Box<dyn FnOnce() + Send + Sync>;

/// Handle to a registered listener. Its only operation is removal.
pub struct ListenerToken {
    remove: Box<dyn FnOnce() + Send + Sync>,
}

impl ListenerToken {
    /// Create a token that runs `remove` when removed
    pub fn new(remove: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            remove: Box::new(remove),
        }
    }

    /// Unregister the listener this token represents
    pub fn remove(self) {
        (self.remove)()
    }
}

impl fmt::Debug for ListenerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerToken")
    }
}

/// Take a removal callback out of a shared cell and run it, at most once
pub(crate) fn fire_removal_once(cell: &Mutex<Option<ListenerRemoval>>) {
    let removal = cell.lock().take();
    if let Some(removal) = removal {
        removal();
    }
}

struct Entry<S> {
    listener: SlotChangeListener<S>,
    removal: Option<ListenerRemoval>,
}

struct RegistryInner<S> {
    next_id: u64,
    entries: BTreeMap<u64, Entry<S>>,
}

/// Listener storage for inventory backends
pub struct ListenerRegistry<S> {
    inner: Arc<Mutex<RegistryInner<S>>>,
}

impl<S: 'static> ListenerRegistry<S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                next_id: 0,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Register a listener
    pub fn add(&self, listener: SlotChangeListener<S>, removal: ListenerRemoval) -> ListenerToken {
        let id = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.insert(
                id,
                Entry {
                    listener,
                    removal: Some(removal),
                },
            );
            id
        };

        let registry: Weak<Mutex<RegistryInner<S>>> = Arc::downgrade(&self.inner);
        ListenerToken::new(move || {
            let Some(inner) = registry.upgrade() else {
                return;
            };
            let entry = inner.lock().entries.remove(&id);
            if let Some(removal) = entry.and_then(|e| e.removal) {
                removal();
            }
        })
    }

    /// Notify every listener of a slot change
    pub fn fire(&self, slot: usize, before: &S, after: &S) {
        let listeners: Vec<SlotChangeListener<S>> = self
            .inner
            .lock()
            .entries
            .values()
            .map(|e| Arc::clone(&e.listener))
            .collect();

        for listener in listeners {
            listener(slot, before, after);
        }
    }

    /// Drop every listener, running their removal callbacks
    pub fn invalidate(&self) {
        let entries = std::mem::take(&mut self.inner.lock().entries);
        if !entries.is_empty() {
            log::debug!("Invalidating {} inventory listener(s)", entries.len());
        }
        for (_, entry) in entries {
            if let Some(removal) = entry.removal {
                removal();
            }
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Check if nothing is listening
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: 'static> Default for ListenerRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counter() -> (Arc<AtomicU32>, Arc<AtomicU32>) {
        let counter = Arc::new(AtomicU32::new(0));
        (counter.clone(), counter)
    }

    #[test]
    fn test_fire_and_remove() {
        let registry: ListenerRegistry<u32> = ListenerRegistry::new();
        let (fired, fired_clone) = counter();
        let (removed, removed_clone) = counter();

        let token = registry.add(
            Arc::new(move |slot: usize, before: &u32, after: &u32| {
                assert_eq!((slot, *before, *after), (1, 2, 3));
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }),
            Box::new(move || {
                removed_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        registry.fire(1, &2, &3);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        token.remove();
        assert_eq!(removed.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());

        registry.fire(1, &2, &3);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalidate_runs_removals() {
        let registry: ListenerRegistry<u32> = ListenerRegistry::new();
        let (removed, removed_clone) = counter();

        let token = registry.add(
            Arc::new(|_: usize, _: &u32, _: &u32| {}),
            Box::new(move || {
                removed_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        registry.invalidate();
        assert_eq!(removed.load(Ordering::SeqCst), 1);

        // Removing after invalidation must not run the callback twice
        token.remove();
        assert_eq!(removed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_token_outlives_registry() {
        let registry: ListenerRegistry<u32> = ListenerRegistry::new();
        let token = registry.add(Arc::new(|_: usize, _: &u32, _: &u32| {}), Box::new(|| {}));
        drop(registry);
        token.remove();
    }

    #[test]
    fn test_listener_may_reenter() {
        let registry: Arc<ListenerRegistry<u32>> = Arc::new(ListenerRegistry::new());
        let inner = registry.clone();
        let (count, count_clone) = counter();

        let _token = registry.add(
            Arc::new(move |_: usize, _: &u32, _: &u32| {
                count_clone.store(inner.len() as u32, Ordering::SeqCst);
            }),
            Box::new(|| {}),
        );

        registry.fire(0, &0, &1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
