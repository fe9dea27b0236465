use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Listeners<S> {
    next_id: u64,
    entries: Vec<(u64, Listener<S>)>,
}

/// Shared state container with change notification
///
/// Clones share the same state. Listeners run after the write lock is
/// released, so they may read the store again.
pub struct Store<S> {
    state: Arc<RwLock<S>>,
    listeners: Arc<Mutex<Listeners<S>>>,
    generation: Arc<AtomicU64>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<S: Default + Clone + Send + Sync + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            listeners: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> S {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Read a projection of the state without cloning all of it
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        match self.state.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Mutate the state and notify every listener
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let (result, snapshot) = {
            let mut guard = match self.state.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let result = f(&mut guard);
            (result, guard.clone())
        };
        self.notify(&snapshot);
        result
    }

    /// Register a listener; it stays registered while the handle lives
    pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut listeners = match self.listeners.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, Arc::new(listener)));
            id
        };

        let weak: Weak<Mutex<Listeners<S>>> = Arc::downgrade(&self.listeners);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(listeners) = weak.upgrade() {
                    if let Ok(mut listeners) = listeners.lock() {
                        listeners.entries.retain(|(entry_id, _)| *entry_id != id);
                    }
                }
            })),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.entries.len()).unwrap_or(0)
    }

    /// Start a new request generation; older generations become stale
    pub fn begin_request(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the most recent request
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn notify(&self, snapshot: &S) {
        let listeners: Vec<Listener<S>> = match self.listeners.lock() {
            Ok(guard) => guard.entries.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(poisoned) => poisoned.into_inner().entries.iter().map(|(_, l)| Arc::clone(l)).collect(),
        };
        for listener in listeners {
            listener(snapshot);
        }
    }
}

/// Handle returned by [`Store::subscribe`]; dropping it unsubscribes
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the store
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_update_notifies_with_new_state() {
        let store = Store::new(0_u32);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |value| sink.lock().unwrap().push(*value));

        store.update(|v| *v += 1);
        store.update(|v| *v += 2);

        assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
        assert_eq!(store.snapshot(), 3);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let store = Store::new(String::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.update(|s| s.push('a'));
        drop(sub);
        store.update(|s| s.push('b'));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_detached_subscription_stays() {
        let store = Store::new(0_u8);
        store.subscribe(|_| {}).detach();
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = Store::new(1_i32);
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |_| {
            *sink.lock().unwrap() = Some(reader.snapshot());
        });

        store.update(|v| *v = 42);
        assert_eq!(*seen.lock().unwrap(), Some(42));
    }

    #[test]
    fn test_request_generations() {
        let store = Store::new(());
        let first = store.begin_request();
        let second = store.begin_request();
        assert!(!store.is_current(first));
        assert!(store.is_current(second));
    }
}
