//! Callback registry shared by the observable sources and the list model.
//!
//! The model is single-threaded and event-driven: sources notify through
//! plain `Fn()` callbacks on the owning thread, never across threads.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerKey(usize);

/// An interior-mutable set of change callbacks.
///
/// Notification iterates over a snapshot of the current callbacks, so a
/// callback may subscribe or unsubscribe during dispatch without
/// invalidating the iteration.
#[derive(Default)]
pub struct Listeners {
    next_key: Cell<usize>,
    subscribers: RefCell<Vec<(ListenerKey, Rc<dyn Fn()>)>>,
}

impl Listeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; returns a key for [`Listeners::unsubscribe`].
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> ListenerKey {
        let key = ListenerKey(self.next_key.get());
        self.next_key.set(self.next_key.get() + 1);
        self.subscribers.borrow_mut().push((key, Rc::new(callback)));
        key
    }

    /// Remove a previously registered callback. Unknown keys are ignored.
    pub fn unsubscribe(&self, key: ListenerKey) {
        self.subscribers.borrow_mut().retain(|(k, _)| *k != key);
    }

    /// Invoke every registered callback.
    pub fn notify(&self) {
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in snapshot {
            callback();
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("subscribers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_notify() {
        let listeners = Listeners::new();
        let hits = Rc::new(Cell::new(0));

        let hits_clone = Rc::clone(&hits);
        listeners.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        listeners.notify();
        listeners.notify();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let listeners = Listeners::new();
        let hits = Rc::new(Cell::new(0));

        let hits_clone = Rc::clone(&hits);
        let key = listeners.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        listeners.notify();
        listeners.unsubscribe(key);
        listeners.notify();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unsubscribe_during_dispatch() {
        let listeners = Rc::new(Listeners::new());
        let hits = Rc::new(Cell::new(0));

        let listeners_clone = Rc::clone(&listeners);
        let hits_clone = Rc::clone(&hits);
        let key = Rc::new(Cell::new(None));
        let key_clone = Rc::clone(&key);
        let registered = listeners.subscribe(move || {
            hits_clone.set(hits_clone.get() + 1);
            if let Some(k) = key_clone.get() {
                listeners_clone.unsubscribe(k);
            }
        });
        key.set(Some(registered));

        listeners.notify();
        listeners.notify();
        assert_eq!(hits.get(), 1);
    }
}
